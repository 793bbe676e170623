//! Parsing utilities
//!
//! This module provides helpers for the hex encodings used by Substrate JSON-RPC.

use serde::{Deserialize, Deserializer, Serializer};

/// Prepends `0x` to a hex string unless it already carries the prefix.
pub fn normalize_hex_prefix(value: &str) -> String {
	if value.starts_with("0x") {
		value.to_string()
	} else {
		format!("0x{}", value)
	}
}

/// Encodes bytes as a `0x`-prefixed lowercase hex string.
pub fn encode_hex(bytes: impl AsRef<[u8]>) -> String {
	format!("0x{}", hex::encode(bytes))
}

/// Decodes a hex string with or without the `0x` prefix.
pub fn decode_hex(value: &str) -> Result<Vec<u8>, String> {
	hex::decode(value.trim_start_matches("0x"))
		.map_err(|e| format!("Invalid hex string '{}': {}", value, e))
}

/// Parses a quantity encoded as a hex string (e.g. `"0x1a"`) into a `u64`.
pub fn parse_hex_u64(value: &str) -> Result<u64, String> {
	let digits = value.trim_start_matches("0x");
	if digits.is_empty() {
		return Err(format!("Invalid hex quantity: '{}'", value));
	}
	u64::from_str_radix(digits, 16).map_err(|e| format!("Invalid hex quantity '{}': {}", value, e))
}

/// Serde adapter for block numbers, which nodes encode as hex quantities.
pub mod hex_u64 {
	use super::*;

	pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&format!("0x{:x}", value))
	}

	pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
	where
		D: Deserializer<'de>,
	{
		let value = String::deserialize(deserializer)?;
		parse_hex_u64(&value).map_err(serde::de::Error::custom)
	}
}
