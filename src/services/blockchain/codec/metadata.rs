//! Runtime metadata backed by subxt.
//!
//! Storage keys are derived from dynamic storage addresses and account values are
//! decoded into dynamic values, so no chain-specific generated code is needed.

use parity_scale_codec::Decode;
use std::sync::Arc;
use subxt_core::{
	dynamic::{At, Value},
	Metadata,
};

use crate::{
	models::{AccountData, AccountInfo},
	services::blockchain::codec::{MetadataDecoder, MetadataSchema, SchemaError},
};

/// Schema view over decoded runtime metadata
#[derive(Clone, Debug)]
pub struct SubxtMetadataSchema {
	metadata: Metadata,
}

impl SubxtMetadataSchema {
	pub fn new(metadata: Metadata) -> Self {
		Self { metadata }
	}

	/// The decoded metadata
	pub fn metadata(&self) -> &Metadata {
		&self.metadata
	}
}

impl MetadataSchema for SubxtMetadataSchema {
	fn storage_key(&self, pallet: &str, entry: &str, key: &[u8]) -> Result<Vec<u8>, SchemaError> {
		self.metadata
			.pallet_by_name(pallet)
			.and_then(|p| p.storage())
			.and_then(|s| s.entry_by_name(entry))
			.ok_or_else(|| SchemaError::missing_storage_entry(pallet, entry))?;

		let address = subxt_core::dynamic::storage(pallet, entry, vec![Value::from_bytes(key)]);
		subxt_core::storage::get_address_bytes(&address, &self.metadata)
			.map_err(|e| SchemaError::StorageKey(e.to_string()))
	}

	fn decode_account_info(&self, bytes: &[u8]) -> Result<AccountInfo, SchemaError> {
		let address = subxt_core::dynamic::storage("System", "Account", Vec::<Value>::new());
		let thunk = subxt_core::storage::decode_value(&mut &bytes[..], &address, &self.metadata)
			.map_err(|e| SchemaError::Decode(e.to_string()))?;
		let value = thunk
			.to_value()
			.map_err(|e| SchemaError::Decode(e.to_string()))?;

		account_info_from_value(&value)
	}

	fn address_prefix(&self) -> Option<u16> {
		let constant = self
			.metadata
			.pallet_by_name("System")?
			.constant_by_name("SS58Prefix")?;

		let mut bytes = constant.value();
		match bytes.len() {
			1 => u8::decode(&mut bytes).ok().map(u16::from),
			_ => u16::decode(&mut bytes).ok(),
		}
	}
}

fn field<'a, T>(value: &'a Value<T>, path: &[&str]) -> Option<&'a Value<T>> {
	path.iter().try_fold(value, |current, name| current.at(*name))
}

fn u32_field<T>(value: &Value<T>, path: &[&str]) -> Result<u32, SchemaError> {
	field(value, path)
		.and_then(Value::as_u128)
		.and_then(|n| u32::try_from(n).ok())
		.ok_or_else(|| SchemaError::missing_field(path))
}

fn u128_field<T>(value: &Value<T>, path: &[&str]) -> Option<u128> {
	field(value, path).and_then(Value::as_u128)
}

/// Maps a decoded `AccountInfo` value onto the model
///
/// Runtimes before the fungible migration expose `misc_frozen` and `fee_frozen`
/// instead of `frozen`.
fn account_info_from_value<T>(value: &Value<T>) -> Result<AccountInfo, SchemaError> {
	let frozen = match u128_field(value, &["data", "frozen"]) {
		Some(frozen) => frozen,
		None => {
			let misc = u128_field(value, &["data", "misc_frozen"])
				.ok_or_else(|| SchemaError::missing_field(&["data", "frozen"]))?;
			let fee = u128_field(value, &["data", "fee_frozen"]).unwrap_or_default();
			misc.max(fee)
		}
	};

	Ok(AccountInfo {
		nonce: u32_field(value, &["nonce"])?,
		consumers: u32_field(value, &["consumers"])?,
		providers: u32_field(value, &["providers"])?,
		sufficients: u32_field(value, &["sufficients"]).unwrap_or_default(),
		data: AccountData {
			free: u128_field(value, &["data", "free"])
				.ok_or_else(|| SchemaError::missing_field(&["data", "free"]))?,
			reserved: u128_field(value, &["data", "reserved"])
				.ok_or_else(|| SchemaError::missing_field(&["data", "reserved"]))?,
			frozen,
		},
	})
}

/// Decodes `state_getMetadata` bytes with subxt
#[derive(Clone, Copy, Debug, Default)]
pub struct SubxtMetadataDecoder;

impl MetadataDecoder for SubxtMetadataDecoder {
	fn decode(&self, bytes: &[u8]) -> Result<Arc<dyn MetadataSchema>, SchemaError> {
		let metadata = Metadata::decode(&mut &bytes[..])
			.map_err(|e| SchemaError::InvalidMetadata(e.to_string()))?;
		Ok(Arc::new(SubxtMetadataSchema::new(metadata)))
	}
}
