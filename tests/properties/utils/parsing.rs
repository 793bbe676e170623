use crate::properties::strategies::hex_string_strategy;

use proptest::{prelude::*, test_runner::Config};
use substrate_query::utils::{decode_hex, encode_hex, normalize_hex_prefix, parse_hex_u64};

proptest! {
	#![proptest_config(Config {
		failure_persistence: None,
		..Config::default()
	})]

	#[test]
	fn test_normalize_is_idempotent(hex in hex_string_strategy()) {
		let once = normalize_hex_prefix(&hex);
		prop_assert!(once.starts_with("0x"));
		prop_assert_eq!(&once[2..], hex.as_str());
		prop_assert_eq!(normalize_hex_prefix(&once), once);
	}

	#[test]
	fn test_decode_accepts_either_form(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
		let encoded = encode_hex(&bytes);
		prop_assert_eq!(decode_hex(&encoded), Ok(bytes.clone()));
		prop_assert_eq!(decode_hex(&encoded[2..]), Ok(bytes));
	}

	#[test]
	fn test_hex_quantity(value in any::<u64>()) {
		prop_assert_eq!(parse_hex_u64(&format!("0x{:x}", value)), Ok(value));
	}
}
