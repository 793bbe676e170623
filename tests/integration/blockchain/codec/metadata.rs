use parity_scale_codec::Encode;
use sp_core::hashing::{blake2_128, twox_128};

use crate::integration::mocks::{build_metadata, funded_account, metadata_bytes};
use substrate_query::services::blockchain::{MetadataDecoder, SchemaError, SubxtMetadataDecoder};

#[test]
fn test_account_storage_key_layout() {
	let schema = SubxtMetadataDecoder.decode(&metadata_bytes(None)).unwrap();
	let public_key = [7u8; 32];

	let key = schema.storage_key("System", "Account", &public_key).unwrap();

	let expected = [
		twox_128(b"System").to_vec(),
		twox_128(b"Account").to_vec(),
		blake2_128(&public_key).to_vec(),
		public_key.to_vec(),
	]
	.concat();
	assert_eq!(key, expected);
}

#[test]
fn test_unknown_storage_entry() {
	let schema = SubxtMetadataDecoder.decode(&metadata_bytes(None)).unwrap();

	assert!(matches!(
		schema.storage_key("System", "Events", &[0u8; 32]),
		Err(SchemaError::MissingStorageEntry { .. })
	));
	assert!(matches!(
		schema.storage_key("Balances", "Account", &[0u8; 32]),
		Err(SchemaError::MissingStorageEntry { .. })
	));

	let without_account = SubxtMetadataDecoder
		.decode(&build_metadata::<()>(None, false))
		.unwrap();
	assert!(matches!(
		without_account.storage_key("System", "Account", &[0u8; 32]),
		Err(SchemaError::MissingStorageEntry { .. })
	));
}

#[test]
fn test_decode_account_value() {
	let schema = SubxtMetadataDecoder.decode(&metadata_bytes(None)).unwrap();
	let encoded = funded_account(42_000_000_000_000).encode();

	let info = schema.decode_account_info(&encoded).unwrap();

	assert_eq!(info.nonce, 3);
	assert_eq!(info.consumers, 1);
	assert_eq!(info.providers, 1);
	assert_eq!(info.sufficients, 0);
	assert_eq!(info.data.free, 42_000_000_000_000);
	assert_eq!(info.data.reserved, 250);
	assert_eq!(info.data.frozen, 100);
}

#[test]
fn test_decode_truncated_account_value() {
	let schema = SubxtMetadataDecoder.decode(&metadata_bytes(None)).unwrap();
	let encoded = funded_account(1).encode();

	assert!(matches!(
		schema.decode_account_info(&encoded[..encoded.len() / 2]),
		Err(SchemaError::Decode(_))
	));
}

#[test]
fn test_declared_address_prefix() {
	let polkadot = SubxtMetadataDecoder.decode(&metadata_bytes(Some(0))).unwrap();
	let bifrost = SubxtMetadataDecoder.decode(&metadata_bytes(Some(6))).unwrap();
	let generic = SubxtMetadataDecoder.decode(&metadata_bytes(None)).unwrap();

	assert_eq!(polkadot.address_prefix(), Some(0));
	assert_eq!(bifrost.address_prefix(), Some(6));
	assert_eq!(generic.address_prefix(), None);
}

#[test]
fn test_reject_garbage_metadata() {
	assert!(matches!(
		SubxtMetadataDecoder.decode(&[]),
		Err(SchemaError::InvalidMetadata(_))
	));
	assert!(matches!(
		SubxtMetadataDecoder.decode(b"not metadata at all"),
		Err(SchemaError::InvalidMetadata(_))
	));
}
