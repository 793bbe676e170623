//! Runtime metadata fixtures for testing purposes.
//!
//! Builds SCALE-encoded V15 metadata, as returned by `state_getMetadata`, describing a
//! `System` pallet with an `Account` map and optionally an `SS58Prefix` constant.

use frame_metadata::{
	v15::{
		CustomMetadata, ExtrinsicMetadata, OuterEnums, PalletConstantMetadata, PalletMetadata,
		PalletStorageMetadata, RuntimeMetadataV15, StorageEntryMetadata, StorageEntryModifier,
		StorageEntryType, StorageHasher,
	},
	RuntimeMetadataPrefixed,
};
use parity_scale_codec::Encode;
use scale_info::{meta_type, TypeInfo};

/// Balances of an account on a runtime with the `frozen` field.
#[derive(Encode, TypeInfo, Clone, Debug, Default, PartialEq, Eq)]
pub struct TestAccountData {
	pub free: u128,
	pub reserved: u128,
	pub frozen: u128,
	pub flags: u128,
}

/// `System.Account` value on current runtimes.
#[derive(Encode, TypeInfo, Clone, Debug, Default, PartialEq, Eq)]
pub struct TestAccountInfo {
	pub nonce: u32,
	pub consumers: u32,
	pub providers: u32,
	pub sufficients: u32,
	pub data: TestAccountData,
}

/// Balances of an account on runtimes predating the `frozen` field.
#[derive(Encode, TypeInfo, Clone, Debug, Default, PartialEq, Eq)]
pub struct LegacyAccountData {
	pub free: u128,
	pub reserved: u128,
	pub misc_frozen: u128,
	pub fee_frozen: u128,
}

/// `System.Account` value on legacy runtimes.
#[derive(Encode, TypeInfo, Clone, Debug, Default, PartialEq, Eq)]
pub struct LegacyAccountInfo {
	pub nonce: u32,
	pub consumers: u32,
	pub providers: u32,
	pub sufficients: u32,
	pub data: LegacyAccountData,
}

/// Encoded account value with some balance.
pub fn funded_account(free: u128) -> TestAccountInfo {
	TestAccountInfo {
		nonce: 3,
		consumers: 1,
		providers: 1,
		sufficients: 0,
		data: TestAccountData {
			free,
			reserved: 250,
			frozen: 100,
			flags: 0,
		},
	}
}

/// Metadata whose `System.Account` entry holds `A` values.
///
/// # Arguments
///
/// * `prefix` - Value of the `System.SS58Prefix` constant, omitted when `None`
/// * `account_storage` - Whether the `System` pallet declares the `Account` entry
pub fn build_metadata<A: TypeInfo + Encode + Default + 'static>(
	prefix: Option<u16>,
	account_storage: bool,
) -> Vec<u8> {
	let storage = account_storage.then(|| PalletStorageMetadata {
		prefix: "System",
		entries: vec![StorageEntryMetadata {
			name: "Account",
			modifier: StorageEntryModifier::Default,
			ty: StorageEntryType::Map {
				hashers: vec![StorageHasher::Blake2_128Concat],
				key: meta_type::<[u8; 32]>(),
				value: meta_type::<A>(),
			},
			default: A::default().encode(),
			docs: vec![],
		}],
	});

	let constants = prefix
		.map(|prefix| PalletConstantMetadata {
			name: "SS58Prefix",
			ty: meta_type::<u16>(),
			value: prefix.encode(),
			docs: vec![],
		})
		.into_iter()
		.collect();

	let pallets = vec![PalletMetadata {
		name: "System",
		storage,
		calls: None,
		event: None,
		constants,
		error: None,
		index: 0,
		docs: vec![],
	}];

	let extrinsic = ExtrinsicMetadata {
		version: 4,
		signed_extensions: vec![],
		address_ty: meta_type::<()>(),
		call_ty: meta_type::<()>(),
		signature_ty: meta_type::<()>(),
		extra_ty: meta_type::<()>(),
	};

	let meta = RuntimeMetadataV15::new(
		pallets,
		extrinsic,
		meta_type::<()>(),
		vec![],
		OuterEnums {
			call_enum_ty: meta_type::<()>(),
			event_enum_ty: meta_type::<()>(),
			error_enum_ty: meta_type::<()>(),
		},
		CustomMetadata {
			map: Default::default(),
		},
	);
	let runtime_metadata: RuntimeMetadataPrefixed = meta.into();

	runtime_metadata.encode()
}

/// Metadata of a current runtime declaring `prefix`.
pub fn metadata_bytes(prefix: Option<u16>) -> Vec<u8> {
	build_metadata::<TestAccountInfo>(prefix, true)
}
