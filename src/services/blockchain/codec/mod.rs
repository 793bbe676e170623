//! Chain data codecs.
//!
//! The session never decodes SCALE data itself. It asks a [`MetadataDecoder`] for a
//! [`MetadataSchema`] built from the node's metadata and uses that schema to derive
//! storage keys and decode storage values.

mod address;
mod metadata;

use std::sync::Arc;
use thiserror::Error;

use crate::models::AccountInfo;

pub use address::{decode_address, AddressError, DEFAULT_ADDRESS_PREFIX};
pub use metadata::{SubxtMetadataDecoder, SubxtMetadataSchema};

/// Errors raised while interpreting runtime metadata or data encoded against it
#[derive(Debug, Error)]
pub enum SchemaError {
	#[error("Invalid metadata: {0}")]
	InvalidMetadata(String),

	#[error("Storage entry {pallet}.{entry} not found in metadata")]
	MissingStorageEntry { pallet: String, entry: String },

	#[error("Failed to derive storage key: {0}")]
	StorageKey(String),

	#[error("Failed to decode value: {0}")]
	Decode(String),
}

impl SchemaError {
	pub fn missing_storage_entry(pallet: &str, entry: &str) -> Self {
		Self::MissingStorageEntry {
			pallet: pallet.to_string(),
			entry: entry.to_string(),
		}
	}

	pub fn missing_field(path: &[&str]) -> Self {
		Self::Decode(format!("missing or invalid field {}", path.join(".")))
	}
}

/// Interpretation of chain data under one runtime's metadata
pub trait MetadataSchema: Send + Sync {
	/// Full storage key of a single-key map entry
	fn storage_key(&self, pallet: &str, entry: &str, key: &[u8]) -> Result<Vec<u8>, SchemaError>;

	/// Decodes a `System.Account` storage value
	fn decode_account_info(&self, bytes: &[u8]) -> Result<AccountInfo, SchemaError>;

	/// SS58 prefix declared by the runtime, if any
	fn address_prefix(&self) -> Option<u16>;
}

/// Builds a schema from SCALE-encoded runtime metadata
pub trait MetadataDecoder: Send + Sync {
	fn decode(&self, bytes: &[u8]) -> Result<Arc<dyn MetadataSchema>, SchemaError>;
}
