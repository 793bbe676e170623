//! Session error types and handling.
//!
//! Each variant carries its cause. Constructor helpers log the error as it is
//! created so that failures show up in the logs even when a caller discards them.

use std::fmt;
use subxt::utils::H256;
use thiserror::Error;
use tracing::error;

use crate::{
	services::blockchain::{codec::AddressError, transports::TransportError},
	utils::encode_hex,
};

/// Identifies a block that was looked up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockId {
	Height(u64),
	Hash(H256),
}

impl fmt::Display for BlockId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Height(height) => write!(f, "height {}", height),
			Self::Hash(hash) => write!(f, "hash {}", encode_hex(hash)),
		}
	}
}

/// Errors returned by [`SubstrateSession`](crate::services::blockchain::SubstrateSession) operations
#[derive(Debug, Error)]
pub enum SessionError {
	/// The transport could not be opened or reopened
	#[error("Failed to connect to {endpoint}: {source}")]
	ConnectionError {
		endpoint: String,
		#[source]
		source: TransportError,
	},

	/// The runtime version query failed, including after a reconnect
	#[error("Runtime version unavailable: {0}")]
	RuntimeVersionUnavailable(#[source] TransportError),

	/// Metadata could not be fetched or decoded for a new runtime
	#[error("Failed to fetch metadata for spec version {spec_version}: {reason}")]
	MetadataFetchFailed { spec_version: u32, reason: String },

	#[error("Invalid address '{address}': {reason}")]
	InvalidAddress {
		address: String,
		#[source]
		reason: AddressError,
	},

	/// The current metadata has no usable entry for the storage item
	#[error("Failed to derive storage key for {pallet}.{entry}: {reason}")]
	StorageKeyDerivationFailed {
		pallet: String,
		entry: String,
		reason: String,
	},

	#[error("Account query failed: {0}")]
	AccountQueryFailed(#[source] TransportError),

	#[error("Failed to decode account info: {0}")]
	AccountDecodeFailed(String),

	#[error("Block not found at {0}")]
	BlockNotFound(BlockId),

	#[error("Block query failed: {0}")]
	BlockQueryFailed(#[source] TransportError),

	#[error("Fee query failed: {0}")]
	FeeQueryFailed(#[source] TransportError),

	/// `payment_queryInfo` returned no `partialFee`
	#[error("Fee response has no partialFee field")]
	FeeFieldMissing,

	/// `partialFee` is present but not a decimal string
	#[error("Fee response partialFee has unexpected form: {0}")]
	FeeFieldTypeMismatch(String),
}

impl SessionError {
	fn logged(self) -> Self {
		error!("{}", self);
		self
	}

	pub fn connection_error(endpoint: impl Into<String>, source: TransportError) -> Self {
		Self::ConnectionError {
			endpoint: endpoint.into(),
			source,
		}
		.logged()
	}

	pub fn runtime_version_unavailable(source: TransportError) -> Self {
		Self::RuntimeVersionUnavailable(source).logged()
	}

	pub fn metadata_fetch_failed(spec_version: u32, reason: impl ToString) -> Self {
		Self::MetadataFetchFailed {
			spec_version,
			reason: reason.to_string(),
		}
		.logged()
	}

	pub fn invalid_address(address: impl Into<String>, reason: AddressError) -> Self {
		Self::InvalidAddress {
			address: address.into(),
			reason,
		}
		.logged()
	}

	pub fn storage_key_derivation_failed(pallet: &str, entry: &str, reason: impl ToString) -> Self {
		Self::StorageKeyDerivationFailed {
			pallet: pallet.to_string(),
			entry: entry.to_string(),
			reason: reason.to_string(),
		}
		.logged()
	}

	pub fn account_query_failed(source: TransportError) -> Self {
		Self::AccountQueryFailed(source).logged()
	}

	pub fn account_decode_failed(reason: impl ToString) -> Self {
		Self::AccountDecodeFailed(reason.to_string()).logged()
	}

	pub fn block_not_found(block: BlockId) -> Self {
		Self::BlockNotFound(block).logged()
	}

	pub fn block_query_failed(source: TransportError) -> Self {
		Self::BlockQueryFailed(source).logged()
	}

	pub fn fee_query_failed(source: TransportError) -> Self {
		Self::FeeQueryFailed(source).logged()
	}

	pub fn fee_field_missing() -> Self {
		Self::FeeFieldMissing.logged()
	}

	pub fn fee_field_type_mismatch(found: impl ToString) -> Self {
		Self::FeeFieldTypeMismatch(found.to_string()).logged()
	}
}
