//! SS58 address decoding.

use sp_core::crypto::{AccountId32, Ss58Codec};
use thiserror::Error;

/// Prefix used by generic Substrate chains
pub const DEFAULT_ADDRESS_PREFIX: u16 = 42;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AddressError {
	/// Not valid base58, wrong length or checksum mismatch
	#[error("Malformed SS58 address: {0}")]
	Malformed(String),

	/// Valid SS58 address for another network
	#[error("Address prefix {found} does not match expected prefix {expected}")]
	PrefixMismatch { expected: u16, found: u16 },
}

/// Decodes an SS58 address into its 32-byte account id
///
/// # Arguments
/// * `address` - SS58 encoded address
/// * `prefix` - Network prefix the address must carry
///
/// # Returns
/// * `Result<[u8; 32], AddressError>` - Raw public key or why the address was rejected
pub fn decode_address(address: &str, prefix: u16) -> Result<[u8; 32], AddressError> {
	let (account, format) = AccountId32::from_ss58check_with_version(address)
		.map_err(|e| AddressError::Malformed(e.to_string()))?;

	let found = u16::from(format);
	if found != prefix {
		return Err(AddressError::PrefixMismatch {
			expected: prefix,
			found,
		});
	}

	Ok(account.into())
}
