//! Substrate block data structures.
//!
//! This module provides data structures for blocks returned by `chain_getBlock`
//! and the summary view handed to callers.
//!
//! Note: These structures follow the JSON shape of Substrate's `SignedBlock` RPC type:
//! <https://github.com/paritytech/polkadot-sdk/blob/master/substrate/primitives/runtime/src/generic/block.rs>

use serde::{Deserialize, Serialize};
use sp_core::hashing::blake2_256;
use subxt::utils::H256;
use thiserror::Error;

use crate::utils::{decode_hex, encode_hex, hex_u64};

/// A block together with its justifications, as returned by `chain_getBlock`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignedBlock {
	/// The block itself
	pub block: RpcBlock,
	/// Finality justifications, if the node has any for this block
	#[serde(default)]
	pub justifications: Option<serde_json::Value>,
}

/// A Substrate block with undecoded extrinsics
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RpcBlock {
	/// The block header
	pub header: BlockHeader,
	/// SCALE-encoded extrinsics as hex strings
	pub extrinsics: Vec<String>,
}

/// Substrate block header
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeader {
	/// Hash of the parent block
	pub parent_hash: String,
	/// Block height, hex encoded on the wire
	#[serde(with = "hex_u64")]
	pub number: u64,
	/// State root after applying the block
	pub state_root: String,
	/// Merkle root of the block's extrinsics
	pub extrinsics_root: String,
	/// Block digest
	#[serde(default)]
	pub digest: BlockDigest,
}

/// Block digest containing logs
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct BlockDigest {
	/// Digest log items in hexadecimal format
	pub logs: Vec<String>,
}

/// Errors raised while interpreting block contents
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BlockError {
	#[error("Extrinsic {index} is not valid hex: {reason}")]
	InvalidExtrinsic { index: usize, reason: String },
}

/// Summary of a block handed to callers
///
/// Extrinsics are kept as raw hex; decoding their call data is left to the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BlockSummary {
	/// Block height
	pub height: u64,
	/// Hash the block was fetched by
	pub hash: String,
	/// Hash of the parent block
	pub parent_hash: String,
	/// Merkle root of the block's extrinsics
	pub extrinsics_root: String,
	/// Raw extrinsics in block order
	pub extrinsics: Vec<String>,
}

impl BlockSummary {
	/// Builds a summary for the block stored under `hash`
	pub fn new(hash: H256, signed_block: SignedBlock) -> Self {
		let RpcBlock { header, extrinsics } = signed_block.block;
		Self {
			height: header.number,
			hash: encode_hex(hash.as_bytes()),
			parent_hash: header.parent_hash,
			extrinsics_root: header.extrinsics_root,
			extrinsics,
		}
	}

	/// Transaction hashes of the block's extrinsics
	///
	/// A transaction hash is the blake2-256 digest of the encoded extrinsic.
	///
	/// # Returns
	/// * `Result<Vec<String>, BlockError>` - `0x`-prefixed hashes in block order, or the
	///   first extrinsic that is not valid hex
	pub fn extrinsic_hashes(&self) -> Result<Vec<String>, BlockError> {
		self.extrinsics
			.iter()
			.enumerate()
			.map(|(index, extrinsic)| {
				let bytes = decode_hex(extrinsic)
					.map_err(|reason| BlockError::InvalidExtrinsic { index, reason })?;
				Ok(encode_hex(blake2_256(&bytes)))
			})
			.collect()
	}
}
