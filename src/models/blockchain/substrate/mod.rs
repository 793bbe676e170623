//! Substrate chain data structures.
//!
//! - `runtime`: Runtime version as reported by `state_getRuntimeVersion`
//! - `block`: Blocks from `chain_getBlock` and their summaries
//! - `account`: Decoded `System.Account` entries

mod account;
mod block;
mod runtime;

pub use account::{AccountData, AccountInfo};
pub use block::{BlockDigest, BlockError, BlockHeader, BlockSummary, RpcBlock, SignedBlock};
pub use runtime::{RuntimeIdentity, RuntimeVersion};
