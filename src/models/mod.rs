//! Domain models and data structures for the query client.
//!
//! - `blockchain`: Substrate runtime, block and account types
//! - `config`: Configuration loading and validation
//! - `core`: Core domain models (Network)

mod blockchain;
mod config;
mod core;

pub use blockchain::substrate::{
	AccountData, AccountInfo, BlockDigest, BlockError, BlockHeader, BlockSummary, RpcBlock,
	RuntimeIdentity, RuntimeVersion, SignedBlock,
};

pub use core::Network;

pub use config::{ConfigError, ConfigLoader};
