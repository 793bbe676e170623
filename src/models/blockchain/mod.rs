//! Blockchain-specific model implementations.
//!
//! Substrate is the only supported platform; its submodule holds the typed views
//! of runtime versions, blocks and accounts returned by the node.

pub mod substrate;
