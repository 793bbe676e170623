//! Core services of the query client.
//!
//! - `blockchain`: Chain session, transports and codecs for Substrate nodes

pub mod blockchain;
