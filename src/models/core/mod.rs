//! Core domain models for the query client.
//!
//! - Networks: Chain endpoint definitions and connection settings

mod network;

pub use network::Network;
