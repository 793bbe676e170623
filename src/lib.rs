//! Substrate chain query client.
//!
//! This library provides a session-oriented client for querying Substrate-based chain
//! nodes over JSON-RPC on a WebSocket connection.
//!
//! # Architecture
//! The crate is organised around a few components:
//! - Models: Typed chain data (blocks, accounts, runtime versions) and network configuration
//! - Services: The chain session, its transports and the metadata/address codecs
//! - Utils: Logging setup, hex parsing helpers and test builders
//!
//! # Flow
//! 1. A [`SubstrateSession`](services::blockchain::SubstrateSession) is opened against an endpoint
//! 2. The session fetches the runtime version and the matching chain metadata
//! 3. Every metadata-dependent query re-validates the runtime version first
//! 4. Raw node data is decoded through the cached metadata and returned as typed models

pub mod models;
pub mod services;
pub mod utils;
