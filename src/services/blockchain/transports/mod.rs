//! Network transport implementations for node clients.
//!
//! Provides the raw JSON-RPC channel to a node and the typed Substrate RPC layer built
//! on top of it:
//! - WebSocket transport with typed connection-closed detection
//! - Substrate RPC client translating JSON-RPC results into models
//! - Connector used by the session to open (and reopen) transports

mod error;
mod ws {
	pub mod config;
	pub mod connection;
	pub mod transport;
}
mod substrate {
	pub mod client;
	pub mod connector;
}

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use subxt::utils::H256;

use crate::models::{RuntimeVersion, SignedBlock};

pub use error::TransportError;
pub use substrate::{client::SubstrateTransportClient, connector::WsConnector};
pub use ws::{config::WsConfig, connection::WebSocketConnection, transport::WsTransportClient};

/// Base trait for all JSON-RPC transport clients
#[async_trait]
pub trait BlockchainTransport: Send + Sync {
	/// Get the URL being used by the transport
	async fn get_current_url(&self) -> String;

	/// Send a raw request and return the full JSON-RPC response object
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize;
}

/// Typed Substrate node RPC surface used by the session
#[async_trait]
pub trait SubstrateTransport: Send + Sync {
	/// Current runtime version (`state_getRuntimeVersion`)
	async fn get_runtime_version(&self) -> Result<RuntimeVersion, TransportError>;

	/// SCALE-encoded runtime metadata (`state_getMetadata`)
	async fn get_metadata(&self) -> Result<Vec<u8>, TransportError>;

	/// Hash of the block at `height`, `None` above the best block
	async fn get_block_hash(&self, height: u64) -> Result<Option<H256>, TransportError>;

	/// Hash of the best block
	async fn get_block_hash_latest(&self) -> Result<H256, TransportError>;

	/// Block body and header, `None` for an unknown hash
	async fn get_block(&self, hash: H256) -> Result<Option<SignedBlock>, TransportError>;

	/// Raw storage value at `key` as of block `at`
	async fn get_storage(&self, key: &[u8], at: H256) -> Result<Option<Vec<u8>>, TransportError>;

	/// Arbitrary RPC call returning the `result` field
	async fn call(&self, method: &str, params: Value) -> Result<Value, TransportError>;
}

/// Opens transports to a node endpoint
#[async_trait]
pub trait TransportConnector: Send + Sync {
	type Transport: SubstrateTransport;

	async fn connect(&self, endpoint: &str) -> Result<Self::Transport, TransportError>;
}
