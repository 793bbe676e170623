//! Substrate RPC client.
//!
//! Translates the handful of Substrate JSON-RPC methods the session needs into typed
//! results, on top of any [`BlockchainTransport`].

use async_trait::async_trait;
use serde_json::{json, Value};
use std::str::FromStr;
use subxt::utils::H256;
use tracing::instrument;

use crate::{
	models::{RuntimeVersion, SignedBlock},
	services::blockchain::transports::{BlockchainTransport, SubstrateTransport, TransportError},
	utils::{decode_hex, encode_hex},
};

/// Typed Substrate RPC surface over a raw JSON-RPC transport
#[derive(Clone, Debug)]
pub struct SubstrateTransportClient<T: BlockchainTransport> {
	transport: T,
}

impl<T: BlockchainTransport> SubstrateTransportClient<T> {
	pub fn new(transport: T) -> Self {
		Self { transport }
	}

	/// The underlying raw transport
	pub fn inner(&self) -> &T {
		&self.transport
	}

	/// Sends a request and extracts its `result` field
	async fn request(&self, method: &str, params: Value) -> Result<Value, TransportError> {
		let response = self
			.transport
			.send_raw_request(method, Some(params))
			.await?;
		extract_result(response)
	}
}

/// Pulls `result` out of a JSON-RPC response, turning `error` objects into typed errors
fn extract_result(mut response: Value) -> Result<Value, TransportError> {
	if let Some(error) = response.get("error") {
		if !error.is_null() {
			return Err(TransportError::Rpc {
				code: error.get("code").and_then(Value::as_i64).unwrap_or_default(),
				message: error
					.get("message")
					.and_then(Value::as_str)
					.unwrap_or("unknown error")
					.to_string(),
			});
		}
	}

	response
		.get_mut("result")
		.map(Value::take)
		.ok_or_else(|| TransportError::response_parse("Missing 'result' field"))
}

fn parse_hash(value: &Value) -> Result<H256, TransportError> {
	let hash_str = value
		.as_str()
		.ok_or_else(|| TransportError::response_parse("Block hash is not a string"))?;
	H256::from_str(hash_str)
		.map_err(|e| TransportError::response_parse(format!("Invalid block hash: {}", e)))
}

fn parse_hex_bytes(value: &Value, what: &str) -> Result<Vec<u8>, TransportError> {
	let hex_str = value
		.as_str()
		.ok_or_else(|| TransportError::response_parse(format!("{} is not a string", what)))?;
	decode_hex(hex_str)
		.map_err(|e| TransportError::response_parse(format!("Invalid {} hex: {}", what, e)))
}

#[async_trait]
impl<T: BlockchainTransport> SubstrateTransport for SubstrateTransportClient<T> {
	#[instrument(skip(self))]
	async fn get_runtime_version(&self) -> Result<RuntimeVersion, TransportError> {
		let result = self.request("state_getRuntimeVersion", json!([])).await?;
		serde_json::from_value(result)
			.map_err(|e| TransportError::response_parse(format!("Invalid runtime version: {}", e)))
	}

	#[instrument(skip(self))]
	async fn get_metadata(&self) -> Result<Vec<u8>, TransportError> {
		let result = self.request("state_getMetadata", json!([])).await?;
		parse_hex_bytes(&result, "metadata")
	}

	#[instrument(skip(self))]
	async fn get_block_hash(&self, height: u64) -> Result<Option<H256>, TransportError> {
		let result = self
			.request("chain_getBlockHash", json!([format!("0x{:x}", height)]))
			.await?;
		if result.is_null() {
			return Ok(None);
		}
		parse_hash(&result).map(Some)
	}

	#[instrument(skip(self))]
	async fn get_block_hash_latest(&self) -> Result<H256, TransportError> {
		let result = self.request("chain_getBlockHash", json!([])).await?;
		parse_hash(&result)
	}

	#[instrument(skip(self, hash), fields(hash = %encode_hex(hash)))]
	async fn get_block(&self, hash: H256) -> Result<Option<SignedBlock>, TransportError> {
		let result = self
			.request("chain_getBlock", json!([encode_hex(hash)]))
			.await?;
		if result.is_null() {
			return Ok(None);
		}
		serde_json::from_value(result)
			.map(Some)
			.map_err(|e| TransportError::response_parse(format!("Invalid block: {}", e)))
	}

	#[instrument(skip(self, key), fields(key = %encode_hex(key)))]
	async fn get_storage(&self, key: &[u8], at: H256) -> Result<Option<Vec<u8>>, TransportError> {
		let result = self
			.request(
				"state_getStorage",
				json!([encode_hex(key), encode_hex(at)]),
			)
			.await?;
		if result.is_null() {
			return Ok(None);
		}
		parse_hex_bytes(&result, "storage value").map(Some)
	}

	#[instrument(skip(self, params))]
	async fn call(&self, method: &str, params: Value) -> Result<Value, TransportError> {
		self.request(method, params).await
	}
}
