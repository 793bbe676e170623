//! Substrate query session.
//!
//! A session owns one logical connection to a node and caches the runtime metadata
//! keyed by the runtime spec version. Every operation that reaches the node
//! re-validates the cache first. A closed connection is reopened once, during the
//! runtime version check, and never again within the same operation.

use serde_json::{json, Value};
use std::sync::Arc;
use subxt::utils::H256;
use tokio::sync::Mutex;
use tracing::instrument;

use crate::{
	models::{AccountInfo, BlockSummary, Network, RuntimeIdentity},
	services::blockchain::{
		codec::{
			decode_address, MetadataDecoder, MetadataSchema, SubxtMetadataDecoder,
			DEFAULT_ADDRESS_PREFIX,
		},
		error::{BlockId, SessionError},
		transports::{SubstrateTransport, TransportConnector, WsConfig, WsConnector},
	},
	utils::{encode_hex, normalize_hex_prefix},
};

/// Mutable state of a session, guarded by a single lock
struct SessionState<T> {
	transport: T,
	metadata: Option<Arc<dyn MetadataSchema>>,
	runtime: Option<RuntimeIdentity>,
	prefix_override: Option<u16>,
	genesis_hash: Option<H256>,
}

impl<T> SessionState<T> {
	/// Override, then the runtime's declared prefix, then the generic default
	fn address_prefix(&self) -> u16 {
		self.prefix_override
			.or_else(|| self.metadata.as_ref().and_then(|m| m.address_prefix()))
			.unwrap_or(DEFAULT_ADDRESS_PREFIX)
	}
}

/// Query session against a single Substrate node
///
/// Operations hold the session lock for their whole duration, so a session can be
/// shared between tasks behind an `Arc` without racing on the metadata cache.
pub struct SubstrateSession<C: TransportConnector, D: MetadataDecoder = SubxtMetadataDecoder> {
	endpoint: String,
	connector: C,
	decoder: D,
	state: Mutex<SessionState<C::Transport>>,
}

impl SubstrateSession<WsConnector> {
	/// Opens a session over WebSocket
	///
	/// # Arguments
	/// * `endpoint` - WebSocket URL of the node
	/// * `config` - Connection and message timeouts, defaults when `None`
	///
	/// # Returns
	/// * `Result<Self, SessionError>` - Session holding metadata for the current runtime
	pub async fn new(endpoint: &str, config: Option<WsConfig>) -> Result<Self, SessionError> {
		Self::connect_with(
			endpoint,
			WsConnector::new(config.unwrap_or_default()),
			SubxtMetadataDecoder,
		)
		.await
	}

	/// Opens a session for a configured network
	///
	/// The network's timeouts are used for the connection and its address prefix,
	/// when set, overrides the one declared by the runtime.
	pub async fn from_network(network: &Network) -> Result<Self, SessionError> {
		let session = Self::connect_with(
			&network.rpc_url,
			WsConnector::new(WsConfig::from_network(network)),
			SubxtMetadataDecoder,
		)
		.await?;

		if let Some(prefix) = network.address_prefix {
			session.set_address_prefix(prefix).await;
		}

		Ok(session)
	}
}

impl<C: TransportConnector, D: MetadataDecoder> SubstrateSession<C, D> {
	/// Opens a session with explicit collaborators
	///
	/// Connects through `connector` and loads the metadata of the current runtime
	/// before returning.
	#[instrument(skip_all, fields(endpoint = %endpoint))]
	pub async fn connect_with(endpoint: &str, connector: C, decoder: D) -> Result<Self, SessionError> {
		let transport = connector
			.connect(endpoint)
			.await
			.map_err(|e| SessionError::connection_error(endpoint, e))?;

		let session = Self {
			endpoint: endpoint.to_string(),
			connector,
			decoder,
			state: Mutex::new(SessionState {
				transport,
				metadata: None,
				runtime: None,
				prefix_override: None,
				genesis_hash: None,
			}),
		};

		session.ensure_fresh().await?;
		tracing::info!(endpoint, "Session established");

		Ok(session)
	}

	/// Makes sure the cached metadata matches the node's current runtime
	///
	/// Only the runtime version is queried when the spec version is unchanged.
	#[instrument(skip(self), fields(endpoint = %self.endpoint))]
	pub async fn ensure_fresh(&self) -> Result<(), SessionError> {
		let mut state = self.state.lock().await;
		self.refresh(&mut state).await.map(|_| ())
	}

	/// Refreshes the metadata cache and returns the schema for the current runtime
	async fn refresh(
		&self,
		state: &mut SessionState<C::Transport>,
	) -> Result<Arc<dyn MetadataSchema>, SessionError> {
		let version = match state.transport.get_runtime_version().await {
			Ok(version) => version,
			Err(e) if e.is_connection_closed() => {
				tracing::warn!(endpoint = %self.endpoint, error = %e, "Connection closed, reconnecting");
				state.transport = self
					.connector
					.connect(&self.endpoint)
					.await
					.map_err(|e| SessionError::connection_error(&self.endpoint, e))?;
				state
					.transport
					.get_runtime_version()
					.await
					.map_err(SessionError::runtime_version_unavailable)?
			}
			Err(e) => return Err(SessionError::runtime_version_unavailable(e)),
		};

		let cached_spec_version = state.runtime.as_ref().map(|r| r.spec_version);
		if cached_spec_version == Some(version.spec_version) {
			if let Some(metadata) = state.metadata.clone() {
				state.runtime = Some(RuntimeIdentity::from(version));
				return Ok(metadata);
			}
		}

		tracing::info!(
			chain = %version.spec_name,
			spec_version = version.spec_version,
			previous = ?cached_spec_version,
			"Runtime version changed, fetching metadata"
		);

		let bytes = state
			.transport
			.get_metadata()
			.await
			.map_err(|e| SessionError::metadata_fetch_failed(version.spec_version, e))?;
		let schema = self
			.decoder
			.decode(&bytes)
			.map_err(|e| SessionError::metadata_fetch_failed(version.spec_version, e))?;

		state.metadata = Some(schema.clone());
		state.runtime = Some(RuntimeIdentity::from(version));

		Ok(schema)
	}

	/// Overrides the SS58 prefix used to decode addresses
	pub async fn set_address_prefix(&self, prefix: u16) {
		self.state.lock().await.prefix_override = Some(prefix);
	}

	/// Hash of the genesis block, queried once and cached
	///
	/// The runtime check runs before the first query so that a dropped connection is
	/// reopened. A cached hash is returned without touching the node.
	#[instrument(skip(self), fields(endpoint = %self.endpoint))]
	pub async fn get_genesis_hash(&self) -> Result<String, SessionError> {
		let mut state = self.state.lock().await;
		if let Some(hash) = state.genesis_hash {
			return Ok(encode_hex(hash));
		}

		self.refresh(&mut state).await?;

		let hash = state
			.transport
			.get_block_hash(0)
			.await
			.map_err(SessionError::block_query_failed)?
			.ok_or_else(|| SessionError::block_not_found(BlockId::Height(0)))?;

		state.genesis_hash = Some(hash);
		Ok(encode_hex(hash))
	}

	/// Block at `height` on the node's best chain
	#[instrument(skip(self), fields(endpoint = %self.endpoint))]
	pub async fn get_block_by_height(&self, height: u64) -> Result<BlockSummary, SessionError> {
		let mut state = self.state.lock().await;
		self.refresh(&mut state).await?;

		let hash = state
			.transport
			.get_block_hash(height)
			.await
			.map_err(SessionError::block_query_failed)?
			.ok_or_else(|| SessionError::block_not_found(BlockId::Height(height)))?;

		fetch_block(&state.transport, hash).await
	}

	/// Block stored under `hash`
	#[instrument(skip(self, hash), fields(endpoint = %self.endpoint, hash = %encode_hex(hash)))]
	pub async fn get_block_by_hash(&self, hash: H256) -> Result<BlockSummary, SessionError> {
		let mut state = self.state.lock().await;
		self.refresh(&mut state).await?;
		fetch_block(&state.transport, hash).await
	}

	/// Account nonce and balances at the best block
	///
	/// The address is checked against the session's prefix before anything is sent
	/// to the node. Accounts without a storage entry report all-zero info.
	#[instrument(skip(self), fields(endpoint = %self.endpoint))]
	pub async fn get_account_info(&self, address: &str) -> Result<AccountInfo, SessionError> {
		let mut state = self.state.lock().await;

		let public_key = decode_address(address, state.address_prefix())
			.map_err(|e| SessionError::invalid_address(address, e))?;

		let schema = self.refresh(&mut state).await?;

		let key = schema
			.storage_key("System", "Account", &public_key)
			.map_err(|e| SessionError::storage_key_derivation_failed("System", "Account", e))?;

		let best = state
			.transport
			.get_block_hash_latest()
			.await
			.map_err(SessionError::account_query_failed)?;

		let raw = state
			.transport
			.get_storage(&key, best)
			.await
			.map_err(SessionError::account_query_failed)?;

		match raw {
			Some(bytes) => schema
				.decode_account_info(&bytes)
				.map_err(SessionError::account_decode_failed),
			None => {
				tracing::debug!(address, "No storage entry for account");
				Ok(AccountInfo::default())
			}
		}
	}

	/// Partial fee estimate for an encoded extrinsic, as reported by the node
	///
	/// # Arguments
	/// * `extrinsic_hex` - SCALE-encoded extrinsic, with or without `0x`
	/// * `parent_hash_hex` - Hash of the block to estimate against
	///
	/// # Returns
	/// * `Result<String, SessionError>` - The `partialFee` string, unmodified
	///
	/// The runtime check runs first, which reopens a dropped connection.
	#[instrument(skip(self, extrinsic_hex), fields(endpoint = %self.endpoint))]
	pub async fn get_partial_fee(
		&self,
		extrinsic_hex: &str,
		parent_hash_hex: &str,
	) -> Result<String, SessionError> {
		let mut state = self.state.lock().await;
		self.refresh(&mut state).await?;
		let extrinsic = normalize_hex_prefix(extrinsic_hex);

		let result = state
			.transport
			.call("payment_queryInfo", json!([extrinsic, parent_hash_hex]))
			.await
			.map_err(SessionError::fee_query_failed)?;

		partial_fee(&result)
	}

	/// Endpoint this session connects to
	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}

	/// SS58 prefix currently used for addresses
	pub async fn address_prefix(&self) -> u16 {
		self.state.lock().await.address_prefix()
	}

	pub async fn runtime_identity(&self) -> Option<RuntimeIdentity> {
		self.state.lock().await.runtime.clone()
	}

	pub async fn chain_name(&self) -> Option<String> {
		self.runtime_identity().await.map(|r| r.chain_name)
	}

	pub async fn spec_version(&self) -> Option<u32> {
		self.runtime_identity().await.map(|r| r.spec_version)
	}

	pub async fn transaction_version(&self) -> Option<u32> {
		self.runtime_identity().await.map(|r| r.transaction_version)
	}

	/// Metadata schema for the last observed runtime
	pub async fn metadata(&self) -> Option<Arc<dyn MetadataSchema>> {
		self.state.lock().await.metadata.clone()
	}
}

/// Fetches a block whose hash is already known, without a runtime check
async fn fetch_block<T: SubstrateTransport>(
	transport: &T,
	hash: H256,
) -> Result<BlockSummary, SessionError> {
	let block = transport
		.get_block(hash)
		.await
		.map_err(SessionError::block_query_failed)?
		.ok_or_else(|| SessionError::block_not_found(BlockId::Hash(hash)))?;

	Ok(BlockSummary::new(hash, block))
}

/// Extracts `partialFee` from a `payment_queryInfo` result
fn partial_fee(result: &Value) -> Result<String, SessionError> {
	match result.get("partialFee") {
		None | Some(Value::Null) => Err(SessionError::fee_field_missing()),
		Some(Value::String(fee)) if !fee.is_empty() && fee.chars().all(|c| c.is_ascii_digit()) => {
			Ok(fee.clone())
		}
		Some(other) => Err(SessionError::fee_field_type_mismatch(other)),
	}
}
