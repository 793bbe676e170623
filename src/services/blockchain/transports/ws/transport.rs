//! Websocket transport implementation for node interactions.
//!
//! This module provides a WebSocket client for talking JSON-RPC to a single node
//! endpoint. A connection that the node has closed is reported as
//! [`TransportError::ConnectionClosed`] so that callers can decide whether to reconnect.

use async_trait::async_trait;
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use serde_json::{json, Value};
use std::sync::{
	atomic::{AtomicU64, Ordering},
	Arc,
};
use tokio::{sync::Mutex, time::timeout};
use tokio_tungstenite::{connect_async, tungstenite::Message};

use crate::services::blockchain::transports::{
	ws::{config::WsConfig, connection::WebSocketConnection},
	BlockchainTransport, TransportError,
};

/// WebSocket transport client for a single node endpoint
///
/// The client is thread-safe and can be shared across multiple tasks. Requests are
/// serialized on the underlying stream and matched to responses by id.
#[derive(Clone, Debug)]
pub struct WsTransportClient {
	/// WebSocket connection state and stream
	pub connection: Arc<Mutex<WebSocketConnection>>,
	/// Endpoint this client is bound to
	url: String,
	/// Configuration settings for WebSocket connections
	config: WsConfig,
	/// Counter for generating unique request IDs
	request_id_counter: Arc<AtomicU64>,
}

impl WsTransportClient {
	/// Creates a new WebSocket transport client and opens the connection
	///
	/// # Arguments
	/// * `url` - WebSocket endpoint of the node
	/// * `config` - Timeouts to use, defaults when `None`
	///
	/// # Returns
	/// * `Result<Self, TransportError>` - New client instance or connection error
	pub async fn new(url: &str, config: Option<WsConfig>) -> Result<Self, TransportError> {
		let client = Self {
			connection: Arc::new(Mutex::new(WebSocketConnection::default())),
			url: url.to_string(),
			config: config.unwrap_or_default(),
			request_id_counter: Arc::new(AtomicU64::new(1)),
		};

		client.try_connect().await?;

		Ok(client)
	}

	/// Opens a fresh connection to the endpoint, replacing any previous stream
	///
	/// # Returns
	/// * `Result<(), TransportError>` - Success or detailed connection error
	pub async fn try_connect(&self) -> Result<(), TransportError> {
		let mut connection = self.connection.lock().await;

		match timeout(self.config.connection_timeout, connect_async(self.url.as_str())).await {
			Ok(Ok((ws_stream, _))) => {
				*connection = WebSocketConnection::open(ws_stream);
				tracing::debug!(url = %self.url, "WebSocket connection established");
				Ok(())
			}
			Ok(Err(e)) => {
				connection.mark_closed();
				Err(TransportError::connection(format!(
					"Failed to connect to {}: {}",
					self.url, e
				)))
			}
			Err(_) => {
				connection.mark_closed();
				Err(TransportError::connection(format!(
					"Connection to {} timed out after {:?}",
					self.url, self.config.connection_timeout
				)))
			}
		}
	}

	/// Sends a close frame and drops the stream
	pub async fn close(&self) -> Result<(), TransportError> {
		let mut connection = self.connection.lock().await;
		let result = match connection.stream.as_mut() {
			Some(stream) => stream
				.close(None)
				.await
				.map_err(|e| TransportError::from_ws_error("Failed to close connection", e)),
			None => Ok(()),
		};
		connection.mark_closed();
		result
	}

	/// Sends a JSON-RPC request via WebSocket and waits for the matching response
	///
	/// # Arguments
	/// * `method` - The RPC method to call
	/// * `params` - Optional parameters for the method call
	///
	/// # Returns
	/// * `Result<Value, TransportError>` - Full JSON-RPC response object or error
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		let mut connection = self.connection.lock().await;
		if !connection.is_connected() {
			return Err(TransportError::connection_closed(format!(
				"Not connected to {}",
				self.url
			)));
		}
		let idle_for = connection.idle_for();

		let request_id = self.request_id_counter.fetch_add(1, Ordering::SeqCst);
		let request_body = json!({
			"jsonrpc": "2.0",
			"id": request_id,
			"method": method,
			"params": params.map(|p| p.into())
		});

		let result = {
			let Some(stream) = connection.stream.as_mut() else {
				return Err(TransportError::connection_closed("Stream missing"));
			};

			match stream
				.send(Message::Text(request_body.to_string().into()))
				.await
			{
				Err(e) => Err(TransportError::from_ws_error("Failed to send request", e)),
				Ok(()) => loop {
					let message = match timeout(self.config.message_timeout, stream.next()).await {
						Err(_) => break Err(TransportError::Timeout(self.config.message_timeout)),
						Ok(None) => {
							break Err(TransportError::connection_closed("Stream ended"));
						}
						Ok(Some(Err(e))) => {
							break Err(TransportError::from_ws_error("Failed to read response", e));
						}
						Ok(Some(Ok(message))) => message,
					};

					match message {
						Message::Text(text) => {
							let response: Value = match serde_json::from_str(text.as_str()) {
								Ok(response) => response,
								Err(e) => break Err(TransportError::response_parse(e.to_string())),
							};

							match response.get("id").and_then(|v| v.as_u64()) {
								Some(response_id) if response_id != request_id => {
									tracing::trace!(
										response_id,
										request_id,
										"Skipping response for another request"
									);
									continue;
								}
								_ => break Ok(response),
							}
						}
						Message::Ping(data) => {
							if let Err(e) = stream.send(Message::Pong(data)).await {
								break Err(TransportError::from_ws_error("Failed to send pong", e));
							}
						}
						Message::Pong(_) => continue,
						Message::Close(frame) => {
							break Err(TransportError::connection_closed(match frame {
								Some(frame) => format!("Close frame received: {}", frame),
								None => "Close frame received".to_string(),
							}));
						}
						other => {
							break Err(TransportError::network(format!(
								"Unexpected message type: {:?}",
								other
							)));
						}
					}
				},
			}
		};

		match &result {
			Ok(_) => connection.update_activity(),
			Err(TransportError::Timeout(_) | TransportError::ResponseParse(_)) => {}
			Err(e) => {
				tracing::warn!(
					url = %self.url,
					method,
					error = %e,
					idle_for = ?idle_for,
					"Dropping WebSocket connection"
				);
				connection.mark_closed();
			}
		}

		result
	}
}

#[async_trait]
impl BlockchainTransport for WsTransportClient {
	/// Retrieves the endpoint URL this client is bound to
	async fn get_current_url(&self) -> String {
		self.url.clone()
	}

	/// Sends a JSON-RPC request to the node via WebSocket
	///
	/// # Arguments
	/// * `method` - The JSON-RPC method name to call
	/// * `params` - Optional parameters for the method call
	///
	/// # Returns
	/// * `Result<Value, TransportError>` - JSON response or error
	async fn send_raw_request<P>(
		&self,
		method: &str,
		params: Option<P>,
	) -> Result<Value, TransportError>
	where
		P: Into<Value> + Send + Clone + Serialize,
	{
		WsTransportClient::send_raw_request(self, method, params).await
	}
}
