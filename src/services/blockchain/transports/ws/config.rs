//! WebSocket configuration for node transports
//!
//! This module provides the timeouts used when opening a WebSocket connection and
//! when waiting for JSON-RPC responses.

use crate::models::Network;
use std::time::Duration;

/// WebSocket configuration for node transports
#[derive(Clone, Debug, PartialEq)]
pub struct WsConfig {
	/// Connection timeout for WebSocket connections
	/// How long to wait for the handshake to complete
	pub connection_timeout: Duration,
	/// Message timeout for WebSocket connections
	/// How long to wait for the response to a request
	pub message_timeout: Duration,
}

impl Default for WsConfig {
	fn default() -> Self {
		Self {
			connection_timeout: Duration::from_secs(10),
			message_timeout: Duration::from_secs(30),
		}
	}
}

impl WsConfig {
	/// Creates a new WebSocket configuration with default values
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a configuration with short timeouts
	///
	/// Mostly for testing purposes
	pub fn fast_fail() -> Self {
		Self {
			connection_timeout: Duration::from_secs(1),
			message_timeout: Duration::from_secs(1),
		}
	}

	/// Creates a new WebSocket configuration from a network
	///
	/// Timeouts missing from the network fall back to the defaults.
	///
	/// # Arguments
	/// * `network` - The network to create the configuration from
	pub fn from_network(network: &Network) -> Self {
		let mut config = Self::default();
		if let Some(ms) = network.connection_timeout_ms {
			config.connection_timeout = Duration::from_millis(ms);
		}
		if let Some(ms) = network.message_timeout_ms {
			config.message_timeout = Duration::from_millis(ms);
		}
		config
	}

	/// Sets the connection timeout for the WebSocket configuration
	///
	/// # Arguments
	/// * `connection_timeout` - The connection timeout to set
	pub fn with_connection_timeout(mut self, connection_timeout: Duration) -> Self {
		self.connection_timeout = connection_timeout;
		self
	}

	/// Sets the message timeout for the WebSocket configuration
	///
	/// # Arguments
	/// * `message_timeout` - The message timeout to set
	pub fn with_message_timeout(mut self, message_timeout: Duration) -> Self {
		self.message_timeout = message_timeout;
		self
	}
}
