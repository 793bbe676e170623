//! Transport error types.
//!
//! Errors are typed so that callers can react to a closed connection without
//! inspecting error messages.

use std::time::Duration;
use thiserror::Error;
use tokio_tungstenite::tungstenite::{error::ProtocolError, Error as WsError};

/// Errors raised while talking to a node
#[derive(Debug, Error)]
pub enum TransportError {
	/// The connection was closed by either side and can no longer carry requests
	#[error("Connection closed: {0}")]
	ConnectionClosed(String),

	/// A connection could not be established
	#[error("Connection failed: {0}")]
	Connection(String),

	/// Any other I/O or protocol failure on an open connection
	#[error("Network error: {0}")]
	Network(String),

	/// No response arrived in time
	#[error("Request timed out after {0:?}")]
	Timeout(Duration),

	/// The node answered with a JSON-RPC error object
	#[error("RPC error {code}: {message}")]
	Rpc { code: i64, message: String },

	/// The node answered with something that could not be interpreted
	#[error("Failed to parse response: {0}")]
	ResponseParse(String),
}

impl TransportError {
	pub fn connection_closed(msg: impl Into<String>) -> Self {
		Self::ConnectionClosed(msg.into())
	}

	pub fn connection(msg: impl Into<String>) -> Self {
		Self::Connection(msg.into())
	}

	pub fn network(msg: impl Into<String>) -> Self {
		Self::Network(msg.into())
	}

	pub fn response_parse(msg: impl Into<String>) -> Self {
		Self::ResponseParse(msg.into())
	}

	/// Whether the failure means the underlying connection is gone
	pub fn is_connection_closed(&self) -> bool {
		matches!(self, Self::ConnectionClosed(_))
	}

	/// Classifies a WebSocket error raised while using an established connection
	pub fn from_ws_error(context: &str, error: WsError) -> Self {
		let closed = match &error {
			WsError::ConnectionClosed | WsError::AlreadyClosed => true,
			WsError::Protocol(
				ProtocolError::ResetWithoutClosingHandshake | ProtocolError::SendAfterClosing,
			) => true,
			WsError::Io(io_error) => matches!(
				io_error.kind(),
				std::io::ErrorKind::BrokenPipe
					| std::io::ErrorKind::ConnectionReset
					| std::io::ErrorKind::ConnectionAborted
					| std::io::ErrorKind::UnexpectedEof
					| std::io::ErrorKind::NotConnected
			),
			_ => false,
		};

		if closed {
			Self::connection_closed(format!("{}: {}", context, error))
		} else {
			Self::network(format!("{}: {}", context, error))
		}
	}
}
