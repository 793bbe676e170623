//! WebSocket connection state management
//!
//! Tracks the stream, whether it is still usable and when it last answered.

use std::time::{Duration, Instant};
use tokio::net::TcpStream;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

/// Represents the state of a WebSocket connection
///
/// # Fields
/// * `stream` - The WebSocket stream, if connected
/// * `is_healthy` - Whether the connection can still carry requests
/// * `last_activity` - When the connection was opened or last answered a request
#[derive(Debug)]
pub struct WebSocketConnection {
	pub stream: Option<WebSocketStream<MaybeTlsStream<TcpStream>>>,
	pub is_healthy: bool,
	last_activity: Instant,
}

impl Default for WebSocketConnection {
	/// Creates a new WebSocket connection in a disconnected state
	fn default() -> Self {
		Self {
			stream: None,
			is_healthy: false,
			last_activity: Instant::now(),
		}
	}
}

impl WebSocketConnection {
	/// Creates a healthy connection around an established stream
	pub fn open(stream: WebSocketStream<MaybeTlsStream<TcpStream>>) -> Self {
		Self {
			stream: Some(stream),
			is_healthy: true,
			last_activity: Instant::now(),
		}
	}

	/// Checks if the connection is both established and healthy
	pub fn is_connected(&self) -> bool {
		self.stream.is_some() && self.is_healthy
	}

	/// Drops the stream and marks the connection as unusable
	pub fn mark_closed(&mut self) {
		self.is_healthy = false;
		self.stream = None;
	}

	/// Updates the last activity timestamp to the current time
	pub fn update_activity(&mut self) {
		self.last_activity = Instant::now();
	}

	/// Time the connection was opened or last answered a request
	pub fn last_activity(&self) -> Instant {
		self.last_activity
	}

	/// How long the connection has gone without answering
	pub fn idle_for(&self) -> Duration {
		self.last_activity.elapsed()
	}
}
