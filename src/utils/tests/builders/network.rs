//! Test helper utilities for Network configuration
//!
//! - `NetworkBuilder`: Builder for creating test Network instances

use crate::models::Network;

/// Builder for creating test Network instances
pub struct NetworkBuilder {
	slug: String,
	name: String,
	rpc_url: String,
	address_prefix: Option<u16>,
	connection_timeout_ms: Option<u64>,
	message_timeout_ms: Option<u64>,
}

impl Default for NetworkBuilder {
	fn default() -> Self {
		Self {
			slug: "local".to_string(),
			name: "Local Node".to_string(),
			rpc_url: "ws://127.0.0.1:9944".to_string(),
			address_prefix: None,
			connection_timeout_ms: None,
			message_timeout_ms: None,
		}
	}
}

impl NetworkBuilder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn slug(mut self, slug: &str) -> Self {
		self.slug = slug.to_string();
		self
	}

	pub fn name(mut self, name: &str) -> Self {
		self.name = name.to_string();
		self
	}

	pub fn rpc_url(mut self, rpc_url: &str) -> Self {
		self.rpc_url = rpc_url.to_string();
		self
	}

	pub fn address_prefix(mut self, prefix: u16) -> Self {
		self.address_prefix = Some(prefix);
		self
	}

	pub fn connection_timeout_ms(mut self, timeout_ms: u64) -> Self {
		self.connection_timeout_ms = Some(timeout_ms);
		self
	}

	pub fn message_timeout_ms(mut self, timeout_ms: u64) -> Self {
		self.message_timeout_ms = Some(timeout_ms);
		self
	}

	pub fn build(self) -> Network {
		Network {
			slug: self.slug,
			name: self.name,
			rpc_url: self.rpc_url,
			address_prefix: self.address_prefix,
			connection_timeout_ms: self.connection_timeout_ms,
			message_timeout_ms: self.message_timeout_ms,
		}
	}
}
