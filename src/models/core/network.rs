use serde::{Deserialize, Serialize};

/// A Substrate chain endpoint and the settings a session uses for it
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Network {
	pub slug: String,
	pub name: String,
	/// WebSocket JSON-RPC endpoint (`ws://` or `wss://`)
	pub rpc_url: String,
	/// SS58 prefix override; auto-detected from chain metadata when absent
	#[serde(default)]
	pub address_prefix: Option<u16>,
	#[serde(default)]
	pub connection_timeout_ms: Option<u64>,
	#[serde(default)]
	pub message_timeout_ms: Option<u64>,
}
