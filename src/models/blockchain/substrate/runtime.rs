//! Runtime version data structures.

use serde::{Deserialize, Serialize};

/// Runtime version reported by a Substrate node
///
/// Only the fields the client relies on are kept; the `apis` list and any
/// chain-specific extensions in the RPC response are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RuntimeVersion {
	/// Identifies the runtime (e.g. "polkadot", "bifrost")
	pub spec_name: String,
	/// Name of the runtime implementation
	#[serde(default)]
	pub impl_name: String,
	/// Version of the on-chain logic; a change means metadata may have changed
	pub spec_version: u32,
	/// Version of the runtime implementation
	#[serde(default)]
	pub impl_version: u32,
	/// Version of the extrinsic format
	#[serde(default)]
	pub transaction_version: u32,
}

/// Last observed runtime identity of the node a session talks to
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RuntimeIdentity {
	pub chain_name: String,
	pub spec_version: u32,
	pub transaction_version: u32,
}

impl From<RuntimeVersion> for RuntimeIdentity {
	fn from(version: RuntimeVersion) -> Self {
		Self {
			chain_name: version.spec_name,
			spec_version: version.spec_version,
			transaction_version: version.transaction_version,
		}
	}
}
