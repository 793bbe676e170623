//! Connector opening Substrate transports over WebSocket.

use async_trait::async_trait;

use crate::services::blockchain::transports::{
	SubstrateTransportClient, TransportConnector, TransportError, WsConfig, WsTransportClient,
};

/// Opens WebSocket transports with a fixed configuration
#[derive(Clone, Debug, Default)]
pub struct WsConnector {
	config: WsConfig,
}

impl WsConnector {
	pub fn new(config: WsConfig) -> Self {
		Self { config }
	}

	pub fn config(&self) -> &WsConfig {
		&self.config
	}
}

#[async_trait]
impl TransportConnector for WsConnector {
	type Transport = SubstrateTransportClient<WsTransportClient>;

	async fn connect(&self, endpoint: &str) -> Result<Self::Transport, TransportError> {
		tracing::debug!(endpoint, "Opening WebSocket transport");
		let ws_client = WsTransportClient::new(endpoint, Some(self.config.clone())).await?;
		Ok(SubstrateTransportClient::new(ws_client))
	}
}
