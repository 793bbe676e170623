//! Chain client interfaces and implementations.
//!
//! Provides the session used to query Substrate-based chains. Includes:
//!
//! - The query session with its metadata cache
//! - Network transport implementations
//! - Metadata and address codecs
//! - Error handling for session operations

mod clients;
mod codec;
mod error;
mod transports;

pub use clients::SubstrateSession;
pub use codec::{
	decode_address, AddressError, MetadataDecoder, MetadataSchema, SchemaError,
	SubxtMetadataDecoder, SubxtMetadataSchema, DEFAULT_ADDRESS_PREFIX,
};
pub use error::{BlockId, SessionError};
pub use transports::{
	BlockchainTransport, SubstrateTransport, SubstrateTransportClient, TransportConnector,
	TransportError, WebSocketConnection, WsConfig, WsConnector, WsTransportClient,
};
