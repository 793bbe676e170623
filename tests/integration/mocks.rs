//! Mock implementations and fixtures shared by the integration tests.

mod metadata;

pub use codec::*;
pub use metadata::*;
pub use transports::*;
pub use ws_server::*;
