//! Chain client implementations.
//!
//! Contains the Substrate query session, which coordinates the transport and the
//! metadata cache.

mod substrate {
	pub mod session;
}

pub use substrate::session::SubstrateSession;
