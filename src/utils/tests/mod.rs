//! Test helper utilities
//!
//! This module contains test helper utilities for the application.
//!
//! - `builders`: Test helper utilities for creating test instances of models

pub mod builders {
	// Chain specific test helpers
	pub mod substrate {
		pub mod block;
		pub mod runtime;
	}

	// Chain agnostic test helpers
	pub mod network;
}

pub use builders::*;
