//! Utility modules for common functionality.
//!
//! - logging: Logging setup
//! - parsing: Hex helpers for JSON-RPC payloads
//! - tests: Builders for test fixtures

pub mod logging;
pub mod parsing;
pub mod tests;

pub use parsing::*;
