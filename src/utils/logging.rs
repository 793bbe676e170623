//! Logging utilities for the query client
//!
//! The `setup_logging` function installs a global `tracing_subscriber` that writes to
//! stderr, leaving stdout free for query results. The `setup_logging_with_writer`
//! function does the same with a custom writer.
//!
//! Filtering follows `RUST_LOG` when it is set and falls back to the given default
//! directive otherwise.
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Directive used when neither `RUST_LOG` nor the caller provide one.
pub const DEFAULT_LOG_DIRECTIVE: &str = "info";

/// Setup logging to stderr
///
/// # Arguments
/// * `default_directive` - Filter directive used when `RUST_LOG` is not set
pub fn setup_logging(
	default_directive: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	setup_logging_with_writer(std::io::stderr, default_directive)
}

/// Setup logging with a custom writer
pub fn setup_logging_with_writer<W>(
	writer: W,
	default_directive: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	let filter = EnvFilter::try_from_default_env().or_else(|_| {
		EnvFilter::try_new(default_directive.unwrap_or(DEFAULT_LOG_DIRECTIVE))
	})?;

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(writer)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(false)
						.compact(),
				),
		)
		.try_init()?;
	Ok(())
}
