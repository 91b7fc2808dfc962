//! Diagnostic output for the `postfind` binary.
//!
//! Library code only emits `tracing` events; installing a subscriber is left
//! to the binary so embedders keep control of their own output.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding an `EnvFilter` directive, e.g. `postfind=debug`.
pub const LOG_ENV: &str = "POSTFIND_LOG";

/// Install the stderr subscriber.
///
/// `POSTFIND_LOG` takes precedence; otherwise `verbose` selects `debug` and the
/// default is `warn`. Calling this more than once is harmless.
pub fn initialize(verbose: bool) {
	let fallback = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(fallback));

	let _ = tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(std::io::stderr)
				.with_target(false),
		)
		.try_init();
}
