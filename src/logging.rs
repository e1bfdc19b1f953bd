//! Logging and tracing setup.
//!
//! Logs always go to stderr so that stdout carries only the report (or the
//! JSON lines in `--json` mode). `RUST_LOG` overrides the default level.

use std::sync::Once;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static INIT: Once = Once::new();

/// Level used when `RUST_LOG` is not set.
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level(verbose)))
}

/// Initialize the global tracing subscriber.
///
/// Subsequent calls are ignored.
pub fn init_tracing(verbose: bool) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(verbose)
            .with_thread_ids(verbose);

        let _ = tracing_subscriber::registry()
            .with(env_filter(verbose))
            .with(fmt_layer)
            .try_init();

        debug!("tracing initialized");
    });
}

/// Initialize tracing with JSON-formatted log lines on stderr.
pub fn init_tracing_json(verbose: bool) {
    INIT.call_once(|| {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(true);

        let _ = tracing_subscriber::registry()
            .with(env_filter(verbose))
            .with(fmt_layer)
            .try_init();

        debug!("tracing initialized (JSON mode)");
    });
}
