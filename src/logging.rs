//! Logging setup for the command-line shell.
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to binaries. `RUST_LOG` takes precedence over the level passed in:
//!
//! ```bash
//! RUST_LOG=keypad=debug keypad 3 + 4 =
//! ```

use std::sync::Once;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: Once = Once::new();

/// Default filter when neither `RUST_LOG` nor a level is given.
pub const DEFAULT_LEVEL: &str = "warn";

/// Initialize logging to stderr with `default_level` as the fallback filter.
///
/// Safe to call multiple times (only the first call takes effect).
pub fn init(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(default_level))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_filter(filter);

        tracing_subscriber::registry().with(fmt_layer).init();
    });
}
