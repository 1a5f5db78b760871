//! Tracing setup
//!
//! Events go to stderr so the rendered page and command output on stdout
//! stay clean. `RUST_LOG` overrides the level chosen from `--verbose`.

use std::sync::Once;

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global subscriber; later calls are ignored
pub fn init(verbose: bool) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let default_level = if verbose { "info" } else { "warn" };
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_level));

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_level(true)
            .compact()
            .with_writer(std::io::stderr);

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .try_init();
    });
}
