//! Command-line front end for `nsmap_resolve`.
//!
//! ```text
//! nsmap resolve --map='App\Models=src/models' 'App\Models\User'
//! nsmap candidates --delimiter=: --map=App=src App:Models:User
//! ```

pub mod args;
pub mod commands;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=nsmap_resolve=debug`
/// or `RUST_LOG=nsmap_resolve=trace` to see every probed path.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
