//! Logging setup.
//!
//! Progress and per-repository warnings go through `tracing` to stderr.
//! `RUST_LOG` overrides the default filter, e.g. `RUST_LOG=ghfetch=trace`.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

pub fn init_logging(verbose: bool) {
    let default_filter = if verbose {
        "ghfetch=debug,reqwest=info"
    } else {
        "ghfetch=info,reqwest=warn"
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    let fmt_layer = fmt::layer().with_target(false).with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .init();
}
