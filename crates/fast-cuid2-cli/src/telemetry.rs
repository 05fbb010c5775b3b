//! Logging setup for the `cuid2` binary.
//!
//! Logs go to stderr so stdout carries nothing but identifiers and validation
//! results. The level defaults to `warn` and is controlled with `RUST_LOG`,
//! e.g. `RUST_LOG=debug cuid2 generate -n 5`.
//!
//! Building with the `tracing` feature also instruments the library's
//! generation path with `trace`-level spans.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_thread_ids(true)
                .with_target(false)
                .with_timer(tracing_subscriber::fmt::time::ChronoLocal::rfc_3339()),
        )
        .init();
}
