use std::fs;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const LOG_DIR: &str = "logs";

/// Initialize logging: a daily-rolling JSON file plus human-readable console
/// output on stderr, so log lines never interleave with the rendered tables
/// on stdout. `RUST_LOG` overrides the default directive.
pub fn init_logging() {
    let _ = fs::create_dir_all(LOG_DIR);

    let file_appender = tracing_appender::rolling::daily(LOG_DIR, "blotter.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("blotter=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().json().with_writer(file_writer))
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();

    // The guard must outlive main so buffered lines reach the file.
    std::mem::forget(guard);
}
