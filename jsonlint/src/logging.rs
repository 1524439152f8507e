use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log to stderr, filtered by `JSONLINT_LOG` (e.g. `JSONLINT_LOG=jsonlint_core=trace`).
/// Defaults to `warn` so regular runs only print diagnostics.
pub fn setup_logging() {
    let filter =
        EnvFilter::try_from_env("JSONLINT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .with(filter)
        .init();
}
