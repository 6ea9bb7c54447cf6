use tracing_subscriber::{EnvFilter, fmt};

/// Initialise tracing output on stderr, filtered by `RUST_LOG` (default:
/// warnings only, so JSON output on stdout stays clean).
pub fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
