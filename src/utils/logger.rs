use tracing_subscriber::EnvFilter;

/// Initializes the global tracing subscriber for binaries and tests
///
/// Filtering follows `RUST_LOG` (default `info`). Calling this more than
/// once is harmless; later calls are ignored.
pub fn setup_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}
