use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialise tracing. `RUST_LOG` wins over the `--log-level` flag.
pub fn init(log_level: &str) {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level)))
        .init();
}
