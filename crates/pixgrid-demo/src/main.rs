//! Pixgrid Demo: console walkthrough of the core color, coordinate, and image types.
//!
//! Logs go to stderr (filter with `RUST_LOG`); the transcript goes to stdout.

mod config;
mod error;
mod transcript;

use tracing_subscriber::EnvFilter;

use config::DemoConfig;
use error::DemoError;

/// Default log filter when `RUST_LOG` is unset.
const DEFAULT_LOG_FILTER: &str = "warn";

fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<(), DemoError> {
    init_tracing();

    let config = DemoConfig::from_env()?;
    tracing::debug!(?config, "loaded configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    transcript::run(&mut out, &config)?;
    Ok(())
}
