use std::error::Error as StdError;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "AIDBOX_LOG";

/// Installs the global subscriber. Logs go to stderr since stdout belongs to the host.
///
/// The filter is read from `AIDBOX_LOG`, then `RUST_LOG`, and defaults to `info`.
///
/// # Panics
///
/// Panics if a global subscriber is already installed.
pub fn init_logging() {
    if let Err(err) = try_init_logging() {
        panic!("failed to install the tracing subscriber: {err}");
    }
}

pub fn try_init_logging() -> Result<(), Box<dyn StdError + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .try_init()
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new("info"))
}
