use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

/// Environment variable holding `tracing` filter directives.
pub const LOG_ENV: &str = "HELP_LOG";

/// Diagnostics go to stderr so they never mix with the listing. Silent unless
/// `HELP_LOG` is set, e.g. `HELP_LOG=debug help docker`.
pub fn init_tracing() -> Result<()> {
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) => EnvFilter::try_new(directives)?,
        Err(_) => EnvFilter::new("off"),
    };

    tracing_subscriber::fmt()
        .with_ansi(false)
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow!("failed to install subscriber: {err}"))
}
