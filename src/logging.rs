//! Diagnostic logging setup.
//!
//! Logs go to stderr and are kept apart from the report printed on stdout.
//! `RUST_LOG` overrides the level chosen from the verbosity count.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Maps a `-v` count to a default level.
pub fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Installs the global subscriber.
pub fn init(verbose: u8) -> anyhow::Result<()> {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbose).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
