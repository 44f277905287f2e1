use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Install a global `tracing` subscriber for the host.
///
/// With a path, logs go to that file without ANSI colors and default to
/// `debug`; otherwise they go to stderr and default to `info`. `RUST_LOG`
/// overrides the default in both cases. Fails if a subscriber is already set.
pub fn init(log_file: Option<&Path>) -> Result<()> {
    match log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("creating log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_writer(file)
                .with_ansi(false)
                .with_env_filter(env_filter("debug"))
                .try_init()
                .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}"))
        }
        None => tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(env_filter("info"))
            .try_init()
            .map_err(|e| anyhow::anyhow!("installing tracing subscriber: {e}")),
    }
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_env("RUST_LOG").unwrap_or_else(|_| EnvFilter::new(default))
}
