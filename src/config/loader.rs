use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::config::types::AppConfig;

/// Discover and load the board config.
///
/// Priority:
/// 1. explicit path (as handed over by the host)
/// 2. `$OPPORTUNITY_BOARD_CONFIG` environment variable
/// 3. `$XDG_CONFIG_HOME/opportunity-board/config.toml`
/// 4. `~/.config/opportunity-board/config.toml`
///
/// Falls back to `AppConfig::default()` when no file is found.
pub fn load_config(explicit_path: Option<&Path>) -> Result<AppConfig> {
    if let Some(path) = explicit_path {
        return load_from(path);
    }

    match find_global_config() {
        Some(path) => load_from(&path),
        None => {
            tracing::debug!("config: no file found, using defaults");
            Ok(AppConfig::default())
        }
    }
}

/// Parse a config from a TOML string.
pub fn parse_config(contents: &str) -> Result<AppConfig> {
    toml::from_str(contents).context("parsing TOML config")
}

fn load_from(path: &Path) -> Result<AppConfig> {
    let contents =
        std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    let config: AppConfig = toml::from_str(&contents)
        .with_context(|| format!("parsing TOML from {}", path.display()))?;
    tracing::debug!(
        "config: loaded {} (page_size={})",
        path.display(),
        config.page_size
    );
    Ok(config)
}

fn find_global_config() -> Option<PathBuf> {
    // $OPPORTUNITY_BOARD_CONFIG
    if let Ok(path) = std::env::var("OPPORTUNITY_BOARD_CONFIG") {
        let p = PathBuf::from(&path);
        if p.is_file() {
            return Some(p);
        }
    }

    // $XDG_CONFIG_HOME/opportunity-board/config.toml
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        let p = PathBuf::from(xdg).join("opportunity-board/config.toml");
        if p.is_file() {
            return Some(p);
        }
    }

    // ~/.config/opportunity-board/config.toml
    if let Some(home) = std::env::var("HOME").ok().map(PathBuf::from) {
        let p = home.join(".config/opportunity-board/config.toml");
        if p.is_file() {
            return Some(p);
        }
    }

    None
}
