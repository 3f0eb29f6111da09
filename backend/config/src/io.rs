//! Config file loading and environment overrides.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::schema::RepricerConfig;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Resolve the config file path.
/// Priority: `REPRICER_CONFIG` env > `<user config dir>/repricer/config.toml`.
pub fn config_file_path() -> PathBuf {
    if let Ok(path) = std::env::var("REPRICER_CONFIG") {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("repricer")
        .join(CONFIG_FILE_NAME)
}

/// Load the config from disk and apply environment overrides.
///
/// A missing file is not an error; defaults apply (first run).
pub fn load_config(path: &Path) -> Result<RepricerConfig> {
    let mut config = if path.exists() {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&raw)
            .with_context(|| format!("failed to parse config TOML at: {}", path.display()))?
    } else {
        debug!("[Config] {} does not exist; using defaults", path.display());
        RepricerConfig::default()
    };

    apply_env_overrides(&mut config);
    Ok(config)
}

/// `REPRICER_LOG` overrides the log level; `REPRICER_VOICE=1` enables the
/// console voice provider.
fn apply_env_overrides(config: &mut RepricerConfig) {
    if let Ok(level) = std::env::var("REPRICER_LOG") {
        if !level.is_empty() {
            config.logging.level = level;
        }
    }
    if let Ok(voice) = std::env::var("REPRICER_VOICE") {
        config.voice.enabled = voice == "1" || voice.eq_ignore_ascii_case("true");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let config = load_config(Path::new("/nonexistent/repricer/config.toml")).unwrap();
        assert_eq!(config.logging.level, "info");
    }
}
