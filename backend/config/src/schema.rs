//! Configuration schema, typed for serde TOML deserialization.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RepricerConfig {
    pub logging: LoggingConfig,
    pub voice: VoiceConfig,
    pub export: ExportConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default tracing filter when RUST_LOG is not set.
    pub level: String,
    /// Optional directory for the rolling NDJSON log file.
    pub dir: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), dir: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceConfig {
    /// Wire the functioning console voice provider instead of the disabled
    /// stub.
    pub enabled: bool,
}

impl Default for VoiceConfig {
    fn default() -> Self {
        Self { enabled: false }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Download filename for the exported CSV.
    pub filename: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self { filename: "precios_modificados.csv".to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_section() {
        let config = RepricerConfig::default();
        assert_eq!(config.logging.level, "info");
        assert!(!config.voice.enabled);
        assert_eq!(config.export.filename, "precios_modificados.csv");
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: RepricerConfig = toml::from_str("[voice]\nenabled = true\n").unwrap();
        assert!(config.voice.enabled);
        assert_eq!(config.logging.level, "info");
    }
}
