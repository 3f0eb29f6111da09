//! Runtime configuration for Repricer: a small TOML schema with defaults,
//! loaded from the user config dir (or an explicit path) plus environment
//! overrides.

pub mod io;
pub mod schema;

pub use io::{config_file_path, load_config};
pub use schema::{ExportConfig, LoggingConfig, RepricerConfig, VoiceConfig};
