//! Configuration management for the command-line front end
//!
//! Settings come from an optional `binaris-error-codes.toml` in the working
//! directory, overridden by `BINARIS_ERRORS_*` environment variables.

use config::{Config, Environment, File};
use serde::Deserialize;

/// Default config file name, without extension
pub const CONFIG_FILE: &str = "binaris-error-codes";

/// Environment variable prefix, e.g. `BINARIS_ERRORS_MODE=maybe`
pub const ENV_PREFIX: &str = "BINARIS_ERRORS";

/// Which lookup policy the front end applies to each code
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LookupMode {
    /// Unknown codes are echoed back unchanged
    #[default]
    Translate,
    /// Unknown codes produce no output
    Maybe,
}

/// Front end configuration
#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct TranslatorConfig {
    pub mode: LookupMode,

    /// Prefix each output line with the original code
    pub show_code: bool,

    /// Log a warning for codes missing from the table
    pub warn_unknown: bool,
}

impl Default for TranslatorConfig {
    fn default() -> Self {
        Self {
            mode: LookupMode::Translate,
            show_code: false,
            warn_unknown: true,
        }
    }
}

impl TranslatorConfig {
    /// Load configuration from the default file with environment overrides
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from `path` (missing files are allowed) with
    /// environment overrides
    pub fn load_from(path: &str) -> Result<Self, config::ConfigError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = TranslatorConfig::load_from("does-not-exist/binaris-error-codes").unwrap();
        assert_eq!(config.mode, LookupMode::Translate);
        assert!(!config.show_code);
        assert!(config.warn_unknown);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let dir = std::env::temp_dir().join(format!("binaris-error-codes-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        fs::write(&path, "mode = \"maybe\"\nshow_code = true\n").unwrap();

        let config = TranslatorConfig::load_from(path.to_str().unwrap()).unwrap();
        assert_eq!(config.mode, LookupMode::Maybe);
        assert!(config.show_code);
        assert!(config.warn_unknown);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_bad_mode_is_rejected() {
        let dir = std::env::temp_dir().join(format!("binaris-error-codes-bad-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("settings.toml");
        fs::write(&path, "mode = \"loud\"\n").unwrap();

        assert!(TranslatorConfig::load_from(path.to_str().unwrap()).is_err());

        fs::remove_dir_all(&dir).unwrap();
    }
}
