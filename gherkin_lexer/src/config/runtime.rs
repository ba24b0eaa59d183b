// RUNTIME PREFERENCES (User Experience)

use crate::logging::codes::{self, Code};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileProcessorPreferences {
    /// Whether to reject files without a .feature extension
    pub require_feature_extension: bool,
}

impl Default for FileProcessorPreferences {
    fn default() -> Self {
        Self {
            require_feature_extension: env::var(env_vars::REQUIRE_FEATURE_EXTENSION)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalPreferences {
    /// Dialect active before any language directive
    pub default_dialect: String,

    /// Whether tokenization halts on the first failed language directive
    pub stop_at_first_error: bool,

    /// Whether docstring open/close transitions are logged at debug level
    pub log_docstring_transitions: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            default_dialect: env::var(env_vars::LEXICAL_DEFAULT_DIALECT)
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| {
                    crate::config::constants::compile_time::lexical::DEFAULT_DIALECT.to_string()
                }),
            stop_at_first_error: env::var(env_vars::LEXICAL_STOP_AT_FIRST_ERROR)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            log_docstring_transitions: env::var(env_vars::LEXICAL_LOG_DOCSTRING_TRANSITIONS)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging
    pub use_structured_logging: bool,

    /// Whether to enable console output
    pub enable_console_logging: bool,

    /// Minimum level that reaches the configured logger
    pub min_log_level: LogLevel,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var(env_vars::LOGGING_USE_STRUCTURED)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var(env_vars::LOGGING_ENABLE_CONSOLE)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var(env_vars::LOGGING_MIN_LEVEL)
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables and CLI flags)
pub fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

/// Configuration file errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
}

impl ConfigError {
    pub fn error_code(&self) -> Code {
        match self {
            ConfigError::Io { .. } => codes::system::CONFIGURATION_ERROR,
            ConfigError::Parse(_) => codes::system::CONFIGURATION_ERROR,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeConfig {
    pub file_processor: FileProcessorPreferences,
    pub lexical: LexicalPreferences,
    pub logging: LoggingPreferences,
}

impl RuntimeConfig {
    /// Parse a TOML document; missing sections and keys fall back to defaults
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}

/// Environment variable names for configuration
pub mod env_vars {
    // File Processor
    pub const REQUIRE_FEATURE_EXTENSION: &str = "GHERKIN_REQUIRE_FEATURE_EXTENSION";

    // Lexical
    pub const LEXICAL_DEFAULT_DIALECT: &str = "GHERKIN_DEFAULT_DIALECT";
    pub const LEXICAL_STOP_AT_FIRST_ERROR: &str = "GHERKIN_STOP_AT_FIRST_ERROR";
    pub const LEXICAL_LOG_DOCSTRING_TRANSITIONS: &str = "GHERKIN_LOG_DOCSTRING_TRANSITIONS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "GHERKIN_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "GHERKIN_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "GHERKIN_LOGGING_MIN_LEVEL";
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("warning"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("invalid"), None);
    }

    #[test]
    fn test_toml_overrides() {
        let config = RuntimeConfig::from_toml_str(
            r#"
            [lexical]
            default_dialect = "fr"
            stop_at_first_error = true

            [logging]
            min_log_level = "debug"
            "#,
        )
        .unwrap();

        assert_eq!(config.lexical.default_dialect, "fr");
        assert!(config.lexical.stop_at_first_error);
        assert_eq!(config.logging.min_log_level, LogLevel::Debug);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config = RuntimeConfig::from_toml_str("").unwrap();
        assert!(!config.lexical.default_dialect.is_empty());
    }

    #[test]
    fn test_invalid_toml() {
        let result = RuntimeConfig::from_toml_str("[lexical\ndefault_dialect = ");
        assert_matches!(result, Err(ConfigError::Parse(_)));
    }

    #[test]
    fn test_missing_config_file() {
        let result = RuntimeConfig::load("/definitely/not/here/gherkin.toml");
        let err = result.unwrap_err();
        assert_matches!(err, ConfigError::Io { .. });
        assert_eq!(err.error_code(), codes::system::CONFIGURATION_ERROR);
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gherkin.toml");
        std::fs::write(&path, "[file_processor]\nrequire_feature_extension = true\n").unwrap();

        let config = RuntimeConfig::load(&path).unwrap();
        assert!(config.file_processor.require_feature_extension);
    }
}
