//! Runtime configuration resolved from environment variables.
//!
//! # Responsibility
//! - Resolve logging settings for binaries embedding the core.
//!
//! # Invariants
//! - Unset variables fall back to defaults; set-but-invalid values are
//!   errors, never silently ignored.
//! - Blank values count as unset.

use crate::logging::{default_log_level, LogLevel, LoggingError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

/// Log verbosity override.
pub const ENV_LOG_LEVEL: &str = "FOLIO_LOG_LEVEL";
/// Absolute directory for rolling log files. File logging is off when unset.
pub const ENV_LOG_DIR: &str = "FOLIO_LOG_DIR";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidValue { key: &'static str, reason: String },
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidValue { key, reason } => write!(f, "invalid `{key}`: {reason}"),
        }
    }
}

impl Error for ConfigError {}

/// Resolved logging settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            log_dir: None,
        }
    }
}

impl LogConfig {
    /// Reads settings from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`, which maps a variable name to its value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = non_blank(lookup(ENV_LOG_LEVEL)) {
            config.level = LogLevel::parse(&value).map_err(|err| invalid(ENV_LOG_LEVEL, err))?;
        }

        if let Some(value) = non_blank(lookup(ENV_LOG_DIR)) {
            let dir = PathBuf::from(value);
            if !dir.is_absolute() {
                return Err(invalid(ENV_LOG_DIR, LoggingError::RelativeLogDir(dir)));
            }
            config.log_dir = Some(dir);
        }

        Ok(config)
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|raw| raw.trim().to_string())
        .filter(|trimmed| !trimmed.is_empty())
}

fn invalid(key: &'static str, err: LoggingError) -> ConfigError {
    ConfigError::InvalidValue {
        key,
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::{ConfigError, LogConfig, ENV_LOG_DIR, ENV_LOG_LEVEL};
    use crate::logging::{default_log_level, LogLevel};
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = LogConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.level, default_log_level());
        assert_eq!(config.log_dir, None);
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config =
            LogConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "  "), (ENV_LOG_DIR, "")]))
                .unwrap();
        assert_eq!(config, LogConfig::default());
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = LogConfig::from_lookup(lookup_from(&[
            (ENV_LOG_LEVEL, "WARN"),
            (ENV_LOG_DIR, "/var/log/folio"),
        ]))
        .unwrap();
        assert_eq!(config.level, LogLevel::Warn);
        assert_eq!(config.log_dir, Some(PathBuf::from("/var/log/folio")));
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = LogConfig::from_lookup(lookup_from(&[(ENV_LOG_LEVEL, "chatty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { key, .. } if key == ENV_LOG_LEVEL));

        let err = LogConfig::from_lookup(lookup_from(&[(ENV_LOG_DIR, "logs")])).unwrap_err();
        assert!(err.to_string().contains(ENV_LOG_DIR));
    }
}
