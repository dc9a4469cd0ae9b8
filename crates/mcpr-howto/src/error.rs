//! Error types for the mcpr-howto binary.

use thiserror::Error;

/// Top-level application errors.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// Terminal setup or drawing failed.
    #[error("terminal error: {0}")]
    Terminal(#[source] std::io::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid JSON/JSONC syntax.
    #[error("invalid config at {path}: {message}")]
    InvalidJson { path: String, message: String },

    /// Config file could not be read.
    #[error("could not read config file {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Environment variable not found during substitution.
    #[error("environment variable not found: {name}")]
    EnvVarNotFound { name: String },

    /// File reference not found during substitution.
    #[error("file reference not found: {path}")]
    FileRefNotFound { path: String },

    /// Locale tag with no string table.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::InvalidJson {
            path: "config.json".to_string(),
            message: "expected value".to_string(),
        };
        assert_eq!(err.to_string(), "invalid config at config.json: expected value");
    }

    #[test]
    fn test_app_error_from_config() {
        let err: AppError = ConfigError::UnknownLocale("fr".to_string()).into();
        assert_eq!(err.to_string(), "config error: unknown locale: fr");
    }

    #[test]
    fn test_read_error_keeps_source() {
        use std::error::Error as _;
        let err = ConfigError::Read {
            path: "missing.json".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
    }
}
