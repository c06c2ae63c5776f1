//! Centralized error types for the TripCheck application shell.
//!
//! Service crates keep their own typed errors; the UI maps them into
//! this hierarchy for display. Use `user_message()` to get a
//! UI-appropriate message.

use thiserror::Error;

/// Top-level application error type.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Trip error: {0}")]
    Trip(String),

    #[error("Weather error: {0}")]
    Weather(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(#[from] anyhow::Error),
}

impl AppError {
    /// Returns a user-friendly message suitable for display in the UI.
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Config(e) => e.user_message(),
            AppError::Trip(_) => "Something went wrong with your trips. Please try again.",
            AppError::Weather(_) => "Weather is unavailable right now. Please try again.",
            AppError::Io(_) => "A file operation failed. Please try again.",
            AppError::Other(_) => "An unexpected error occurred. Please try again.",
        }
    }
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Configuration parse error: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn user_message(&self) -> &'static str {
        match self {
            ConfigError::NotFound(_) => "Configuration not found. Using defaults.",
            ConfigError::ParseError(_) => "Configuration file is malformed. Check your settings.",
            ConfigError::Invalid(_) => "Invalid configuration. Check your settings.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_error_converts_to_app_error() {
        let err: AppError = ConfigError::Invalid("bad timeout".into()).into();
        assert!(matches!(err, AppError::Config(ConfigError::Invalid(_))));
    }

    #[test]
    fn user_message_propagation() {
        let err = AppError::Config(ConfigError::ParseError("line 3".into()));
        assert_eq!(
            err.user_message(),
            "Configuration file is malformed. Check your settings."
        );
    }

    #[test]
    fn user_messages_are_non_empty() {
        let errors = [
            AppError::Trip("gone".into()),
            AppError::Weather("down".into()),
            AppError::Config(ConfigError::NotFound("config.toml".into())),
        ];
        for err in errors {
            assert!(!err.user_message().is_empty());
        }
    }
}
