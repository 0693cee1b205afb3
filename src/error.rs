//! Error types for riskcheck.
//!
//! The chat core itself never surfaces an error to the user: malformed
//! input degrades to guidance text. These types cover the ambient
//! failures around it (configuration, terminal shell).

/// Top-level error type.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Shell error: {0}")]
    Shell(#[from] ShellError),
}

/// Configuration-related errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration value for {key}: {message}")]
    InvalidValue { key: String, message: String },

    #[error("Category weights must sum to 1.0, got {sum}")]
    WeightSum { sum: f64 },

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),
}

/// Errors from the interactive terminal shell.
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
