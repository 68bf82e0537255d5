use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to write report to {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Not a whole number: '{value}'")]
    InvalidNumber { value: String },

    #[error("Number must be greater than zero: {value}")]
    NonPositiveCount { value: i64 },

    #[error("Input stream closed")]
    InputClosed,
}

impl StatsError {
    /// Short message suitable for printing to the user.
    pub fn user_friendly_message(&self) -> String {
        match self {
            StatsError::ReportWrite { path, .. } => {
                format!("Could not save the report to '{}'", path.display())
            }
            StatsError::ConfigError { message } => format!("Configuration problem: {}", message),
            StatsError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            StatsError::InvalidNumber { .. } | StatsError::NonPositiveCount { .. } => {
                "Invalid input".to_string()
            }
            StatsError::InputClosed => "Input ended before the session finished".to_string(),
            StatsError::IoError(e) => format!("Terminal I/O failed: {}", e),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StatsError::ReportWrite { .. } => {
                "Check that the output directory exists and is writable, or pass --output"
            }
            StatsError::ConfigError { .. } => "Make sure the config file exists and is valid TOML",
            StatsError::InvalidConfigValueError { .. } => {
                "Fix the setting in the config file or on the command line"
            }
            StatsError::InvalidNumber { .. } | StatsError::NonPositiveCount { .. } => {
                "Enter a whole number"
            }
            StatsError::InputClosed => "Run the program again from an interactive terminal",
            StatsError::IoError(_) => "Check the terminal and try again",
        }
    }

    /// Errors the interactive loop recovers from by prompting again.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            StatsError::InvalidNumber { .. } | StatsError::NonPositiveCount { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
