use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("decode failed: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Serialization error: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Cannot store {field}: '{value}' is not a finite number")]
    UnsupportedValue { field: String, value: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Invalid input for {field}: '{value}'")]
    InvalidInput { field: String, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Storage,
    Data,
    Configuration,
    UserInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl RosterError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            RosterError::IoError(_) => ErrorCategory::Storage,
            RosterError::Decode { .. }
            | RosterError::Encode(_)
            | RosterError::UnsupportedValue { .. } => ErrorCategory::Data,
            RosterError::ConfigError { .. }
            | RosterError::ConfigValidationError { .. }
            | RosterError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            RosterError::InvalidInput { .. } => ErrorCategory::UserInput,
        }
    }

    /// Malformed console input ends the session quietly, everything else is a failure.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RosterError::InvalidInput { .. } => ErrorSeverity::Low,
            RosterError::Decode { .. }
            | RosterError::ConfigError { .. }
            | RosterError::ConfigValidationError { .. }
            | RosterError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            RosterError::Encode(_) | RosterError::UnsupportedValue { .. } => ErrorSeverity::High,
            RosterError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            RosterError::IoError(e) => match e.kind() {
                std::io::ErrorKind::PermissionDenied => {
                    "Check the permissions of the roster file and its directory".to_string()
                }
                std::io::ErrorKind::NotFound => {
                    "Make sure the roster file path points to an existing location".to_string()
                }
                _ => "Retry the operation or choose another roster file with --file".to_string(),
            },
            RosterError::Decode { path, .. } => format!(
                "Fix or remove '{}', or restart and choose to start with an empty roster",
                path.display()
            ),
            RosterError::Encode(_) => "Report this roster contents as a bug".to_string(),
            RosterError::UnsupportedValue { .. } => {
                "Remove the employee with the invalid tenure and add it again".to_string()
            }
            RosterError::ConfigError { .. } | RosterError::ConfigValidationError { .. } => {
                "Check the TOML configuration file syntax".to_string()
            }
            RosterError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}' in the configuration", field)
            }
            RosterError::InvalidInput { field, .. } => {
                format!("Enter a number for {} next time", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            RosterError::IoError(e) => format!("Could not access the roster file: {}", e),
            RosterError::Decode { path, source } => format!(
                "Failed to load '{}': decode failed: {}",
                path.display(),
                source
            ),
            RosterError::Encode(e) => format!("Failed to encode the roster: {}", e),
            RosterError::UnsupportedValue { field, value } => {
                format!("Failed to save the roster: {} is {}", field, value)
            }
            RosterError::ConfigError { message } => format!("Configuration problem: {}", message),
            RosterError::ConfigValidationError { field, message } => {
                format!("Configuration problem in '{}': {}", field, message)
            }
            RosterError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{}' is not a valid value for '{}': {}", value, field, reason),
            RosterError::InvalidInput { .. } => "Invalid input, exiting.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RosterError>;
