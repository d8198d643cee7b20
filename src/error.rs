//! Error types for the booking client

use thiserror::Error;

/// Failures raised by a form before any request leaves the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// One or more fields failed validation; the form's error map holds the messages.
    #[error("Validation failed for: {}", .0.join(", "))]
    Validation(Vec<String>),

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("Action not allowed in step {0}")]
    WrongStep(&'static str),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Unknown option '{value}' for field {field}")]
    UnknownOption { field: &'static str, value: String },
}

/// Failures of the single network call made per submit.
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Request timed out")]
    Timeout,

    #[error("Server responded with status {0}")]
    Status(u16),

    #[error("Failed to serialize payload: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read input file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse input file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Value for field '{0}' must be a string")]
    NotAString(String),
}
