use std::io;
use thiserror::Error;

/// Unified error type for the verse client
#[derive(Error, Debug)]
pub enum VerseError {
    /// Network failure or a non-2xx answer from one of the remote services
    #[error("Transport error: {0}")]
    Transport(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// User input errors
    #[error("Input error: {0}")]
    Input(String),

    /// A course name or number that is not in the course list
    #[error("Unknown course: {0}")]
    UnknownCourse(String),

    /// IO-related errors
    #[error("IO error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<reqwest::Error> for VerseError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            VerseError::Transport(format!("Request timed out: {}", err))
        } else if err.is_connect() {
            VerseError::Transport(format!("Connection failed: {}", err))
        } else if err.is_status() {
            VerseError::Transport(format!("Service returned error status: {}", err))
        } else if err.is_decode() {
            VerseError::Serialization(format!("Malformed response body: {}", err))
        } else {
            VerseError::Transport(format!("Request failed: {}", err))
        }
    }
}

impl From<serde_json::Error> for VerseError {
    fn from(err: serde_json::Error) -> Self {
        VerseError::Serialization(format!("JSON error: {}", err))
    }
}

impl From<serde_yml::Error> for VerseError {
    fn from(err: serde_yml::Error) -> Self {
        VerseError::Serialization(format!("YAML error: {}", err))
    }
}

impl From<rustyline::error::ReadlineError> for VerseError {
    fn from(err: rustyline::error::ReadlineError) -> Self {
        VerseError::Input(format!("Line editor error: {}", err))
    }
}
