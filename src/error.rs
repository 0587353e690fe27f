//! Error types for the Morse encoder
//!
//! Unsupported characters are not errors; they encode to a bare separator.

use thiserror::Error;

/// Main error type for the Morse encoder
#[derive(Error, Debug)]
pub enum MorseError {
    /// A symbol override flag was given without enough values
    #[error("malformed {flag} override: {message}")]
    MalformedOverride { flag: String, message: String },

    /// Writing the encoded line failed
    #[error("failed to write output")]
    Output {
        #[source]
        source: std::io::Error,
    },

    /// The tracing subscriber could not be installed
    #[error("failed to initialize logging: {message}")]
    Logging { message: String },
}

impl MorseError {
    /// Create a new malformed override error
    pub fn malformed_override(flag: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedOverride {
            flag: flag.into(),
            message: message.into(),
        }
    }

    /// Create a new output error
    pub fn output(source: std::io::Error) -> Self {
        Self::Output { source }
    }

    /// Create a new logging error
    pub fn logging(message: impl Into<String>) -> Self {
        Self::Logging {
            message: message.into(),
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, MorseError>;
