//! Error types
//!
//! Defines the error types for code parsing and the command-line front end.

use std::fmt;
use std::io;

/// Error parsing a string into an `ErrorCode`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorCodeError {
    Unknown(String),
}

impl fmt::Display for ParseErrorCodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseErrorCodeError::Unknown(code) => write!(f, "Unknown error code: {:?}", code),
        }
    }
}

impl std::error::Error for ParseErrorCodeError {}

/// Command-line front end errors
#[derive(Debug)]
pub enum CliError {
    Config(config::ConfigError),
    Io(io::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Io(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for CliError {
    fn from(error: config::ConfigError) -> Self {
        CliError::Config(error)
    }
}

impl From<io::Error> for CliError {
    fn from(error: io::Error) -> Self {
        CliError::Io(error)
    }
}
