//! Error types
//!
//! Defines the credential-check diagnostics and the operational errors of a run.

use std::fmt;
use std::io;

/// Reason a credential check did not pass. Never shown to the user.
#[derive(Debug)]
pub enum AuthError {
    InvalidUsername(String),
    InvalidPassword(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidUsername(u) => write!(f, "Invalid username: {}", u),
            AuthError::InvalidPassword(u) => write!(f, "Invalid password for user: {}", u),
        }
    }
}

impl std::error::Error for AuthError {}

/// Errors that abort a run before an outcome is printed.
#[derive(Debug)]
pub enum CheckerError {
    Io(io::Error),
    Config(config::ConfigError),
}

impl fmt::Display for CheckerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckerError::Io(e) => write!(f, "I/O error: {}", e),
            CheckerError::Config(e) => write!(f, "Configuration error: {}", e),
        }
    }
}

impl std::error::Error for CheckerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CheckerError::Io(e) => Some(e),
            CheckerError::Config(e) => Some(e),
        }
    }
}

impl From<io::Error> for CheckerError {
    fn from(error: io::Error) -> Self {
        CheckerError::Io(error)
    }
}

impl From<config::ConfigError> for CheckerError {
    fn from(error: config::ConfigError) -> Self {
        CheckerError::Config(error)
    }
}
