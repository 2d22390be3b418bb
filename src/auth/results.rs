//! Login result types
//!
//! Defines the outcome reported to the user after a credential check.

use std::fmt;

/// Result of a single credential check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    Failed,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success)
    }

    /// Message printed for this outcome.
    pub fn message(&self) -> &'static str {
        match self {
            LoginOutcome::Success => "Login successful",
            LoginOutcome::Failed => "Login failed",
        }
    }
}

impl fmt::Display for LoginOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
