//! Credential validator
//!
//! Exact, case-sensitive comparison of both fields against the expected pair.
//! No trimming, case folding or Unicode normalization is applied.

use super::credentials::{Credentials, EXPECTED_PASSWORD, EXPECTED_USERNAME};
use super::results::LoginOutcome;
use crate::error::AuthError;
use log::debug;

/// Checks both fields, reporting the first one that does not match.
pub fn verify(credentials: &Credentials) -> Result<(), AuthError> {
    if credentials.username != EXPECTED_USERNAME {
        return Err(AuthError::InvalidUsername(credentials.username.clone()));
    }

    if credentials.password != EXPECTED_PASSWORD {
        return Err(AuthError::InvalidPassword(credentials.username.clone()));
    }

    Ok(())
}

/// Decides the login outcome for the supplied credentials.
pub fn check_login(credentials: &Credentials) -> LoginOutcome {
    match verify(credentials) {
        Ok(()) => LoginOutcome::Success,
        Err(e) => {
            debug!("Credential check rejected: {}", e);
            LoginOutcome::Failed
        }
    }
}
