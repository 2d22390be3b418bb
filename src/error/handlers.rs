//! Error handlers
//!
//! Reports a failed run and maps it to a process exit status.

use crate::error::types::CheckerError;
use log::error;

/// sysexits.h EX_IOERR
pub const EXIT_IO_ERROR: i32 = 74;
/// sysexits.h EX_CONFIG
pub const EXIT_CONFIG_ERROR: i32 = 78;

/// Log a run error
pub fn handle_error(err: &CheckerError) {
    error!("Login check aborted: {}", err);
}

/// Convert error to process exit status
pub fn exit_code(err: &CheckerError) -> i32 {
    match err {
        CheckerError::Io(_) => EXIT_IO_ERROR,
        CheckerError::Config(_) => EXIT_CONFIG_ERROR,
    }
}
