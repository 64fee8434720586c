//! Error handlers
//!
//! Reports front end errors and maps them to process exit codes.

use crate::error::types::CliError;
use log::error;

/// Log a front end error
pub fn handle_error(err: &CliError) {
    error!("binaris-error-codes: {}", err);
}

/// Convert error to process exit code
pub fn exit_code(err: &CliError) -> u8 {
    match err {
        CliError::Config(_) => 1,
        CliError::Io(_) => 1,
    }
}
