//! CLI output: error mapping and exit codes.

use crate::error::IndexError;
use crate::run::RunReport;

pub const EXIT_SUCCESS: i32 = 0;
/// At least one path failed, or check mode found stale files.
pub const EXIT_FAILURE: i32 = 1;
/// Bad configuration or arguments; nothing was run.
pub const EXIT_USAGE: i32 = 2;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &IndexError) -> String {
    format!("error: {}", e)
}

/// Exit status for a finished run.
pub fn exit_code(report: &RunReport) -> i32 {
    if report.is_clean() {
        EXIT_SUCCESS
    } else {
        EXIT_FAILURE
    }
}
