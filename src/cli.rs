//! CLI domain: parse, route, output, and presentation only.
//! No indexing logic lives here; the route dispatches to `run`.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::{exit_code, map_error, EXIT_FAILURE, EXIT_SUCCESS, EXIT_USAGE};
pub use parse::{Cli, OutputFormat};
pub use presentation::{format_report_json, format_report_text};
pub use route::{CommandOutput, RunContext};
