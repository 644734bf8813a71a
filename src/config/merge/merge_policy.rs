//! Merge rules: defaults, override order, conflict handling.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

use crate::config::{DEFAULT_END_MARKER, DEFAULT_HEADING, DEFAULT_START_MARKER};

/// Prefix for environment overrides, e.g. `DOCINDEX_INDEX__EMOJI=true`.
pub const ENV_PREFIX: &str = "DOCINDEX";

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("index.humanize_titles", false)?
        .set_default("index.include_all_files", false)?
        .set_default("index.emoji", false)?
        .set_default("index.root_tree", true)?
        .set_default("index.skip_hidden_dirs", false)?
        .set_default("index.require_markers", false)?
        .set_default("index.heading", DEFAULT_HEADING)?
        .set_default("index.start_marker", DEFAULT_START_MARKER)?
        .set_default("index.end_marker", DEFAULT_END_MARKER)
}

/// Environment source applied last; nested keys use `__` as separator.
pub fn environment() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}
