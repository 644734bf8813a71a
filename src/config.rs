//! Configuration System
//!
//! Layered configuration for a docindex run: built-in defaults, the global
//! config file, the workspace `.docindex.toml`, then `DOCINDEX_*` environment
//! variables. CLI flags are applied on top by the caller.

use crate::error::IndexError;
use crate::logging::LoggingConfig;
use crate::readme::patch::Markers;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;
pub use sources::workspace_file::WORKSPACE_CONFIG_FILE;

/// Default start sentinel for the generated region of the root README.
pub const DEFAULT_START_MARKER: &str = "<!-- CONTENTS -->";
/// Default end sentinel for the generated region of the root README.
pub const DEFAULT_END_MARKER: &str = "<!-- END CONTENTS -->";
/// Default heading text for generated listings.
pub const DEFAULT_HEADING: &str = "Contents";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocIndexConfig {
    /// Index generation policy
    #[serde(default)]
    pub index: IndexOptions,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Policy knobs for index generation and the root tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexOptions {
    /// Show `Getting Started` instead of `getting_started.md` as link text
    #[serde(default)]
    pub humanize_titles: bool,

    /// List every non-hidden file in the root tree, not only Markdown files
    #[serde(default)]
    pub include_all_files: bool,

    /// Decorate headings, directories and files with emoji
    #[serde(default)]
    pub emoji: bool,

    /// Update the root README tree section
    #[serde(default = "default_true")]
    pub root_tree: bool,

    /// Do not index directories whose name starts with a dot
    #[serde(default)]
    pub skip_hidden_dirs: bool,

    /// Treat a root README without the start marker as an error
    #[serde(default)]
    pub require_markers: bool,

    /// Heading text (without the leading `#`)
    #[serde(default = "default_heading")]
    pub heading: String,

    #[serde(default = "default_start_marker")]
    pub start_marker: String,

    #[serde(default = "default_end_marker")]
    pub end_marker: String,
}

fn default_true() -> bool {
    true
}

fn default_heading() -> String {
    DEFAULT_HEADING.to_string()
}

fn default_start_marker() -> String {
    DEFAULT_START_MARKER.to_string()
}

fn default_end_marker() -> String {
    DEFAULT_END_MARKER.to_string()
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            humanize_titles: false,
            include_all_files: false,
            emoji: false,
            root_tree: default_true(),
            skip_hidden_dirs: false,
            require_markers: false,
            heading: default_heading(),
            start_marker: default_start_marker(),
            end_marker: default_end_marker(),
        }
    }
}

impl IndexOptions {
    /// The full heading line, e.g. `# Contents` or `# 📚 Contents`.
    pub fn heading_line(&self) -> String {
        if self.emoji {
            format!("# 📚 {}", self.heading)
        } else {
            format!("# {}", self.heading)
        }
    }

    /// Sentinels delimiting the generated region, trimmed.
    pub fn markers(&self) -> Markers {
        Markers::new(self.start_marker.trim(), self.end_marker.trim())
    }

    /// Validate option values that cannot be expressed by types alone.
    pub fn validate(&self) -> Result<(), IndexError> {
        let start = self.start_marker.trim();
        let end = self.end_marker.trim();
        if start.is_empty() || end.is_empty() {
            return Err(IndexError::Config(
                "Contents markers cannot be empty".to_string(),
            ));
        }
        if start == end {
            return Err(IndexError::Config(format!(
                "Start and end markers must differ (both are '{}')",
                start
            )));
        }
        if self.heading.trim().is_empty() {
            return Err(IndexError::Config("Heading cannot be empty".to_string()));
        }
        if self.heading.contains('\n') {
            return Err(IndexError::Config(
                "Heading must be a single line".to_string(),
            ));
        }
        Ok(())
    }
}

impl DocIndexConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), IndexError> {
        self.index.validate()?;
        self.logging.validate()
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, IndexError> {
        toml::to_string_pretty(self).map_err(|e| IndexError::Config(e.to_string()))
    }
}
