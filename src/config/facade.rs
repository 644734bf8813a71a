//! Config loading facade: assembles sources in precedence order.

use crate::config::merge::merge_policy;
use crate::config::sources::{global_file, workspace_file};
use crate::config::DocIndexConfig;
use config::{ConfigError, File};
use std::path::Path;

/// Loads `DocIndexConfig` from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a workspace root.
    ///
    /// Precedence, lowest first: defaults, global file, `<root>/.docindex.toml`,
    /// `DOCINDEX_*` environment variables.
    pub fn load(workspace_root: &Path) -> Result<DocIndexConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        builder
            .add_source(merge_policy::environment())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from an explicit file, skipping global and workspace files.
    /// Environment variables still apply.
    pub fn load_from_file(path: &Path) -> Result<DocIndexConfig, ConfigError> {
        merge_policy::builder_with_defaults()?
            .add_source(File::from(path).required(true))
            .add_source(merge_policy::environment())
            .build()?
            .try_deserialize()
    }
}
