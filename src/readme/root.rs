//! Root README updater: renders the repository tree and splices it between
//! the contents markers of `<root>/README.md`.

use crate::config::IndexOptions;
use crate::error::IndexError;
use crate::readme::patch::{patch_section, PatchOutcome};
use crate::readme::write::{read_existing, write_atomic};
use crate::readme::WriteMode;
use crate::title::README_NAME;
use crate::tree::render::{render_contents, render_tree};
use serde::Serialize;
use std::path::Path;
use tracing::{info, warn};

/// What happened to the root README.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RootOutcome {
    /// README did not exist and was written from the generated block.
    Created,
    /// Marked region replaced.
    Patched,
    /// Marked region already current.
    Unchanged,
    /// README exists without a start marker; left byte-identical.
    MissingMarkers,
    /// Check mode: README would be created or patched.
    Stale,
    /// Root tree updates are turned off.
    Disabled,
}

/// Regenerate the contents section of `root/README.md`.
///
/// A missing README is bootstrapped with the bare generated block (no
/// markers). A README without markers is a no-op unless
/// `options.require_markers` is set. A malformed README is never written.
pub fn update_root_readme(
    root: &Path,
    options: &IndexOptions,
    mode: WriteMode,
) -> Result<RootOutcome, IndexError> {
    if !options.root_tree {
        return Ok(RootOutcome::Disabled);
    }

    let readme_path = root.join(README_NAME);
    let lines = render_tree(root, options)?;
    let block = render_contents(&lines, options);

    let new_contents = match read_existing(&readme_path)? {
        None => {
            if mode == WriteMode::Check {
                return Ok(RootOutcome::Stale);
            }
            write_atomic(&readme_path, &block)?;
            info!(path = %readme_path.display(), "Created root README");
            return Ok(RootOutcome::Created);
        }
        Some(existing) => {
            let markers = options.markers();
            match patch_section(&existing, &block, &markers) {
                Ok(PatchOutcome::Patched(patched)) if patched == existing => {
                    return Ok(RootOutcome::Unchanged);
                }
                Ok(PatchOutcome::Patched(patched)) => patched,
                Ok(PatchOutcome::NoMarkers) if options.require_markers => {
                    return Err(IndexError::MissingMarkers { path: readme_path });
                }
                Ok(PatchOutcome::NoMarkers) => {
                    warn!(
                        path = %readme_path.display(),
                        marker = %markers.start,
                        "Root README has no contents marker, leaving it untouched"
                    );
                    return Ok(RootOutcome::MissingMarkers);
                }
                Err(e) => {
                    return Err(IndexError::MalformedRootReadme {
                        path: readme_path,
                        reason: e.to_string(),
                    });
                }
            }
        }
    };

    if mode == WriteMode::Check {
        return Ok(RootOutcome::Stale);
    }
    write_atomic(&readme_path, &new_contents)?;
    info!(path = %readme_path.display(), "Patched root README");
    Ok(RootOutcome::Patched)
}
