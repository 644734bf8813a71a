//! Per-directory index builder.
//!
//! Writes `<dir>/README.md` as a flat list of links to the Markdown files in
//! that directory. The file is always replaced wholesale, never merged.

use crate::config::IndexOptions;
use crate::error::IndexError;
use crate::readme::write::{matches_existing, write_atomic};
use crate::readme::WriteMode;
use crate::title::{self, README_NAME};
use crate::tree::walker::list_dir;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

/// What happened to a directory's README.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IndexOutcome {
    /// No qualifying Markdown files; README untouched.
    Skipped,
    /// README already matched the generated document.
    Unchanged,
    /// README created or replaced.
    Written,
    /// Check mode: README would be created or replaced.
    Stale,
}

/// Build the index document for `dir`, or `None` when it has no qualifying
/// Markdown files.
pub fn build_directory_index(
    dir: &Path,
    options: &IndexOptions,
) -> Result<Option<String>, IndexError> {
    let files: Vec<String> = list_dir(dir)?
        .into_iter()
        .filter(|entry| entry.is_qualifying())
        .map(|entry| entry.name)
        .collect();

    if files.is_empty() {
        return Ok(None);
    }

    let mut doc = options.heading_line();
    doc.push_str("\n\n");
    for name in &files {
        let label = if options.humanize_titles {
            title::title_of(name)
        } else {
            name.clone()
        };
        doc.push_str(&format!("- [{}]({})\n", label, name));
    }
    Ok(Some(doc))
}

/// Regenerate `dir/README.md`.
pub fn update_directory_index(
    dir: &Path,
    options: &IndexOptions,
    mode: WriteMode,
) -> Result<IndexOutcome, IndexError> {
    let Some(doc) = build_directory_index(dir, options)? else {
        debug!(dir = %dir.display(), "No Markdown files, skipping");
        return Ok(IndexOutcome::Skipped);
    };

    let readme_path = dir.join(README_NAME);
    if matches_existing(&readme_path, doc.as_bytes()) {
        debug!(path = %readme_path.display(), "Index up to date");
        return Ok(IndexOutcome::Unchanged);
    }

    match mode {
        WriteMode::Check => {
            info!(path = %readme_path.display(), "Index is stale");
            Ok(IndexOutcome::Stale)
        }
        WriteMode::Write => {
            write_atomic(&readme_path, &doc)?;
            info!(path = %readme_path.display(), "Wrote index");
            Ok(IndexOutcome::Written)
        }
    }
}
