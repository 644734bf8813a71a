//! Renders the workspace as an indented Markdown list for the root README.

use crate::config::IndexOptions;
use crate::error::IndexError;
use crate::title;
use crate::tree::walker::{list_dir, Entry, EntryKind};
use std::path::Path;
use tracing::{debug, instrument, warn};

const INDENT: &str = "  ";

/// Render the tree below `root` as list lines, one per directory or file.
///
/// Children are visited in name order; dot-prefixed entries are skipped at
/// every depth. Symlinked directories are listed but not descended into.
/// A subdirectory that cannot be listed keeps its line and loses its
/// children; only an unreadable root is an error.
#[instrument(skip_all, fields(root = %root.display()))]
pub fn render_tree(root: &Path, options: &IndexOptions) -> Result<Vec<String>, IndexError> {
    let mut lines = Vec::new();
    render_dir(root, root, 0, options, &mut lines)?;
    debug!(lines = lines.len(), "Rendered repository tree");
    Ok(lines)
}

/// The generated block: heading, blank line, then every tree line.
pub fn render_contents(lines: &[String], options: &IndexOptions) -> String {
    let mut out = options.heading_line();
    out.push_str("\n\n");
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    out
}

fn render_dir(
    root: &Path,
    dir: &Path,
    depth: usize,
    options: &IndexOptions,
    lines: &mut Vec<String>,
) -> Result<(), IndexError> {
    let entries = match list_dir(dir) {
        Ok(entries) => entries,
        Err(e) if depth > 0 => {
            warn!(error = %e, "Skipping unreadable directory in tree");
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    for entry in entries {
        if entry.is_hidden() {
            continue;
        }
        let indent = INDENT.repeat(depth);
        match entry.kind {
            EntryKind::Directory => {
                lines.push(directory_line(&indent, &entry, options));
                if !entry.is_symlink {
                    render_dir(root, &entry.path, depth + 1, options, lines)?;
                }
            }
            _ if entry.is_qualifying() || options.include_all_files => {
                lines.push(file_line(&indent, root, &entry, options));
            }
            _ => {}
        }
    }
    Ok(())
}

fn directory_line(indent: &str, entry: &Entry, options: &IndexOptions) -> String {
    if options.emoji {
        format!("{}- 📂 {}", indent, entry.name)
    } else {
        format!("{}- {}", indent, entry.name)
    }
}

fn file_line(indent: &str, root: &Path, entry: &Entry, options: &IndexOptions) -> String {
    let label = if options.humanize_titles {
        title::title_of(&entry.name)
    } else {
        entry.name.clone()
    };
    let target = relative_link(root, &entry.path);
    if options.emoji {
        format!("{}- 📄 [{}]({})", indent, label, target)
    } else {
        format!("{}- [{}]({})", indent, label, target)
    }
}

/// Root-relative path with `/` separators, as used in Markdown links.
pub fn relative_link(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
