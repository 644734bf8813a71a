//! Filesystem walker for traversing directory structures

use crate::error::IndexError;
use crate::title;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

/// Kind of a directory child, resolved through symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    Markdown,
    Other,
}

/// One immediate child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub kind: EntryKind,
    pub is_symlink: bool,
}

impl Entry {
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// Markdown file other than `README.md`.
    pub fn is_qualifying(&self) -> bool {
        self.kind == EntryKind::Markdown && self.name != title::README_NAME
    }
}

/// List the immediate children of `dir`, sorted by name.
///
/// Names that are not valid UTF-8 are skipped with a warning. Entries whose
/// metadata cannot be read (dangling symlinks) are reported as `Other`.
pub fn list_dir(dir: &Path) -> Result<Vec<Entry>, IndexError> {
    let read_dir = fs::read_dir(dir).map_err(|e| IndexError::listing(dir, e))?;

    let mut entries = Vec::new();
    for dir_entry in read_dir {
        let dir_entry = dir_entry.map_err(|e| IndexError::listing(dir, e))?;
        let path = dir_entry.path();
        let Some(name) = dir_entry.file_name().to_str().map(str::to_string) else {
            warn!(path = %path.display(), "Skipping entry with non UTF-8 name");
            continue;
        };

        let is_symlink = dir_entry
            .file_type()
            .map(|t| t.is_symlink())
            .unwrap_or(false);
        let kind = match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => EntryKind::Directory,
            Ok(meta) if meta.is_file() && title::is_markdown(&name) => EntryKind::Markdown,
            _ => EntryKind::Other,
        };

        entries.push(Entry {
            name,
            path,
            kind,
            is_symlink,
        });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(entries)
}

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to follow symbolic links (default: false)
    pub follow_symlinks: bool,
    /// Whether to prune directories whose name starts with a dot
    pub skip_hidden: bool,
}

/// Walks every directory below a root, excluding the root itself.
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Subdirectories in depth-first, name-sorted order.
    ///
    /// A directory that cannot be read yields an `Err` item and the walk
    /// continues with its siblings. A directory that was already yielded is
    /// not reported again when descending into it fails; listing it fails the
    /// same way for the caller.
    pub fn directories(&self) -> impl Iterator<Item = Result<PathBuf, IndexError>> + '_ {
        let skip_hidden = self.config.skip_hidden;
        let mut yielded: HashSet<PathBuf> = HashSet::new();
        WalkDir::new(&self.root)
            .min_depth(1)
            .follow_links(self.config.follow_symlinks)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(move |entry| !skip_hidden || !is_hidden(entry))
            .filter_map(move |entry| match entry {
                Ok(entry) if entry.file_type().is_dir() => {
                    let path = entry.into_path();
                    yielded.insert(path.clone());
                    Some(Ok(path))
                }
                Ok(_) => None,
                Err(err) if err.path().is_some_and(|p| yielded.contains(p)) => {
                    debug!(error = %err, "Descent failed for a yielded directory");
                    None
                }
                Err(err) => Some(Err(self.walk_error(err))),
            })
    }

    fn walk_error(&self, err: walkdir::Error) -> IndexError {
        let path = err
            .path()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.root.clone());
        let message = err.to_string();
        let source = err
            .into_io_error()
            .unwrap_or_else(|| std::io::Error::new(std::io::ErrorKind::Other, message));
        IndexError::listing(path, source)
    }
}

/// Dot-prefixed names below the walk root. The root itself is never hidden,
/// so walking `.` works.
fn is_hidden(entry: &DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|name| name.starts_with('.'))
            .unwrap_or(false)
}
