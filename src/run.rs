//! Full run: index every subdirectory, then update the root README.
//!
//! Per-directory failures are recorded and the walk continues. A root README
//! failure is recorded without undoing the directory updates already made.

use crate::config::IndexOptions;
use crate::error::IndexError;
use crate::readme::index::{update_directory_index, IndexOutcome};
use crate::readme::root::{update_root_readme, RootOutcome};
use crate::readme::WriteMode;
use crate::title::README_NAME;
use crate::tree::render::relative_link;
use crate::tree::walker::{Walker, WalkerConfig};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;
use tracing::{error, info, instrument, warn};

/// Outcome for one path in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathStatus {
    Skipped,
    Unchanged,
    Written,
    Created,
    Patched,
    MissingMarkers,
    Stale,
    Disabled,
    Failed { kind: String, error: String },
}

impl PathStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PathStatus::Skipped => "skipped",
            PathStatus::Unchanged => "unchanged",
            PathStatus::Written => "written",
            PathStatus::Created => "created",
            PathStatus::Patched => "patched",
            PathStatus::MissingMarkers => "missing markers",
            PathStatus::Stale => "stale",
            PathStatus::Disabled => "disabled",
            PathStatus::Failed { .. } => "failed",
        }
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, PathStatus::Failed { .. })
    }

    /// True when the path was or would be rewritten.
    pub fn is_change(&self) -> bool {
        matches!(
            self,
            PathStatus::Written | PathStatus::Created | PathStatus::Patched | PathStatus::Stale
        )
    }
}

impl From<IndexOutcome> for PathStatus {
    fn from(outcome: IndexOutcome) -> Self {
        match outcome {
            IndexOutcome::Skipped => PathStatus::Skipped,
            IndexOutcome::Unchanged => PathStatus::Unchanged,
            IndexOutcome::Written => PathStatus::Written,
            IndexOutcome::Stale => PathStatus::Stale,
        }
    }
}

impl From<RootOutcome> for PathStatus {
    fn from(outcome: RootOutcome) -> Self {
        match outcome {
            RootOutcome::Created => PathStatus::Created,
            RootOutcome::Patched => PathStatus::Patched,
            RootOutcome::Unchanged => PathStatus::Unchanged,
            RootOutcome::MissingMarkers => PathStatus::MissingMarkers,
            RootOutcome::Stale => PathStatus::Stale,
            RootOutcome::Disabled => PathStatus::Disabled,
        }
    }
}

impl From<&IndexError> for PathStatus {
    fn from(err: &IndexError) -> Self {
        PathStatus::Failed {
            kind: err.kind().to_string(),
            error: err.to_string(),
        }
    }
}

/// One README path and what happened to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathReport {
    /// Root-relative path of the README (or directory, for listing failures)
    pub path: String,
    #[serde(flatten)]
    pub status: PathStatus,
}

/// Result of a full run.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub root: String,
    pub mode: WriteMode,
    pub directories: Vec<PathReport>,
    pub root_readme: PathReport,
    pub duration_ms: u64,
    pub finished_at: String,
}

impl RunReport {
    /// Every failed path, directories first.
    pub fn failures(&self) -> Vec<&PathReport> {
        self.all().filter(|r| r.status.is_failure()).collect()
    }

    /// Paths that were rewritten (write mode) or would be (check mode).
    pub fn changed(&self) -> Vec<&PathReport> {
        self.all().filter(|r| r.status.is_change()).collect()
    }

    pub fn is_success(&self) -> bool {
        self.failures().is_empty()
    }

    /// Check mode found nothing to rewrite and nothing failed.
    pub fn is_clean(&self) -> bool {
        self.is_success() && (self.mode == WriteMode::Write || self.changed().is_empty())
    }

    fn all(&self) -> impl Iterator<Item = &PathReport> {
        self.directories
            .iter()
            .chain(std::iter::once(&self.root_readme))
    }
}

/// Run the index builder on every subdirectory of `root`, then the root
/// README updater.
#[instrument(skip_all, fields(root = %root.display(), mode = ?mode))]
pub fn run(root: &Path, options: &IndexOptions, mode: WriteMode) -> RunReport {
    let start = Instant::now();
    info!("Starting docindex run");

    let walker = Walker::with_config(
        root.to_path_buf(),
        WalkerConfig {
            follow_symlinks: false,
            skip_hidden: options.skip_hidden_dirs,
        },
    );

    let mut directories = Vec::new();
    for dir in walker.directories() {
        let report = match dir {
            Ok(dir) => {
                let readme = dir.join(README_NAME);
                match update_directory_index(&dir, options, mode) {
                    Ok(outcome) => PathReport {
                        path: relative_link(root, &readme),
                        status: outcome.into(),
                    },
                    Err(e) => {
                        warn!(dir = %dir.display(), error = %e, "Directory index failed");
                        failure_report(root, &e, &readme)
                    }
                }
            }
            Err(e) => {
                warn!(error = %e, "Directory walk failed");
                failure_report(root, &e, root)
            }
        };
        directories.push(report);
    }

    let root_path = root.join(README_NAME);
    let root_readme = match update_root_readme(root, options, mode) {
        Ok(outcome) => PathReport {
            path: README_NAME.to_string(),
            status: outcome.into(),
        },
        Err(e) => {
            error!(error = %e, "Root README update failed");
            failure_report(root, &e, &root_path)
        }
    };

    let report = RunReport {
        root: root.display().to_string(),
        mode,
        directories,
        root_readme,
        duration_ms: u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
        finished_at: chrono::Utc::now().to_rfc3339(),
    };

    info!(
        directories = report.directories.len(),
        changed = report.changed().len(),
        failed = report.failures().len(),
        duration_ms = report.duration_ms,
        "Finished docindex run"
    );
    report
}

/// Report entry for a failure, preferring the path carried by the error.
fn failure_report(root: &Path, err: &IndexError, fallback: &Path) -> PathReport {
    let path = err.path().map(|p| p.as_path()).unwrap_or(fallback);
    let display = relative_link(root, path);
    PathReport {
        path: if display.is_empty() {
            ".".to_string()
        } else {
            display
        },
        status: err.into(),
    }
}
