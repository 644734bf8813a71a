//! Error types for docindex.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while indexing a tree or patching the root README.
///
/// `Listing`, `Read` and `Write` are scoped to a single directory and never
/// abort a run. `MalformedRootReadme` and `MissingMarkers` abort only the root step.
#[derive(Debug, Error)]
pub enum IndexError {
    #[error("Failed to list {}: {source}", path.display())]
    Listing {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed root README {}: {reason}", path.display())]
    MalformedRootReadme { path: PathBuf, reason: String },

    #[error("Root README {} has no contents marker", path.display())]
    MissingMarkers { path: PathBuf },

    #[error("Configuration error: {0}")]
    Config(String),
}

impl IndexError {
    pub fn listing(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::Listing {
            path: path.into(),
            source,
        }
    }

    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::Read {
            path: path.into(),
            source,
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::Write {
            path: path.into(),
            source,
        }
    }

    /// Path the error is about, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            IndexError::Listing { path, .. }
            | IndexError::Read { path, .. }
            | IndexError::Write { path, .. }
            | IndexError::MalformedRootReadme { path, .. }
            | IndexError::MissingMarkers { path } => Some(path),
            IndexError::Config(_) => None,
        }
    }

    /// Short stable category name used in reports.
    pub fn kind(&self) -> &'static str {
        match self {
            IndexError::Listing { .. } => "listing",
            IndexError::Read { .. } => "read",
            IndexError::Write { .. } => "write",
            IndexError::MalformedRootReadme { .. } => "malformed",
            IndexError::MissingMarkers { .. } => "missing_markers",
            IndexError::Config(_) => "config",
        }
    }
}

impl From<config::ConfigError> for IndexError {
    fn from(err: config::ConfigError) -> Self {
        IndexError::Config(err.to_string())
    }
}
