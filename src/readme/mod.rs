//! README generation: per-directory indexes, the root tree section, and the
//! file writes behind both.

pub mod index;
pub mod patch;
pub mod root;
pub mod write;

use serde::{Deserialize, Serialize};

/// Whether a run writes files or only reports what would change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    #[default]
    Write,
    Check,
}
