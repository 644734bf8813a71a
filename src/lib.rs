//! docindex: Markdown contents maintenance
//!
//! Regenerates a `README.md` contents listing in every directory that holds
//! Markdown files, and keeps a marked section of the root `README.md` in sync
//! with the repository tree.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod readme;
pub mod run;
pub mod title;
pub mod tree;

pub use config::{DocIndexConfig, IndexOptions};
pub use error::IndexError;
pub use readme::WriteMode;
pub use run::{run, RunReport};
