//! Directory Tree
//!
//! Enumerates the workspace and renders it as an indented Markdown list.

pub mod render;
pub mod walker;
