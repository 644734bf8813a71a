//! CLI parse: clap types for docindex. No behavior; definitions only.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// docindex - Regenerate Markdown contents listings and the root README tree
#[derive(Parser, Debug)]
#[command(name = "docindex")]
#[command(version)]
#[command(about = "Regenerate per-directory README indexes and the root README contents tree")]
pub struct Cli {
    /// Repository root to index
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Configuration file path (overrides global and workspace config files)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Use humanized titles ("Getting Started") instead of file names as link text
    #[arg(long, overrides_with = "no_humanize_titles")]
    pub humanize_titles: bool,

    /// Use file names as link text even if the config enables humanized titles
    #[arg(long, overrides_with = "humanize_titles")]
    pub no_humanize_titles: bool,

    /// List every non-hidden file in the root tree, not only Markdown files
    #[arg(long, overrides_with = "no_include_all_files")]
    pub include_all_files: bool,

    /// List only Markdown files in the root tree
    #[arg(long, overrides_with = "include_all_files")]
    pub no_include_all_files: bool,

    /// Decorate headings, directories and files with emoji
    #[arg(long, overrides_with = "no_emoji")]
    pub emoji: bool,

    /// Plain headings and list items
    #[arg(long, overrides_with = "emoji")]
    pub no_emoji: bool,

    /// Update the root README tree even if the config disables it
    #[arg(long, overrides_with = "no_root_tree")]
    pub root_tree: bool,

    /// Skip the root README tree update
    #[arg(long, overrides_with = "root_tree")]
    pub no_root_tree: bool,

    /// Do not index directories whose name starts with a dot
    #[arg(long, overrides_with = "no_skip_hidden_dirs")]
    pub skip_hidden_dirs: bool,

    /// Index dot-directories even if the config skips them
    #[arg(long, overrides_with = "skip_hidden_dirs")]
    pub no_skip_hidden_dirs: bool,

    /// Fail when the root README exists but has no contents marker
    #[arg(long, overrides_with = "no_require_markers")]
    pub require_markers: bool,

    /// Leave a root README without markers alone even if the config requires them
    #[arg(long, overrides_with = "require_markers")]
    pub no_require_markers: bool,

    /// Report stale README files without writing; exit 1 if any
    #[arg(long)]
    pub check: bool,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level)
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, short = 'q', conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Report rendering for stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
