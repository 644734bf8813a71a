//! CLI route: builds the run context from flags and config, then dispatches.

use crate::cli::output::exit_code;
use crate::cli::parse::{Cli, OutputFormat};
use crate::cli::presentation::{format_report_json, format_report_text};
use crate::config::{ConfigLoader, DocIndexConfig};
use crate::error::IndexError;
use crate::readme::WriteMode;
use crate::run::run;
use std::io::IsTerminal;
use std::path::PathBuf;
use tracing::debug;

/// Runtime context for CLI execution: resolved root and effective config.
pub struct RunContext {
    root: PathBuf,
    config: DocIndexConfig,
}

/// What the binary prints and how it exits.
#[derive(Debug)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

impl RunContext {
    /// Load config for `cli.root` (or `cli.config`) and apply CLI overrides.
    pub fn new(cli: &Cli) -> Result<Self, IndexError> {
        if !cli.root.is_dir() {
            return Err(IndexError::Config(format!(
                "Root {} is not a directory",
                cli.root.display()
            )));
        }

        let mut config = Self::load_config(cli)?;
        apply_overrides(&mut config, cli);
        config.index.validate()?;

        let root = dunce::canonicalize(&cli.root).map_err(|e| IndexError::listing(&cli.root, e))?;
        Ok(Self { root, config })
    }

    /// Config from files and environment, without CLI overrides.
    pub fn load_config(cli: &Cli) -> Result<DocIndexConfig, IndexError> {
        let config = match &cli.config {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load(&cli.root)?,
        };
        Ok(config)
    }

    pub fn config(&self) -> &DocIndexConfig {
        &self.config
    }

    /// Perform the run (or print config) and render the result.
    pub fn execute(&self, cli: &Cli) -> Result<CommandOutput, IndexError> {
        if cli.print_config {
            return Ok(CommandOutput {
                text: self.config.to_toml()?,
                exit_code: crate::cli::EXIT_SUCCESS,
            });
        }

        let mode = if cli.check {
            WriteMode::Check
        } else {
            WriteMode::Write
        };
        debug!(root = %self.root.display(), ?mode, "Dispatching run");
        let report = run(&self.root, &self.config.index, mode);

        let text = match cli.format {
            OutputFormat::Json => format_report_json(&report)?,
            OutputFormat::Text => {
                let color = self.config.logging.color && std::io::stdout().is_terminal();
                format_report_text(&report, color)
            }
        };
        Ok(CommandOutput {
            text,
            exit_code: exit_code(&report),
        })
    }
}

/// Each `--x` / `--no-x` pair sets the option; with neither flag the config
/// value stands.
fn apply_overrides(config: &mut DocIndexConfig, cli: &Cli) {
    let index = &mut config.index;
    override_flag(&mut index.humanize_titles, cli.humanize_titles, cli.no_humanize_titles);
    override_flag(&mut index.include_all_files, cli.include_all_files, cli.no_include_all_files);
    override_flag(&mut index.emoji, cli.emoji, cli.no_emoji);
    override_flag(&mut index.root_tree, cli.root_tree, cli.no_root_tree);
    override_flag(&mut index.skip_hidden_dirs, cli.skip_hidden_dirs, cli.no_skip_hidden_dirs);
    override_flag(&mut index.require_markers, cli.require_markers, cli.no_require_markers);
}

fn override_flag(value: &mut bool, on: bool, off: bool) {
    if on {
        *value = true;
    } else if off {
        *value = false;
    }
}
