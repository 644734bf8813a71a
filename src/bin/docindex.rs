//! docindex CLI Binary
//!
//! Regenerates per-directory README indexes and the root README contents tree.

use clap::Parser;
use docindex::cli::{map_error, Cli, RunContext, EXIT_USAGE};
use docindex::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = logging_config.validate().and_then(|_| init_logging(Some(&logging_config))) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(EXIT_USAGE);
    }

    info!("docindex starting");

    let context = match RunContext::new(&cli) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error loading configuration: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(EXIT_USAGE);
        }
    };

    match context.execute(&cli) {
        Ok(output) => {
            println!("{}", output.text);
            process::exit(output.exit_code);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(EXIT_USAGE);
        }
    }
}

/// Build logging configuration from the config file and CLI flags.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = RunContext::load_config(cli)
        .map(|c| c.logging)
        .unwrap_or_default();

    if cli.quiet {
        config.enabled = false;
    }
    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
        if cli.log_output.is_none() {
            config.output = "file".to_string();
        }
    }

    config
}
