// src/cli.rs
use anyhow::Result;
use clap::Parser;
use log::LevelFilter;
use std::io;
use std::path::PathBuf;

use crate::config::Config;
use crate::session::Session;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// TOML file with session settings
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Log level for diagnostics written to stderr
    #[arg(long, default_value = "warn")]
    pub log_level: LevelFilter,
}

/// Loads settings and runs the interactive session on stdin/stdout.
///
/// # Errors
///
/// Returns an error if the config file cannot be loaded or the terminal
/// cannot be read or written.
pub fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(stdin.lock(), stdout.lock(), config).run()
}

/// Sends `log` records at or above `level` to stderr.
pub fn init_logging(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .target(env_logger::Target::Stderr)
        .init();
}
