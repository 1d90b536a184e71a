mod cli;
mod host;
mod repl;

use anyhow::{Context, Result};
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::str::FromStr;

use warpwrap_buffer::TextBuffer;
use warpwrap_config::Config;
use warpwrap_logger::LogLevel;
use warpwrap_session::Session;

use cli::Cli;
use host::TerminalHost;

fn init_logging(config: &Config, level_override: Option<&str>) {
    // Use config override if specified, otherwise the cache directory
    let log_file_path = match &config.logging.file_path {
        Some(path) => PathBuf::from(path),
        None => match warpwrap_config::get_cache_dir() {
            Ok(dir) => warpwrap_logger::default_file_in(&dir),
            Err(_) => warpwrap_logger::default_file_in(&std::env::temp_dir()),
        },
    };

    let level = level_override.unwrap_or(config.logging.min_level.as_str());
    let min_level = LogLevel::from_str(level).unwrap_or_else(|e| {
        eprintln!("{}, using info", e);
        LogLevel::Info
    });

    warpwrap_logger::init(log_file_path, min_level);
    warpwrap_logger::info("warpwrap started");
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let root = cli.project_root();

    // Parse errors are reported again by the first command that loads it
    let config = Config::load_from(&root).unwrap_or_default();
    init_logging(&config, cli.log_level.as_deref());

    let buffer = TextBuffer::from_file(&cli.file)
        .with_context(|| format!("Cannot open {}", cli.file.display()))?;
    warpwrap_logger::info(format!(
        "Editing {} ({} lines)",
        cli.file.display(),
        buffer.line_count()
    ));

    let stdin = io::stdin();
    let mut host = TerminalHost::new(buffer, Some(root), stdin.lock(), io::stdout());
    if !cli.selections.is_empty() {
        host.set_selections(cli.selections);
    }

    let mut session = Session::new();
    repl::run(&mut host, &mut session);

    warpwrap_logger::info("warpwrap finished");
    Ok(())
}
