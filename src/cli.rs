// CLI module - command-line argument parsing
//
// warpwrap <FILE> [--root DIR] [--select L:C-L:C]... [--log-level LEVEL]

use clap::Parser;
use std::path::PathBuf;

use warpwrap_core::Selection;

use crate::repl::parse_selection;

/// Wrap selected text in HTML tags
#[derive(Parser, Debug)]
#[command(name = "warpwrap")]
#[command(version)]
#[command(about = "Wrap selected text in HTML tags", long_about = None)]
pub struct Cli {
    /// File to edit
    pub file: PathBuf,

    /// Project root holding warpwrap.json (defaults to the file's directory)
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,

    /// Initial selection, 1-based `line:col-line:col`; repeat for more
    #[arg(long = "select", value_name = "RANGE", value_parser = selection_arg)]
    pub selections: Vec<Selection>,

    /// Minimum log level (debug, info, warn, error)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Project root to load configuration from
    pub fn project_root(&self) -> PathBuf {
        if let Some(root) = &self.root {
            return root.clone();
        }
        match self.file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}

fn selection_arg(value: &str) -> Result<Selection, String> {
    parse_selection(value).map_err(|e| format!("{:#}", e))
}
