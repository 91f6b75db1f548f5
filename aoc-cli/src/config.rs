//! Configuration resolution from CLI args

use crate::cli::Args;
use crate::input;
use std::path::{Path, PathBuf};

/// Resolved runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub year: u16,
    pub day: u8,
    /// Part filter (None = all parts)
    pub part_filter: Option<u8>,
    /// File the puzzle input is read from
    pub input_path: PathBuf,
    pub quiet: bool,
}

impl Config {
    pub fn from_args(args: Args) -> Self {
        let input_path = match args.input {
            Some(path) => expand_tilde(&path),
            None => input::default_input_path(&expand_tilde(&args.input_dir), args.year, args.day),
        };

        Config {
            year: args.year,
            day: args.day,
            part_filter: args.part,
            input_path,
            quiet: args.quiet,
        }
    }
}

/// Expand ~ to home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str()
        && (path_str.starts_with("~/") || path_str == "~")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(path_str.trim_start_matches('~').trim_start_matches('/'));
    }
    path.to_path_buf()
}
