//! Loading puzzle input from disk

use crate::error::CliError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// `{dir}/{year}_day{day:02}.txt`
pub fn default_input_path(dir: &Path, year: u16, day: u8) -> PathBuf {
    dir.join(format!("{}_day{:02}.txt", year, day))
}

/// Read the whole input file into memory
pub fn read_input(path: &Path) -> Result<String, CliError> {
    let content = fs::read_to_string(path).map_err(|source| CliError::InputUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = content.len(), "read puzzle input");
    Ok(content)
}
