pub mod dex;
pub mod encounters;
pub mod evolutions;
pub mod lookup;
pub mod records;
pub mod tm;
pub mod type_chart;

use crate::error::{Result, WikiError};
use std::fs;
use std::path::Path;

/// Reads a game text file into lines with trailing whitespace removed.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path).map_err(|e| WikiError::io(path, e))?;
    let content = content.strip_prefix('\u{feff}').unwrap_or(&content);
    Ok(content.lines().map(|line| line.trim_end().to_string()).collect())
}
