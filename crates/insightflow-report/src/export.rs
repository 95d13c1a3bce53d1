//! Plain-text report export.
//!
//! Writes the report to `weekly_report_{date}.txt` under the given
//! directory, sanitizing line-by-line so a downstream document encoder that
//! only handles basic character sets never sees extended punctuation.

use std::io;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::sanitize::sanitize_text;

/// Writes the sanitized report for the week of `date` into `dir`.
///
/// Returns the path of the written file.
///
/// # Errors
///
/// Propagates the underlying I/O error if the file cannot be written.
pub fn write_report(dir: &Path, date: NaiveDate, text: &str) -> io::Result<PathBuf> {
    let path = dir.join(format!("weekly_report_{date}.txt"));
    let mut sanitized = text
        .lines()
        .map(sanitize_text)
        .collect::<Vec<_>>()
        .join("\n");
    sanitized.push('\n');
    std::fs::write(&path, sanitized)?;
    Ok(path)
}
