//! Report and signal file writers

use crate::error::IoError;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Write the report, replacing any existing file
pub fn write_report(path: &Path, content: &str) -> Result<(), IoError> {
    fs::write(path, content).map_err(|e| IoError::write_report(path, e))
}

/// Signal line for downstream automation
pub fn signal_line(has_releases: bool) -> String {
    format!("has_releases={}\n", u8::from(has_releases))
}

/// Append the has_releases line to the signal file, creating it if needed
pub fn append_signal(path: &Path, has_releases: bool) -> Result<(), IoError> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| IoError::append_signal(path, e))?;
    file.write_all(signal_line(has_releases).as_bytes())
        .map_err(|e| IoError::append_signal(path, e))
}
