//! Report persistence and atomic file operations

use crate::error::ReportError;
use crate::report::Report;
use std::path::Path;

/// Write data atomically using temp file + rename
pub fn atomic_write(path: &Path, data: &[u8]) -> std::io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let temp_path = path.with_extension("tmp");
    std::fs::write(&temp_path, data)?;
    std::fs::rename(temp_path, path)?;
    Ok(())
}

/// Persist the report as a pretty-printed JSON array
pub fn write_report(path: &Path, report: &Report) -> Result<(), ReportError> {
    let json = serde_json::to_string_pretty(report)?;
    atomic_write(path, json.as_bytes())?;
    tracing::info!(path = %path.display(), entries = report.len(), "report written");
    Ok(())
}

/// Load a previously written report
pub fn read_report(path: &Path) -> Result<Report, ReportError> {
    let contents = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}
