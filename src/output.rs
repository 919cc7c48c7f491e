//! Wordlist writer and run-report persistence

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Result, WordforgeError};
use crate::types::GenerationReport;

/// Number of entries shown in the console preview
pub const PREVIEW_LEN: usize = 10;

/// Write candidates one per line to `path`
pub fn write_wordlist(path: &Path, candidates: &[String]) -> Result<()> {
    let file = File::create(path)
        .map_err(|e| WordforgeError::io(e.to_string(), Some(path.display().to_string())))?;
    let mut writer = BufWriter::new(file);
    for candidate in candidates {
        writeln!(writer, "{}", candidate)
            .map_err(|e| WordforgeError::io(e.to_string(), Some(path.display().to_string())))?;
    }
    writer
        .flush()
        .map_err(|e| WordforgeError::io(e.to_string(), Some(path.display().to_string())))?;
    Ok(())
}

/// First `PREVIEW_LEN` entries followed by an ellipsis marker, one per
/// line, for the console preview. Short lists omit the marker.
pub fn preview(candidates: &[String]) -> String {
    let mut out = candidates
        .iter()
        .take(PREVIEW_LEN)
        .cloned()
        .collect::<Vec<_>>()
        .join("\n");
    if candidates.len() > PREVIEW_LEN {
        out.push_str("\n...");
    }
    out
}

/// Persist the run summary as pretty-printed JSON
pub fn write_report(path: &Path, report: &GenerationReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report)?;
    std::fs::write(path, json)
        .map_err(|e| WordforgeError::io(e.to_string(), Some(path.display().to_string())))?;
    Ok(())
}
