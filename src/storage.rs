use anyhow::{Context, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::models::RawEntry;

/// Reads a daily or aggregate file. Any JSON array of objects is accepted;
/// field values are not checked.
pub fn read_entries(path: &Path) -> Result<Vec<RawEntry>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    let entries: Vec<RawEntry> = serde_json::from_str(&content)
        .with_context(|| format!("{} is not a JSON array of objects", path.display()))?;
    Ok(entries)
}

/// Loads an existing daily file, or `None` when it has not been created yet.
pub fn read_entries_if_exists(path: &Path) -> Result<Option<Vec<RawEntry>>> {
    if path.exists() {
        read_entries(path).map(Some)
    } else {
        Ok(None)
    }
}

// Pretty-printed with two-space indent, non-ASCII kept as-is
pub fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json).with_context(|| format!("cannot write {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote file");
    Ok(())
}

pub fn write_entries(path: &Path, entries: &[RawEntry]) -> Result<()> {
    write_json(path, entries)
}
