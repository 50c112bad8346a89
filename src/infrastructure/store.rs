//! JSON persistence for journal entries

use crate::domain::Entry;
use crate::error::Result;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Read a JSON array of entry records
pub fn read_entries(path: &Path) -> Result<Vec<Entry>> {
    let contents = fs::read_to_string(path)?;
    let entries: Vec<Entry> = serde_json::from_str(&contents)?;
    debug!(path = %path.display(), count = entries.len(), "read entries");
    Ok(entries)
}

/// Serialize entries as a 2-space indented JSON array
pub fn to_json(entries: &[Entry]) -> Result<String> {
    Ok(serde_json::to_string_pretty(entries)?)
}

/// Replace the file at `path` with the serialized entries.
/// Parent directories are not created.
pub fn write_entries(path: &Path, entries: &[Entry]) -> Result<()> {
    let contents = to_json(entries)?;
    fs::write(path, contents)?;
    debug!(path = %path.display(), count = entries.len(), "wrote entries");
    Ok(())
}
