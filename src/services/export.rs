use std::path::Path;

use crate::{
    error::AppResult,
    models::{HistoryEntry, HISTORY_HEADERS},
};

/// Writes the history to a CSV file, replacing any previous export
///
/// The header row is always written, even for an empty history. Returns the
/// number of data rows.
pub fn export_history(entries: &[HistoryEntry], path: &Path) -> AppResult<usize> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)?;

    writer.write_record(HISTORY_HEADERS)?;
    for entry in entries {
        writer.serialize(entry)?;
    }
    writer.flush()?;

    tracing::info!(path = %path.display(), rows = entries.len(), "History exported");

    Ok(entries.len())
}
