//! JSON Export functionality

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;

use crate::error::LedgerResult;
use crate::models::ExpenseRecord;
use crate::storage::LedgerStore;

/// Snapshot of the ledger for machine consumption
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerExport {
    pub exported_at: DateTime<Utc>,

    /// Version of the tool that wrote the export
    pub app_version: String,

    pub records: Vec<ExpenseRecord>,

    /// Non-blank lines left out because they could not be parsed
    pub skipped_lines: usize,
}

impl LedgerExport {
    /// Build an export from the current ledger contents
    pub fn from_store(store: &LedgerStore) -> LedgerResult<Self> {
        let lines = store.list_all()?;
        let mut records = Vec::with_capacity(lines.len());
        let mut skipped_lines = 0;

        for line in &lines {
            match ExpenseRecord::parse_line(line) {
                Some(record) => records.push(record),
                None if !line.trim().is_empty() => skipped_lines += 1,
                None => {}
            }
        }

        Ok(Self {
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            records,
            skipped_lines,
        })
    }
}

/// Export all readable records as JSON, returning how many were written
pub fn export_records_json<W: Write>(
    store: &LedgerStore,
    writer: W,
    pretty: bool,
) -> LedgerResult<usize> {
    let export = LedgerExport::from_store(store)?;

    if pretty {
        serde_json::to_writer_pretty(writer, &export)?;
    } else {
        serde_json::to_writer(writer, &export)?;
    }

    Ok(export.records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseInput, Payment};
    use crate::storage::StoreOptions;
    use tempfile::TempDir;

    fn create_store() -> (LedgerStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store =
            LedgerStore::open(temp_dir.path().join("expenses.txt"), StoreOptions::default())
                .unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_export_json_round_trips_records() {
        let (store, _temp) = create_store();
        store
            .add(&ExpenseInput::card("25.5", "groceries", "Visa").on("2024-03-01"))
            .unwrap();
        std::fs::OpenOptions::new()
            .append(true)
            .open(store.path())
            .unwrap()
            .write_all(b"half a line\n\n")
            .unwrap();

        let mut buffer = Vec::new();
        assert_eq!(export_records_json(&store, &mut buffer, true).unwrap(), 1);

        let parsed: LedgerExport = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(parsed.records.len(), 1);
        assert_eq!(parsed.skipped_lines, 1);
        assert_eq!(parsed.records[0].payment, Payment::Card("Visa".into()));
        assert_eq!(parsed.records[0].amount.value(), 25.5);
    }

    #[test]
    fn test_export_empty_ledger() {
        let (store, _temp) = create_store();

        let mut buffer = Vec::new();
        assert_eq!(export_records_json(&store, &mut buffer, false).unwrap(), 0);

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["records"], serde_json::json!([]));
    }
}
