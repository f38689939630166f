//! Export module for the expense ledger
//!
//! Writes the readable records of the ledger in other formats:
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON: machine-readable snapshot with metadata
//!
//! Lines that cannot be parsed are left out of both.

pub mod csv;
pub mod json;

pub use self::csv::export_records_csv;
pub use self::json::{export_records_json, LedgerExport};
