//! Audit log for ledger changes
//!
//! Every recorded expense and every deletion that actually removed lines is
//! appended to a line-delimited JSON log (JSONL) next to the ledger file.
//! Rejected input and no-op deletions leave no trace.
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::audit::{AuditEntry, AuditLogger};
//!
//! let logger = AuditLogger::new(paths.audit_log());
//! logger.log(&AuditEntry::create("2024-03-01 - 25.5 - groceries - card: Visa\n"))?;
//!
//! for entry in logger.read_recent(10)? {
//!     println!("{}", entry.format_human_readable());
//! }
//! ```

mod entry;
mod logger;

pub use entry::{AuditEntry, Operation};
pub use logger::AuditLogger;
