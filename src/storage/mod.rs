//! Storage layer for the expense ledger
//!
//! A single flat text file holds every expense, one line each. Appends are
//! plain appends; rewrites go through a temp file and an atomic rename.

pub mod file_io;
pub mod init;
pub mod ledger;

pub use file_io::{append_line, ensure_file, read_lines, write_lines_atomic};
pub use init::open_ledger;
pub use ledger::{LedgerStore, LedgerSummary, StoreOptions};
