//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the ledger store.

pub mod expense;
pub mod export;
pub mod history;
pub mod report;

pub use expense::{handle_add, handle_delete, handle_list, AddArgs, DeleteArgs, ListArgs};
pub use export::{handle_export, ExportArgs, ExportFormat};
pub use history::handle_history;
pub use report::{handle_summary, handle_total_command, TotalCommands};
