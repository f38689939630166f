//! expense-ledger - flat-file personal expense ledger
//!
//! Records cash and card expenses as plain text lines in a single file and
//! answers simple questions about them: what was spent today or on a given
//! date, and how much went on cash, on cards, or on one particular card.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `storage`: the ledger file and the [`LedgerStore`] that owns it
//! - `models`: records, payments, amounts and the add input/outcome types
//! - `clock`: injectable source of "now" for time-zone aware dates
//! - `config`: base directory, paths and user settings
//! - `audit`: append-only log of changes
//! - `display`, `export`, `cli`: the command-line front end
//! - `error`: custom error types
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_ledger::models::ExpenseInput;
//! use expense_ledger::storage::{LedgerStore, StoreOptions};
//!
//! let store = LedgerStore::open("expenses.txt", StoreOptions::default())?;
//! let (ok, message) = store
//!     .add(&ExpenseInput::card("25.5", "groceries", "Visa").on("2024-03-01"))?
//!     .into_pair();
//! let visa = store.total_by_card("visa")?;
//! ```

pub mod audit;
pub mod cli;
pub mod clock;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;

pub use error::{LedgerError, LedgerResult};
pub use storage::{LedgerStore, StoreOptions};
