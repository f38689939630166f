//! Core data models for the expense ledger
//!
//! This module contains the structures that describe a ledger line
//! (record, payment, amount) and the input/outcome types for adding one.

pub mod amount;
pub mod expense;
pub mod record;

pub use amount::{Amount, AmountParseError};
pub use expense::{AddOutcome, ExpenseInput, ExpenseType, Rejection};
pub use record::{date_field, parse_date, ExpenseRecord, Payment, DATE_FORMAT, FIELD_SEPARATOR};
