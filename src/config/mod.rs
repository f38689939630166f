//! Configuration module for the expense ledger
//!
//! This module provides configuration management including:
//! - Base directory and file path resolution
//! - User settings persistence (time zone, ledger file, auditing)

pub mod paths;
pub mod settings;

pub use paths::LedgerPaths;
pub use settings::Settings;
