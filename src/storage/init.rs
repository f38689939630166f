//! Storage initialization
//!
//! Builds a ready-to-use [`LedgerStore`] from paths and settings.

use std::path::PathBuf;

use crate::audit::AuditLogger;
use crate::config::{paths::LedgerPaths, settings::Settings};
use crate::error::LedgerError;

use super::ledger::{LedgerStore, StoreOptions};

/// Open the configured ledger
///
/// `file_override` takes precedence over the settings and the default path.
/// The base directory is created for the default ledger and the audit log;
/// an explicitly chosen ledger file must live in an existing directory.
pub fn open_ledger(
    paths: &LedgerPaths,
    settings: &Settings,
    file_override: Option<PathBuf>,
) -> Result<LedgerStore, LedgerError> {
    paths.ensure_directories()?;

    let ledger_path = file_override.unwrap_or_else(|| settings.ledger_path(paths));
    let options = StoreOptions::default().timezone(settings.timezone()?);
    let store = LedgerStore::open(ledger_path, options)?;

    if settings.audit_enabled {
        Ok(store.with_audit(AuditLogger::new(paths.audit_log())))
    } else {
        Ok(store)
    }
}
