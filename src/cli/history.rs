//! CLI command for the audit history

use crate::audit::AuditLogger;
use crate::error::LedgerResult;

/// Handle `history`
pub fn handle_history(logger: &AuditLogger, limit: usize) -> LedgerResult<()> {
    let entries = logger.read_recent(limit)?;

    if entries.is_empty() {
        println!("No changes recorded.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }

    Ok(())
}
