//! User settings for the expense ledger
//!
//! Stored as JSON in `config.json` under the base directory. Every field has
//! a default so older or hand-written files keep loading.

use std::path::PathBuf;

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::clock::DEFAULT_TIMEZONE;
use crate::error::LedgerError;

/// User settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// IANA time zone used to decide what "today" is
    #[serde(default = "default_timezone")]
    pub timezone: String,

    /// Ledger file to use instead of `expenses.txt` in the base directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_file: Option<PathBuf>,

    /// Whether changes are written to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,

    /// Symbol shown next to totals; never written to the ledger
    #[serde(default)]
    pub currency_symbol: String,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.name().to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            ledger_file: None,
            audit_enabled: default_audit_enabled(),
            currency_symbol: String::new(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> Result<Self, LedgerError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> Result<(), LedgerError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }

    /// The configured time zone
    pub fn timezone(&self) -> Result<Tz, LedgerError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|e| LedgerError::Config(format!("Unknown time zone '{}': {}", self.timezone, e)))
    }

    /// Ledger file path, honouring the `ledger_file` override
    pub fn ledger_path(&self, paths: &LedgerPaths) -> PathBuf {
        self.ledger_file
            .clone()
            .unwrap_or_else(|| paths.ledger_file())
    }
}
