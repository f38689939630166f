//! Audit entry data structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Types of ledger changes that are audited
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    /// A line was appended
    Create,
    /// One or more identical lines were removed
    Delete,
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Operation::Create => write!(f, "CREATE"),
            Operation::Delete => write!(f, "DELETE"),
        }
    }
}

/// A single audit log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// When the change happened (UTC)
    pub timestamp: DateTime<Utc>,

    pub operation: Operation,

    /// Ledger line affected, without its trailing newline
    pub line: String,

    /// How many copies of the line were affected
    #[serde(default = "default_count")]
    pub count: usize,
}

fn default_count() -> usize {
    1
}

impl AuditEntry {
    /// Entry for an appended line
    pub fn create(line: &str) -> Self {
        Self::new(Operation::Create, line, 1)
    }

    /// Entry for `count` removed copies of a line
    pub fn delete(line: &str, count: usize) -> Self {
        Self::new(Operation::Delete, line, count)
    }

    fn new(operation: Operation, line: &str, count: usize) -> Self {
        Self {
            timestamp: Utc::now(),
            operation,
            line: line.trim_end_matches(['\r', '\n']).to_string(),
            count,
        }
    }

    /// Format the entry for human-readable output
    pub fn format_human_readable(&self) -> String {
        let mut output = format!(
            "[{}] {} {}",
            self.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
            self.operation,
            self.line
        );

        if self.count > 1 {
            output.push_str(&format!(" (x{})", self.count));
        }

        output
    }
}
