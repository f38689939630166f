//! Ledger store backed by a single flat text file
//!
//! The file is the only state: there is no cache, every query re-reads it.
//! Appends add one line, deletions read the whole file, filter it and replace
//! it atomically. Lines that cannot be parsed are skipped by the aggregate
//! queries and never reported.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::NaiveDate;
use chrono_tz::Tz;

use crate::audit::{AuditEntry, AuditLogger};
use crate::clock::{Clock, SystemClock, DEFAULT_TIMEZONE};
use crate::error::{LedgerError, LedgerResult};
use crate::models::{
    date_field, parse_date, AddOutcome, Amount, ExpenseInput, ExpenseRecord, ExpenseType, Payment,
    Rejection, FIELD_SEPARATOR,
};

use super::file_io::{append_line, ensure_file, read_lines, write_lines_atomic};

/// Construction-time options for a [`LedgerStore`]
#[derive(Clone)]
pub struct StoreOptions {
    /// Time zone in which "today" is evaluated
    pub timezone: Tz,
    /// Source of the current instant
    pub clock: Arc<dyn Clock>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            timezone: DEFAULT_TIMEZONE,
            clock: Arc::new(SystemClock),
        }
    }
}

impl StoreOptions {
    pub fn timezone(mut self, timezone: Tz) -> Self {
        self.timezone = timezone;
        self
    }

    pub fn clock(mut self, clock: impl Clock + 'static) -> Self {
        self.clock = Arc::new(clock);
        self
    }
}

/// Totals across the whole ledger
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LedgerSummary {
    pub cash_total: Amount,
    pub card_total: Amount,
    /// Card totals keyed by card name as written
    pub per_card: BTreeMap<String, Amount>,
    pub record_count: usize,
    /// Non-blank lines that could not be read as records
    pub malformed_count: usize,
}

impl LedgerSummary {
    pub fn grand_total(&self) -> Amount {
        self.cash_total + self.card_total
    }
}

/// Owner of the ledger file
pub struct LedgerStore {
    path: PathBuf,
    options: StoreOptions,
    audit: Option<AuditLogger>,
}

impl LedgerStore {
    /// Open the ledger at `path`, creating an empty file if none exists
    pub fn open(path: impl Into<PathBuf>, options: StoreOptions) -> LedgerResult<Self> {
        let path = path.into();
        ensure_file(&path)?;

        Ok(Self {
            path,
            options,
            audit: None,
        })
    }

    /// Record successful changes in `logger`
    pub fn with_audit(mut self, logger: AuditLogger) -> Self {
        self.audit = Some(logger);
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn timezone(&self) -> Tz {
        self.options.timezone
    }

    /// Today's date in the configured time zone
    pub fn today(&self) -> NaiveDate {
        self.options.clock.today(self.options.timezone)
    }

    /// Validate `input` and append it as one line
    ///
    /// Checks run in order: amount, then date (only when one was supplied),
    /// then expense type. Nothing is written unless all pass.
    pub fn add(&self, input: &ExpenseInput) -> LedgerResult<AddOutcome> {
        let amount = match Amount::parse(&input.amount) {
            Ok(amount) => amount,
            Err(_) => return Ok(AddOutcome::Rejected(Rejection::InvalidAmount)),
        };

        let date = match input.supplied_date() {
            Some(text) => match parse_date(text) {
                Some(date) => date,
                None => return Ok(AddOutcome::Rejected(Rejection::InvalidDate)),
            },
            None => self.today(),
        };

        let payment = match ExpenseType::parse(&input.expense_type) {
            Some(ExpenseType::Cash) => Payment::Cash,
            Some(ExpenseType::Card) => Payment::Card(input.card_name.clone()),
            None => return Ok(AddOutcome::Rejected(Rejection::InvalidType)),
        };

        let record = ExpenseRecord::new(date, amount, input.explanation.clone(), payment);
        let line = record.to_line();
        append_line(&self.path, &line)?;

        if let Some(audit) = &self.audit {
            audit.log(&AuditEntry::create(&line))?;
        }

        Ok(AddOutcome::Recorded(record))
    }

    /// Every raw line in append order, trailing newlines included
    pub fn list_all(&self) -> LedgerResult<Vec<String>> {
        read_lines(&self.path)
    }

    /// Lines dated today in the configured time zone
    pub fn list_for_today(&self) -> LedgerResult<Vec<String>> {
        let today = self.today().format(crate::models::DATE_FORMAT).to_string();
        self.list_for_date(&today)
    }

    /// Lines whose first field, trimmed, equals `date` exactly
    pub fn list_for_date(&self, date: &str) -> LedgerResult<Vec<String>> {
        let lines = self.list_all()?;
        Ok(lines
            .into_iter()
            .filter(|line| date_field(line) == date)
            .collect())
    }

    /// Remove every line equal to `line`, returning how many were removed
    ///
    /// Removing a line that is not present leaves the file untouched.
    pub fn delete(&self, line: &str) -> LedgerResult<usize> {
        let lines = self.list_all()?;
        let before = lines.len();

        let kept: Vec<String> = lines.into_iter().filter(|l| l != line).collect();
        let removed = before - kept.len();
        if removed == 0 {
            return Ok(0);
        }

        write_lines_atomic(&self.path, &kept)?;

        if let Some(audit) = &self.audit {
            audit.log(&AuditEntry::delete(line, removed))?;
        }

        Ok(removed)
    }

    /// Remove the line at 1-based `position` in [`list_all`](Self::list_all)
    ///
    /// Only that occurrence goes, identical lines elsewhere are kept.
    pub fn remove_at(&self, position: usize) -> LedgerResult<String> {
        let mut lines = self.list_all()?;
        if position == 0 || position > lines.len() {
            return Err(LedgerError::line_not_found(format!("#{}", position)));
        }

        let removed = lines.remove(position - 1);
        write_lines_atomic(&self.path, &lines)?;

        if let Some(audit) = &self.audit {
            audit.log(&AuditEntry::delete(&removed, 1))?;
        }

        Ok(removed)
    }

    /// Every line that parses as a record, in file order
    pub fn records(&self) -> LedgerResult<Vec<ExpenseRecord>> {
        let lines = self.list_all()?;
        Ok(lines
            .iter()
            .filter_map(|line| ExpenseRecord::parse_line(line))
            .collect())
    }

    /// Sum of amounts whose payment field contains `expense_type`, ignoring case
    ///
    /// Works on the raw fields rather than parsed records, so hand-edited tags
    /// such as `card` or `paypal` still count. Lines with fewer than four
    /// fields or a non-numeric amount are skipped.
    pub fn total_by_type(&self, expense_type: &str) -> LedgerResult<f64> {
        let needle = expense_type.to_lowercase();
        let total: Amount = self
            .list_all()?
            .iter()
            .filter_map(|line| {
                let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
                if fields.len() < 4 {
                    return None;
                }
                let payment = fields[fields.len() - 1].trim().to_lowercase();
                if !payment.contains(&needle) {
                    return None;
                }
                Amount::parse(fields[1]).ok()
            })
            .sum();

        Ok(total.value())
    }

    /// Sum of card amounts whose card name equals `card_name`, ignoring case
    pub fn total_by_card(&self, card_name: &str) -> LedgerResult<f64> {
        let wanted = card_name.to_lowercase();
        let total: Amount = self
            .records()?
            .into_iter()
            .filter(|r| {
                r.payment
                    .card_name()
                    .is_some_and(|name| name.to_lowercase() == wanted)
            })
            .map(|r| r.amount)
            .sum();

        Ok(total.value())
    }

    /// Cash, card and per-card totals in one pass over the file
    pub fn summary(&self) -> LedgerResult<LedgerSummary> {
        let lines = self.list_all()?;
        let mut summary = LedgerSummary::default();

        for line in &lines {
            let Some(record) = ExpenseRecord::parse_line(line) else {
                if !line.trim().is_empty() {
                    summary.malformed_count += 1;
                }
                continue;
            };

            summary.record_count += 1;
            match record.payment {
                Payment::Cash => summary.cash_total += record.amount,
                Payment::Card(name) => {
                    summary.card_total += record.amount;
                    *summary.per_card.entry(name).or_default() += record.amount;
                }
            }
        }

        Ok(summary)
    }
}
