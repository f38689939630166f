//! Expense record model and the ledger line format
//!
//! One record per line:
//!
//! ```text
//! <date> - <amount> - <explanation> - <payment>
//! ```
//!
//! where `<payment>` is either `cash` or `card: <card name>`. Parsing is
//! best-effort: a line that cannot be read as a record yields `None` and is
//! left for the caller to skip.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;

/// Separator between the fields of a ledger line
pub const FIELD_SEPARATOR: &str = " - ";

/// Date format used in the first field of every line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const CARD_PREFIX: &str = "card:";

/// How an expense was paid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "card", rename_all = "lowercase")]
pub enum Payment {
    Cash,
    Card(String),
}

impl Payment {
    /// Parse the payment field of a ledger line
    pub fn parse(field: &str) -> Option<Self> {
        let field = field.trim();

        if field.eq_ignore_ascii_case("cash") {
            return Some(Self::Cash);
        }

        let prefix = field.get(..CARD_PREFIX.len())?;
        if !prefix.eq_ignore_ascii_case(CARD_PREFIX) {
            return None;
        }

        let rest = &field[CARD_PREFIX.len()..];
        let name = rest.strip_prefix(' ').unwrap_or(rest);
        Some(Self::Card(name.to_string()))
    }

    /// Card name, if this is a card payment
    pub fn card_name(&self) -> Option<&str> {
        match self {
            Self::Cash => None,
            Self::Card(name) => Some(name),
        }
    }

    pub fn is_cash(&self) -> bool {
        matches!(self, Self::Cash)
    }
}

impl fmt::Display for Payment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "cash"),
            Self::Card(name) => write!(f, "card: {}", name),
        }
    }
}

/// A single expense as stored on one ledger line
///
/// The date is kept as written. Hand-edited files may carry dates that are
/// not valid calendar dates, and those lines still count towards totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    pub date: String,
    pub amount: Amount,
    pub explanation: String,
    pub payment: Payment,
}

impl ExpenseRecord {
    /// Create a record for a validated date
    pub fn new(
        date: NaiveDate,
        amount: Amount,
        explanation: impl Into<String>,
        payment: Payment,
    ) -> Self {
        Self {
            date: date.format(DATE_FORMAT).to_string(),
            amount,
            explanation: explanation.into(),
            payment,
        }
    }

    /// Parse a raw ledger line
    ///
    /// Lines with fewer than four fields, a non-numeric amount, or an unknown
    /// payment tag are rejected. When an explanation contains the separator,
    /// the middle fields are joined back together.
    pub fn parse_line(line: &str) -> Option<Self> {
        let fields: Vec<&str> = line.trim().split(FIELD_SEPARATOR).collect();
        if fields.len() < 4 {
            return None;
        }

        let last = fields.len() - 1;
        let amount = Amount::parse(fields[1]).ok()?;
        let payment = Payment::parse(fields[last])?;

        Some(Self {
            date: fields[0].trim().to_string(),
            amount,
            explanation: fields[2..last].join(FIELD_SEPARATOR),
            payment,
        })
    }

    /// Serialize to a newline-terminated ledger line
    pub fn to_line(&self) -> String {
        format!("{}\n", self)
    }

    /// The date as a calendar date, if it is one
    pub fn date_value(&self) -> Option<NaiveDate> {
        parse_date(&self.date)
    }
}

impl fmt::Display for ExpenseRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{date}{sep}{amount}{sep}{explanation}{sep}{payment}",
            date = self.date,
            amount = self.amount,
            explanation = self.explanation,
            payment = self.payment,
            sep = FIELD_SEPARATOR,
        )
    }
}

/// First field of a raw line, trimmed
pub fn date_field(line: &str) -> &str {
    line.split(FIELD_SEPARATOR).next().unwrap_or("").trim()
}

/// Parse a strict `YYYY-MM-DD` calendar date
///
/// Unlike a bare `%Y-%m-%d` parse this refuses unpadded months and days, so
/// only dates that compare equal to the first field of a line are accepted.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let bytes = s.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return None;
    }

    let digits_ok = bytes
        .iter()
        .enumerate()
        .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());
    if !digits_ok {
        return None;
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_card_record_line() {
        let record = ExpenseRecord::new(
            date(2024, 3, 1),
            Amount::new(25.5),
            "groceries",
            Payment::Card("Visa".into()),
        );
        assert_eq!(record.to_line(), "2024-03-01 - 25.5 - groceries - card: Visa\n");
    }

    #[test]
    fn test_cash_record_line() {
        let record = ExpenseRecord::new(date(2024, 1, 9), Amount::new(100.0), "rent", Payment::Cash);
        assert_eq!(record.to_line(), "2024-01-09 - 100.0 - rent - cash\n");
    }

    #[test]
    fn test_empty_card_name() {
        let record = ExpenseRecord::new(
            date(2024, 1, 9),
            Amount::new(5.0),
            "coffee",
            Payment::Card(String::new()),
        );
        assert_eq!(record.to_line(), "2024-01-09 - 5.0 - coffee - card: \n");
        assert_eq!(ExpenseRecord::parse_line(&record.to_line()), Some(record));
    }

    #[test]
    fn test_parse_line() {
        let record = ExpenseRecord::parse_line("2024-03-01 - 25.5 - groceries - card: Visa\n").unwrap();
        assert_eq!(record.date, "2024-03-01");
        assert_eq!(record.amount.value(), 25.5);
        assert_eq!(record.explanation, "groceries");
        assert_eq!(record.payment, Payment::Card("Visa".into()));
        assert_eq!(record.date_value(), Some(date(2024, 3, 1)));
    }

    #[test]
    fn test_parse_line_rejects_malformed() {
        assert!(ExpenseRecord::parse_line("").is_none());
        assert!(ExpenseRecord::parse_line("2024-03-01 - 25.5 - groceries\n").is_none());
        assert!(ExpenseRecord::parse_line("2024-03-01 - abc - groceries - cash\n").is_none());
        assert!(ExpenseRecord::parse_line("2024-03-01 - 3 - groceries - paypal\n").is_none());
    }

    #[test]
    fn test_parse_line_joins_extra_fields() {
        let record = ExpenseRecord::parse_line("2024-03-01 - 9 - bus - return trip - cash\n").unwrap();
        assert_eq!(record.explanation, "bus - return trip");
        assert_eq!(record.payment, Payment::Cash);
    }

    #[test]
    fn test_parse_line_keeps_invalid_date_text() {
        let record = ExpenseRecord::parse_line("someday - 4 - tea - cash").unwrap();
        assert_eq!(record.date, "someday");
        assert!(record.date_value().is_none());
    }

    #[test]
    fn test_payment_parse() {
        assert_eq!(Payment::parse("cash"), Some(Payment::Cash));
        assert_eq!(Payment::parse(" CASH "), Some(Payment::Cash));
        assert_eq!(Payment::parse("card: Visa Gold"), Some(Payment::Card("Visa Gold".into())));
        assert_eq!(Payment::parse("card:"), Some(Payment::Card(String::new())));
        assert_eq!(Payment::parse("cheque"), None);
        assert_eq!(Payment::parse("çard"), None);
    }

    #[test]
    fn test_date_field() {
        assert_eq!(date_field("2024-03-01 - 1 - x - cash\n"), "2024-03-01");
        assert_eq!(date_field(" 2024-03-01 - 1"), "2024-03-01");
        assert_eq!(date_field("\n"), "");
    }

    #[test]
    fn test_parse_date_strict() {
        assert_eq!(parse_date("2024-02-29"), Some(date(2024, 2, 29)));
        assert!(parse_date("2023-02-29").is_none());
        assert!(parse_date("2024-13-40").is_none());
        assert!(parse_date("2024-3-1").is_none());
        assert!(parse_date("01-03-2024").is_none());
        assert!(parse_date("2024/03/01").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_payment_serialization() {
        let json = serde_json::to_string(&Payment::Card("Visa".into())).unwrap();
        assert_eq!(json, r#"{"type":"card","card":"Visa"}"#);
        let json = serde_json::to_string(&Payment::Cash).unwrap();
        assert_eq!(json, r#"{"type":"cash"}"#);
    }
}
