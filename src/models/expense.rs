//! Input and outcome types for recording an expense
//!
//! Recording an expense takes raw text straight from whatever front end is
//! in use. Validation failures are ordinary outcomes with a user-facing
//! message, not errors.

use std::fmt;

use super::record::ExpenseRecord;

/// Kind of expense the user asked for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpenseType {
    Cash,
    Card,
}

impl ExpenseType {
    /// Parse an expense type case-insensitively
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cash" => Some(Self::Cash),
            "card" => Some(Self::Card),
            _ => None,
        }
    }
}

impl fmt::Display for ExpenseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cash => write!(f, "cash"),
            Self::Card => write!(f, "card"),
        }
    }
}

/// Raw, unvalidated input for a new expense
#[derive(Debug, Clone, Default)]
pub struct ExpenseInput {
    /// "cash" or "card", any case
    pub expense_type: String,
    /// Amount text, must parse as a number
    pub amount: String,
    pub explanation: String,
    /// Card name, only used for card expenses
    pub card_name: String,
    /// Optional `YYYY-MM-DD` date; today is used when absent or blank
    pub date: Option<String>,
}

impl ExpenseInput {
    pub fn new(
        expense_type: impl Into<String>,
        amount: impl Into<String>,
        explanation: impl Into<String>,
    ) -> Self {
        Self {
            expense_type: expense_type.into(),
            amount: amount.into(),
            explanation: explanation.into(),
            ..Default::default()
        }
    }

    /// Cash expense input
    pub fn cash(amount: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self::new("cash", amount, explanation)
    }

    /// Card expense input
    pub fn card(
        amount: impl Into<String>,
        explanation: impl Into<String>,
        card_name: impl Into<String>,
    ) -> Self {
        Self::new("card", amount, explanation).with_card(card_name)
    }

    pub fn with_card(mut self, card_name: impl Into<String>) -> Self {
        self.card_name = card_name.into();
        self
    }

    /// Backdate the expense
    pub fn on(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    /// The supplied date, treating blank text as no date
    pub fn supplied_date(&self) -> Option<&str> {
        self.date.as_deref().filter(|d| !d.trim().is_empty())
    }
}

/// Why an expense was not recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    InvalidAmount,
    InvalidDate,
    InvalidType,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAmount => write!(f, "Amount must be a number."),
            Self::InvalidDate => write!(f, "Invalid date format. Use YYYY-MM-DD."),
            Self::InvalidType => write!(f, "Invalid expense type."),
        }
    }
}

/// Result of trying to record an expense
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    Recorded(ExpenseRecord),
    Rejected(Rejection),
}

impl AddOutcome {
    pub const SUCCESS_MESSAGE: &'static str = "Expense recorded successfully.";

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Recorded(_))
    }

    /// Message suitable for showing to the user as-is
    pub fn message(&self) -> String {
        match self {
            Self::Recorded(_) => Self::SUCCESS_MESSAGE.to_string(),
            Self::Rejected(rejection) => rejection.to_string(),
        }
    }

    /// The recorded expense, if any
    pub fn record(&self) -> Option<&ExpenseRecord> {
        match self {
            Self::Recorded(record) => Some(record),
            Self::Rejected(_) => None,
        }
    }

    /// `(success, message)` pair for front ends that only show a status line
    pub fn into_pair(self) -> (bool, String) {
        (self.is_success(), self.message())
    }
}
