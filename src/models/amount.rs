//! Amount type for expense values
//!
//! Ledger files store amounts in the natural decimal form of a double
//! (`12.5`, `100.0`, `1e+16`), so the amount is kept as an `f64` rather than
//! in fixed-point cents. Formatting always round-trips through `parse`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A signed expense amount as written in the ledger file
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Parse an amount from user input or a ledger field
    ///
    /// Surrounding whitespace is ignored. Anything that is not a finite real
    /// number (including `inf` and `nan`) is rejected.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let trimmed = s.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| AmountParseError::NotANumber(s.to_string()))?;

        if !value.is_finite() {
            return Err(AmountParseError::NotFinite(s.to_string()));
        }

        Ok(Self(value))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = self.0;
        let magnitude = value.abs();

        if value == 0.0 || (1e-4..1e16).contains(&magnitude) {
            // Debug keeps a trailing ".0" on whole numbers
            return write!(f, "{:?}", value);
        }

        // Scientific form with a signed, two-digit exponent: 1e+16, 1.5e-07
        let formatted = format!("{:e}", value);
        match formatted.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().map_err(|_| fmt::Error)?;
                let sign = if exponent < 0 { '-' } else { '+' };
                write!(f, "{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            None => write!(f, "{}", formatted),
        }
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, x| acc + x)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    NotANumber(String),
    NotFinite(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::NotANumber(s) => write!(f, "Not a number: {}", s),
            AmountParseError::NotFinite(s) => write!(f, "Not a finite amount: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
