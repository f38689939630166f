//! Source of "now" for the ledger
//!
//! "Today" is always computed in an explicit time zone from an injected
//! clock, so tests can pin the date.

use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Default time zone used for "today" when none is configured
pub const DEFAULT_TIMEZONE: Tz = chrono_tz::Europe::Istanbul;

/// Provides the current instant
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Calendar date of the current instant in `tz`
    fn today(&self, tz: Tz) -> NaiveDate {
        self.now().with_timezone(&tz).date_naive()
    }
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock frozen at a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
