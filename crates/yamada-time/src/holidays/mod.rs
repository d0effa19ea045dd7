//! Japanese national holidays (国民の祝日).
//!
//! The holiday list of a year is assembled from four sources:
//!
//! * [`fixed`]: ten holidays on a fixed month/day.
//! * [`happy_monday`]: four holidays on the n-th Monday of a month.
//! * [`equinox`]: 春分の日 and 秋分の日 from a linear approximation of the
//!   equinoxes.
//! * [`substitute`]: 振替休日 for holidays that fall on a Sunday.
//!
//! [`aggregate`] merges and sorts them; [`query`] answers the questions the
//! holiday checker asks of a list (next holiday, grouping by month, …).
//! How substitutes cascade and whether late-enacted holidays are applied
//! retroactively is controlled by [`HolidayRules`].

use serde::{Deserialize, Serialize};

use crate::date::Date;

pub mod aggregate;
pub mod equinox;
pub mod fixed;
pub mod happy_monday;
pub mod query;
pub mod rules;
pub mod substitute;

pub use aggregate::{japanese_holidays, japanese_holidays_with};
pub use equinox::{autumnal_equinox_day, vernal_equinox_day};
pub use happy_monday::nth_monday;
pub use query::{days_until, group_by_month, holiday_on, next_holiday, status, HolidayStatus};
pub use rules::{HistoricalGating, HolidayRules, SubstituteRule};
pub use substitute::substitute_holidays;

/// Name given to every substitute holiday.
pub const SUBSTITUTE_HOLIDAY: &str = "振替休日";

/// A single holiday: a date and its Japanese name.
///
/// Serializes as `{"date": "YYYY-MM-DD", "name": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    date: Date,
    name: String,
}

impl Holiday {
    /// Create a holiday record.
    pub fn new(date: Date, name: impl Into<String>) -> Self {
        Holiday {
            date,
            name: name.into(),
        }
    }

    /// The date of the holiday.
    pub fn date(&self) -> Date {
        self.date
    }

    /// The Japanese name of the holiday.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether this is a 振替休日.
    pub fn is_substitute(&self) -> bool {
        self.name == SUBSTITUTE_HOLIDAY
    }
}

impl std::fmt::Display for Holiday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.date, self.name)
    }
}
