//! # yamada-time
//!
//! Date, weekday, month, and calendar types, and the Japanese national
//! holiday calculator behind the 祝日確認 tool.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait.
pub mod calendar;

/// Concrete calendar implementations.
pub mod calendars;

/// `Date` type.
pub mod date;

/// Japanese national holidays.
pub mod holidays;

/// Month of the year.
pub mod month;

/// Day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::Calendar;
pub use calendars::JapanCalendar;
pub use date::Date;
pub use holidays::{japanese_holidays, japanese_holidays_with, Holiday, HolidayRules};
pub use month::Month;
pub use weekday::Weekday;
