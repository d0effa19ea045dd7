//! `Date` type.
//!
//! Dates are proleptic Gregorian calendar days stored as a serial number of
//! days since the Unix epoch.
//!
//! # Serial number convention
//! * Serial 0 = 1970-01-01 (a Thursday).
//! * Negative serials are dates before the epoch.
//! * Every year representable as an `i32` is a valid year, so holiday tables
//!   can be computed for any year a caller asks for.

use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use yamada_core::errors::{Error, Result};

use crate::month::Month;
use crate::weekday::Weekday;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(i64);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// The Unix epoch, 1970-01-01.
    pub const EPOCH: Date = Date(0);

    /// Minimum valid date: January 1 of year `i32::MIN`.
    pub const MIN: Date = Date(serial_from_ymd(i32::MIN as i64, 1, 1));

    /// Maximum valid date: December 31 of year `i32::MAX`.
    pub const MAX: Date = Date(serial_from_ymd(i32::MAX as i64, 12, 31));

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial lies outside [`Date::MIN`, `Date::MAX`].
    pub fn from_serial(serial: i64) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year as i64, month as i64, day as i64)))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i64 {
        self.0
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        Month::from_number(self.month()).expect("ymd_from_serial yields months in 1..=12")
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return (year, month, day) in one conversion.
    pub fn ymd(&self) -> (i32, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let (y, m, d) = ymd_from_serial(self.0);
        let mut doy = d as u16;
        for mon in 1..m {
            doy += days_in_month(y, mon) as u16;
        }
        doy
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // serial 0 (1970-01-01) is a Thursday, ordinal 4.
        let w = ((self.0 + 3).rem_euclid(7) + 1) as u8;
        Weekday::from_ordinal(w).expect("rem_euclid always in 1..=7")
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i64) -> Result<Self> {
        let serial = self
            .0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("date arithmetic: {self} + {n} overflows")))?;
        Self::from_serial(serial)
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i64 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        let last = days_in_month(y, m);
        Date(serial_from_ymd(y as i64, m as i64, last as i64))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(3, Weekday::Wednesday, 2024, 3)` returns the
    /// third Wednesday of March 2024 (2024-03-20).
    ///
    /// # Errors
    /// Returns an error if `n` is zero or larger than the number of such
    /// weekdays in the month.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: i32, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::Date("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?;
        let first_wd = first.weekday().ordinal();
        let target_wd = weekday.ordinal();
        let skip = (target_wd as i32 - first_wd as i32).rem_euclid(7) as u32;
        let day = 1 + skip + 7 * (n as u32 - 1);
        if day > days_in_month(year, month) as u32 {
            return Err(Error::Date(format!(
                "nth_weekday: {n}-th {weekday:?} does not exist in {year:04}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i64> for Date {
    type Output = Self;
    fn add(self, rhs: i64) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i64> for Date {
    type Output = Self;
    fn sub(self, rhs: i64) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i64;
    fn sub(self, rhs: Date) -> i64 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i64> for Date {
    fn add_assign(&mut self, rhs: i64) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

impl std::ops::SubAssign<i64> for Date {
    fn sub_assign(&mut self, rhs: i64) {
        *self = self.add_days(-rhs).expect("date subtraction underflow");
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

/// ISO-8601 calendar date, e.g. `2024-01-08`.
impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({self})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse `YYYY-MM-DD`.  A leading `-` marks a year before 1 BCE.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || Error::parse(s, "ISO date (YYYY-MM-DD)");
        let mut parts = s.trim().rsplitn(3, '-');
        let day = parts.next().ok_or_else(invalid)?;
        let month = parts.next().ok_or_else(invalid)?;
        let year = parts.next().ok_or_else(invalid)?;
        let digits = |f: &str| f.bytes().all(|b| b.is_ascii_digit());
        let year_digits = year.strip_prefix('-').unwrap_or(year);
        if day.len() != 2
            || month.len() != 2
            || year_digits.len() < 4
            || !digits(day)
            || !digits(month)
            || !digits(year_digits)
        {
            return Err(invalid());
        }
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u8 = month.parse().map_err(|_| invalid())?;
        let day: u8 = day.parse().map_err(|_| invalid())?;
        Date::from_ymd(year, month, day)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

#[cfg(feature = "chrono")]
impl From<chrono::NaiveDate> for Date {
    fn from(d: chrono::NaiveDate) -> Self {
        use chrono::Datelike;
        Date(serial_from_ymd(d.year() as i64, d.month() as i64, d.day() as i64))
    }
}

#[cfg(feature = "chrono")]
impl Date {
    /// Today's date in the local time zone of the host.
    pub fn today_local() -> Self {
        chrono::Local::now().date_naive().into()
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial number.
///
/// Counts in 400-year eras starting on March 1 so that the leap day is the
/// last day of each shifted year.
const fn serial_from_ymd(year: i64, month: i64, day: i64) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y.rem_euclid(400);
    let mp = (month + 9) % 12;
    let doy = (153 * mp + 2) / 5 + day - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i64) -> (i32, u8, u8) {
    let z = serial + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = doy - (153 * mp + 2) / 5 + 1;
    let m = if mp < 10 { mp + 3 } else { mp - 9 };
    let y = yoe + era * 400 + if m <= 2 { 1 } else { 0 };
    (y as i32, m as u8, d as u8)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
