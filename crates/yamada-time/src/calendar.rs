//! `Calendar` trait.
//!
//! A calendar knows which dates are business days and can adjust dates
//! according to a [`BusinessDayConvention`].

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Japan"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a business day in this calendar.
    fn is_business_day(&self, date: Date) -> bool;

    /// Return `true` if `date` is a holiday (non-business) day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Most calendars consider Saturday and Sunday as weekends.
    fn is_weekend(&self, date: Date) -> bool {
        date.weekday().is_weekend()
    }

    /// Return `true` if `date` is the last business day of its month.
    fn is_end_of_month(&self, date: Date) -> bool {
        let next = date + 1;
        date.month() != self.adjust(next, BusinessDayConvention::Following).month()
    }

    /// Return the last business day of the month containing `date`.
    fn end_of_month(&self, date: Date) -> Date {
        self.adjust(date.end_of_month(), BusinessDayConvention::Preceding)
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, mut date: Date, convention: BusinessDayConvention) -> Date {
        match convention {
            BusinessDayConvention::Unadjusted => date,
            BusinessDayConvention::Following => {
                while self.is_holiday(date) {
                    date = date + 1;
                }
                date
            }
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.adjust(date, BusinessDayConvention::Following);
                if adjusted.month() != date.month() {
                    self.adjust(date, BusinessDayConvention::Preceding)
                } else {
                    adjusted
                }
            }
            BusinessDayConvention::Preceding => {
                while self.is_holiday(date) {
                    date = date - 1;
                }
                date
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.adjust(date, BusinessDayConvention::Preceding);
                if adjusted.month() != date.month() {
                    self.adjust(date, BusinessDayConvention::Following)
                } else {
                    adjusted
                }
            }
            BusinessDayConvention::Nearest => {
                if self.is_business_day(date) {
                    return date;
                }
                let fwd = self.adjust(date, BusinessDayConvention::Following);
                let bwd = self.adjust(date, BusinessDayConvention::Preceding);
                if fwd - date <= date - bwd {
                    fwd
                } else {
                    bwd
                }
            }
            BusinessDayConvention::EndOfMonth => self.end_of_month(date),
        }
    }

    /// Advance `date` by `n` business days.
    fn advance_business_days(&self, mut date: Date, n: i64) -> Date {
        let step: i64 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.abs();
        while remaining > 0 {
            date = date + step;
            if self.is_business_day(date) {
                remaining -= 1;
            }
        }
        date
    }

    /// Count the number of business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> i64 {
        if d1 == d2 {
            return 0;
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let count = (start.serial() + 1..=end.serial())
            .filter_map(|s| Date::from_serial(s).ok())
            .filter(|&d| self.is_business_day(d))
            .count() as i64;
        sign * count
    }

    /// List the non-weekend holidays in the inclusive range `[from, to]`.
    fn holiday_list(&self, from: Date, to: Date) -> Vec<Date> {
        (from.serial()..=to.serial())
            .filter_map(|s| Date::from_serial(s).ok())
            .filter(|&d| self.is_holiday(d) && !self.is_weekend(d))
            .collect()
    }
}
