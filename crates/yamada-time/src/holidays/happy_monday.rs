//! ハッピーマンデー: holidays observed on the n-th Monday of a month.

use yamada_core::errors::{Error, Result};

use crate::date::{days_in_month, Date};

use super::Holiday;

/// (month, occurrence, name) for every Happy Monday holiday.
pub const HAPPY_MONDAYS: [(u8, u8, &str); 4] = [
    (1, 2, "成人の日"),
    (7, 3, "海の日"),
    (9, 3, "敬老の日"),
    (10, 2, "スポーツの日"),
];

/// Return the `occurrence`-th Monday of `month` in `year`.
///
/// The first Monday falls on day `1 + (8 - w) mod 7`, where `w` is the
/// weekday of the 1st counted from Sunday = 0.
///
/// # Errors
/// Returns [`Error::Date`] if `occurrence` is zero or points past the end of
/// the month, or if `month` is not in 1–12.
pub fn nth_monday(year: i32, month: u8, occurrence: u8) -> Result<Date> {
    if occurrence == 0 {
        return Err(Error::Date("nth_monday: occurrence must be >= 1".into()));
    }
    let first = Date::from_ymd(year, month, 1)?;
    let w = first.weekday().num_days_from_sunday() as u32;
    let first_monday = 1 + (8 - w) % 7;
    let day = first_monday + (occurrence as u32 - 1) * 7;
    if day > days_in_month(year, month) as u32 {
        return Err(Error::Date(format!(
            "nth_monday: there is no Monday #{occurrence} in {year:04}-{month:02}"
        )));
    }
    Date::from_ymd(year, month, day as u8)
}

/// Return the four Happy Monday holidays of `year`.
pub fn happy_monday_holidays(year: i32) -> Vec<Holiday> {
    HAPPY_MONDAYS
        .iter()
        .filter_map(|&(month, occurrence, name)| match nth_monday(year, month, occurrence) {
            Ok(date) => Some(Holiday::new(date, name)),
            Err(e) => {
                tracing::warn!(year, month, occurrence, error = %e, "skipping Happy Monday holiday");
                None
            }
        })
        .collect()
}
