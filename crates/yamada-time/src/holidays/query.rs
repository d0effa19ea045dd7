//! Questions asked of a holiday list relative to "today".

use std::collections::BTreeMap;

use crate::date::Date;
use crate::month::Month;

use super::aggregate::japanese_holidays_with;
use super::rules::HolidayRules;
use super::Holiday;

/// Where a holiday lies relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HolidayStatus {
    /// Already over.
    Past,
    /// Today.
    Today,
    /// Still to come.
    Upcoming,
}

/// Classify `holiday` relative to `today`.
pub fn status(today: Date, holiday: &Holiday) -> HolidayStatus {
    match holiday.date().cmp(&today) {
        std::cmp::Ordering::Less => HolidayStatus::Past,
        std::cmp::Ordering::Equal => HolidayStatus::Today,
        std::cmp::Ordering::Greater => HolidayStatus::Upcoming,
    }
}

/// Return the first holiday on or after `today`.
///
/// Searches the lists of today's year and the following year, so a holiday
/// is always found unless `today` is in the last representable year.
pub fn next_holiday(today: Date, rules: &HolidayRules) -> Option<Holiday> {
    let year = today.year();
    let mut candidates = japanese_holidays_with(year, rules);
    if let Some(next_year) = year.checked_add(1) {
        candidates.extend(japanese_holidays_with(next_year, rules));
    }
    candidates.into_iter().find(|h| h.date() >= today)
}

/// Calendar days from `today` to `holiday` (0 if it is today, negative if
/// it is past).
pub fn days_until(today: Date, holiday: &Holiday) -> i64 {
    today.days_between(holiday.date())
}

/// Return the holiday falling on `date`, if any.
pub fn holiday_on(date: Date, rules: &HolidayRules) -> Option<Holiday> {
    japanese_holidays_with(date.year(), rules)
        .into_iter()
        .find(|h| h.date() == date)
}

/// Group a holiday list by month, keeping the order within each month.
/// Months without holidays are absent.
pub fn group_by_month(holidays: &[Holiday]) -> BTreeMap<Month, Vec<Holiday>> {
    let mut grouped: BTreeMap<Month, Vec<Holiday>> = BTreeMap::new();
    for h in holidays {
        grouped
            .entry(h.date().month_of_year())
            .or_default()
            .push(h.clone());
    }
    grouped
}

/// `8日 (月)`: day of month and weekday, as shown in the holiday list.
pub fn format_day_jp(date: Date) -> String {
    format!(
        "{}日 ({})",
        date.day_of_month(),
        date.weekday().japanese_short_name()
    )
}

/// `2024/01/08`.
pub fn format_slash(date: Date) -> String {
    let (y, m, d) = date.ymd();
    format!("{y:04}/{m:02}/{d:02}")
}

/// `01/08`.
pub fn format_month_day(date: Date) -> String {
    format!("{:02}/{:02}", date.month(), date.day_of_month())
}
