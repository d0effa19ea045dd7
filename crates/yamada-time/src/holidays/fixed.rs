//! Holidays on a fixed calendar date.

use crate::date::Date;

use super::rules::HistoricalGating;
use super::Holiday;

/// One row of the fixed-date table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedHoliday {
    /// Month (1–12).
    pub month: u8,
    /// Day of month.
    pub day: u8,
    /// Japanese name.
    pub name: &'static str,
    /// First year the holiday exists on this date, if it was enacted later
    /// than the rest of the table.
    pub effective_from: Option<i32>,
}

impl FixedHoliday {
    const fn new(month: u8, day: u8, name: &'static str) -> Self {
        FixedHoliday {
            month,
            day,
            name,
            effective_from: None,
        }
    }

    const fn since(self, year: i32) -> Self {
        FixedHoliday {
            effective_from: Some(year),
            ..self
        }
    }

    /// Whether this row applies to `year` under `gating`.
    pub fn applies_to(&self, year: i32, gating: HistoricalGating) -> bool {
        match (gating, self.effective_from) {
            (HistoricalGating::EffectiveFrom, Some(from)) => year >= from,
            _ => true,
        }
    }
}

/// The ten fixed-date national holidays, in calendar order.
pub const FIXED_HOLIDAYS: [FixedHoliday; 10] = [
    FixedHoliday::new(1, 1, "元日"),
    FixedHoliday::new(2, 11, "建国記念の日"),
    FixedHoliday::new(2, 23, "天皇誕生日").since(2020),
    FixedHoliday::new(4, 29, "昭和の日"),
    FixedHoliday::new(5, 3, "憲法記念日"),
    FixedHoliday::new(5, 4, "みどりの日"),
    FixedHoliday::new(5, 5, "こどもの日"),
    FixedHoliday::new(8, 11, "山の日").since(2016),
    FixedHoliday::new(11, 3, "文化の日"),
    FixedHoliday::new(11, 23, "勤労感謝の日"),
];

/// Return the fixed-date holidays of `year`.
pub fn fixed_holidays(year: i32, gating: HistoricalGating) -> Vec<Holiday> {
    FIXED_HOLIDAYS
        .iter()
        .filter(|f| f.applies_to(year, gating))
        .filter_map(|f| {
            Date::from_ymd(year, f.month, f.day)
                .ok()
                .map(|date| Holiday::new(date, f.name))
        })
        .collect()
}
