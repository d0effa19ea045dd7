//! Vernal and autumnal equinox days (春分の日 / 秋分の日).
//!
//! The official dates are proclaimed each February by the National
//! Astronomical Observatory.  The linear approximation used here reproduces
//! them for roughly 1900–2099 and drifts outside that range.

use crate::date::Date;

use super::Holiday;

const VERNAL_BASE: f64 = 20.8431;
const AUTUMNAL_BASE: f64 = 23.2488;
const DRIFT_PER_YEAR: f64 = 0.242194;
const REFERENCE_YEAR: i64 = 1980;

fn equinox_day(base: f64, year: i32) -> i64 {
    let dy = year as i64 - REFERENCE_YEAR;
    (base + DRIFT_PER_YEAR * dy as f64 - dy.div_euclid(4) as f64).floor() as i64
}

/// Day of March on which the vernal equinox falls in `year`.
pub fn vernal_equinox_day(year: i32) -> i64 {
    equinox_day(VERNAL_BASE, year)
}

/// Day of September on which the autumnal equinox falls in `year`.
pub fn autumnal_equinox_day(year: i32) -> i64 {
    equinox_day(AUTUMNAL_BASE, year)
}

/// Return 春分の日 and 秋分の日 for `year`.
///
/// A day that does not exist in its month is left out; this only happens
/// for years far outside the range of the approximation.
pub fn equinox_holidays(year: i32) -> Vec<Holiday> {
    [
        (3, vernal_equinox_day(year), "春分の日"),
        (9, autumnal_equinox_day(year), "秋分の日"),
    ]
    .into_iter()
    .filter_map(|(month, day, name)| {
        match u8::try_from(day).ok().and_then(|d| Date::from_ymd(year, month, d).ok()) {
            Some(date) => Some(Holiday::new(date, name)),
            None => {
                tracing::warn!(year, month, day, name, "equinox approximation out of range");
                None
            }
        }
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equinoxes_2024() {
        assert_eq!(vernal_equinox_day(2024), 20);
        assert_eq!(autumnal_equinox_day(2024), 22);
    }

    #[test]
    fn proclaimed_dates() {
        // (year, vernal, autumnal) as published in the official gazette.
        let known = [
            (2000, 20, 23),
            (2012, 20, 22),
            (2016, 20, 22),
            (2019, 21, 23),
            (2023, 21, 23),
            (2025, 20, 23),
            (2026, 20, 23),
        ];
        for (year, vernal, autumnal) in known {
            assert_eq!(vernal_equinox_day(year), vernal, "vernal {year}");
            assert_eq!(autumnal_equinox_day(year), autumnal, "autumnal {year}");
        }
    }

    #[test]
    fn pre_reference_years_floor_downwards() {
        // (1979 - 1980) / 4 floors to -1, not 0.
        assert_eq!(vernal_equinox_day(1979), 21);
        assert_eq!(autumnal_equinox_day(1979), 24);
    }

    #[test]
    fn absurd_years_are_skipped() {
        assert!(equinox_holidays(1_000_000).len() < 2);
        assert_eq!(equinox_holidays(2024).len(), 2);
    }
}
