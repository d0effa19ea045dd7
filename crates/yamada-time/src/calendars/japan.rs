//! Japan calendar.

use crate::calendar::Calendar;
use crate::date::Date;
use crate::holidays::{holiday_on, HolidayRules};

/// Japan calendar.
///
/// Saturdays, Sundays, and every date in the national holiday list of its
/// year are non-business days:
/// * 元日 (Jan 1)
/// * 成人の日 (2nd Monday in January)
/// * 建国記念の日 (Feb 11)
/// * 天皇誕生日 (Feb 23)
/// * 春分の日 (approx Mar 20–21)
/// * 昭和の日 (Apr 29)
/// * 憲法記念日, みどりの日, こどもの日 (May 3–5)
/// * 海の日 (3rd Monday in July)
/// * 山の日 (Aug 11)
/// * 敬老の日 (3rd Monday in September)
/// * 秋分の日 (approx Sep 22–23)
/// * スポーツの日 (2nd Monday in October)
/// * 文化の日 (Nov 3)
/// * 勤労感謝の日 (Nov 23)
/// * 振替休日, placed according to [`HolidayRules::substitute`]
#[derive(Debug, Clone, Copy, Default)]
pub struct JapanCalendar {
    rules: HolidayRules,
}

impl JapanCalendar {
    /// A Japan calendar computing holidays under `rules`.
    pub fn new(rules: HolidayRules) -> Self {
        JapanCalendar { rules }
    }

    /// The rules this calendar applies.
    pub fn rules(&self) -> &HolidayRules {
        &self.rules
    }

    /// Return the name of the national holiday on `date`, if any.
    pub fn holiday_name(&self, date: Date) -> Option<String> {
        holiday_on(date, &self.rules).map(|h| h.name().to_owned())
    }
}

impl Calendar for JapanCalendar {
    fn name(&self) -> &str {
        "Japan"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !self.is_weekend(date) && holiday_on(date, &self.rules).is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn new_years_day_2025() {
        let cal = JapanCalendar::default();
        assert!(cal.is_holiday(date(2025, 1, 1)));
        // Jan 2 and 3 are bank holidays, not national holidays.
        assert!(cal.is_business_day(date(2025, 1, 2)));
    }

    #[test]
    fn coming_of_age_2023() {
        // 2nd Monday in January 2023 = Jan 9
        let cal = JapanCalendar::default();
        assert!(!cal.is_business_day(date(2023, 1, 9)));
        assert_eq!(cal.holiday_name(date(2023, 1, 9)).as_deref(), Some("成人の日"));
    }

    #[test]
    fn substitute_holiday_2024() {
        let cal = JapanCalendar::default();
        assert!(!cal.is_business_day(date(2024, 5, 6)));
        assert_eq!(cal.holiday_name(date(2024, 5, 6)).as_deref(), Some("振替休日"));
    }

    #[test]
    fn weekend_is_not_a_named_holiday() {
        let cal = JapanCalendar::default();
        // 2023-06-17 is a Saturday
        assert!(cal.is_holiday(date(2023, 6, 17)));
        assert_eq!(cal.holiday_name(date(2023, 6, 17)), None);
    }

    #[test]
    fn normal_business_day() {
        let cal = JapanCalendar::default();
        // 2023-06-15 is a Thursday
        assert!(cal.is_business_day(date(2023, 6, 15)));
    }
}
