//! The full holiday list of a year.

use super::equinox::equinox_holidays;
use super::fixed::fixed_holidays;
use super::happy_monday::happy_monday_holidays;
use super::rules::HolidayRules;
use super::substitute::substitute_holidays;
use super::Holiday;

/// Return the national holidays of `year` under the default rules, sorted
/// by date.
///
/// ```
/// use yamada_time::holidays::japanese_holidays;
///
/// let list = japanese_holidays(2024);
/// assert_eq!(list[0].to_string(), "2024-01-01 元日");
/// assert_eq!(list.len(), 21);
/// ```
pub fn japanese_holidays(year: i32) -> Vec<Holiday> {
    japanese_holidays_with(year, &HolidayRules::default())
}

/// Return the national holidays of `year` under `rules`, sorted by date.
///
/// The list is the fixed-date holidays, the Happy Monday holidays, the two
/// equinox days, and the substitute holidays derived from them.  Entries on
/// the same date keep that order.
pub fn japanese_holidays_with(year: i32, rules: &HolidayRules) -> Vec<Holiday> {
    let mut holidays = fixed_holidays(year, rules.gating);
    holidays.extend(happy_monday_holidays(year));
    holidays.extend(equinox_holidays(year));

    let substitutes = substitute_holidays(&holidays, rules.substitute);
    holidays.extend(substitutes);
    holidays.sort_by_key(Holiday::date);

    tracing::trace!(year, count = holidays.len(), ?rules, "computed holiday list");
    holidays
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::Date;
    use crate::holidays::rules::{HistoricalGating, SubstituteRule};
    use crate::holidays::SUBSTITUTE_HOLIDAY;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn substitutes(list: &[Holiday]) -> Vec<Date> {
        list.iter()
            .filter(|h| h.is_substitute())
            .map(Holiday::date)
            .collect()
    }

    #[test]
    fn full_list_2024() {
        let list = japanese_holidays(2024);
        let expected = [
            ("2024-01-01", "元日"),
            ("2024-01-08", "成人の日"),
            ("2024-02-11", "建国記念の日"),
            ("2024-02-12", SUBSTITUTE_HOLIDAY),
            ("2024-02-23", "天皇誕生日"),
            ("2024-03-20", "春分の日"),
            ("2024-04-29", "昭和の日"),
            ("2024-05-03", "憲法記念日"),
            ("2024-05-04", "みどりの日"),
            ("2024-05-05", "こどもの日"),
            ("2024-05-06", SUBSTITUTE_HOLIDAY),
            ("2024-07-15", "海の日"),
            ("2024-08-11", "山の日"),
            ("2024-08-12", SUBSTITUTE_HOLIDAY),
            ("2024-09-16", "敬老の日"),
            ("2024-09-22", "秋分の日"),
            ("2024-09-23", SUBSTITUTE_HOLIDAY),
            ("2024-10-14", "スポーツの日"),
            ("2024-11-03", "文化の日"),
            ("2024-11-04", SUBSTITUTE_HOLIDAY),
            ("2024-11-23", "勤労感謝の日"),
        ];
        let actual: Vec<(String, &str)> =
            list.iter().map(|h| (h.date().to_string(), h.name())).collect();
        let expected: Vec<(String, &str)> =
            expected.iter().map(|&(d, n)| (d.to_string(), n)).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn golden_week_2025_depends_on_rule() {
        let simplified = japanese_holidays(2025);
        assert_eq!(
            substitutes(&simplified),
            vec![date(2025, 2, 24), date(2025, 11, 24)]
        );

        let cascade = HolidayRules {
            substitute: SubstituteRule::Cascade,
            ..HolidayRules::default()
        };
        let statutory = japanese_holidays_with(2025, &cascade);
        assert_eq!(
            substitutes(&statutory),
            vec![date(2025, 2, 24), date(2025, 5, 6), date(2025, 11, 24)]
        );
        assert_eq!(statutory.len(), simplified.len() + 1);
    }

    #[test]
    fn gating_only_changes_pre_enactment_years() {
        let gated = HolidayRules {
            gating: HistoricalGating::EffectiveFrom,
            ..HolidayRules::default()
        };
        assert_eq!(japanese_holidays_with(2024, &gated), japanese_holidays(2024));

        let list = japanese_holidays_with(2010, &gated);
        assert!(list.iter().all(|h| h.name() != "山の日" && h.name() != "天皇誕生日"));
    }
}
