//! Text and JSON renderings of holiday lists.
//!
//! The text layout mirrors the holiday checker page: one section per month,
//! one row per holiday (`01/08  8日 (月)  成人の日`), past rows marked, and a
//! total at the bottom.

use serde::Serialize;
use yamada_time::holidays::query::{format_day_jp, format_month_day, format_slash};
use yamada_time::holidays::{days_until, group_by_month, status, Holiday, HolidayStatus};
use yamada_time::{Calendar, Date, JapanCalendar};

/// Marker column for a row.
fn marker(today: Date, holiday: &Holiday) -> &'static str {
    match status(today, holiday) {
        HolidayStatus::Past => "-",
        HolidayStatus::Today => "*",
        HolidayStatus::Upcoming => " ",
    }
}

fn row(today: Date, holiday: &Holiday) -> String {
    let mut line = format!(
        "{} {}  {}  {}",
        marker(today, holiday),
        format_month_day(holiday.date()),
        format_day_jp(holiday.date()),
        holiday.name()
    );
    if status(today, holiday) == HolidayStatus::Today {
        line.push_str("  今日");
    }
    line
}

/// Render the holiday list of `year`.
///
/// With `by_month`, rows are grouped under `1月`, `2月`, … headers and months
/// without holidays are left out.
pub fn render_list(year: i32, holidays: &[Holiday], today: Date, by_month: bool) -> String {
    let mut out = String::new();
    if by_month {
        for (month, rows) in group_by_month(holidays) {
            out.push_str(month.japanese_name());
            out.push('\n');
            for h in &rows {
                out.push_str("  ");
                out.push_str(&row(today, h));
                out.push('\n');
            }
        }
    } else {
        for h in holidays {
            out.push_str(&row(today, h));
            out.push('\n');
        }
    }
    out.push_str(&format!("{year}年の祝日: {}日\n", holidays.len()));
    out
}

/// The next holiday and the distance to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextHoliday {
    /// Date of the holiday.
    pub date: Date,
    /// Japanese name.
    pub name: String,
    /// Calendar days from today (0 when the holiday is today).
    pub days_until: i64,
}

impl NextHoliday {
    /// Describe `holiday` as seen from `today`.
    pub fn new(today: Date, holiday: &Holiday) -> Self {
        NextHoliday {
            date: holiday.date(),
            name: holiday.name().to_owned(),
            days_until: days_until(today, holiday),
        }
    }
}

/// Render the next-holiday panel.
pub fn render_next(next: &NextHoliday) -> String {
    let when = match next.days_until {
        0 => "今日".to_owned(),
        n => format!("あと{n}日"),
    };
    format!(
        "次の祝日: {}\n{} {}\n{}\n",
        next.name,
        format_slash(next.date),
        format_day_jp(next.date),
        when
    )
}

/// What the calendar says about one date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayReport {
    /// The date asked about.
    pub date: Date,
    /// Name of the national holiday on that date, if any.
    pub holiday: Option<String>,
    /// Saturday or Sunday.
    pub weekend: bool,
    /// Neither a weekend nor a holiday.
    pub business_day: bool,
}

impl DayReport {
    /// Check `date` against `calendar`.
    pub fn new(calendar: &JapanCalendar, date: Date) -> Self {
        DayReport {
            date,
            holiday: calendar.holiday_name(date),
            weekend: calendar.is_weekend(date),
            business_day: calendar.is_business_day(date),
        }
    }
}

/// Render a [`DayReport`] as one line.
pub fn render_day(report: &DayReport) -> String {
    let kind = match (&report.holiday, report.weekend) {
        (Some(name), _) => format!("祝日 {name}"),
        (None, true) => "週末".to_owned(),
        (None, false) => "平日".to_owned(),
    };
    format!(
        "{} ({})  {}\n",
        format_slash(report.date),
        report.date.weekday().japanese_short_name(),
        kind
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use yamada_time::japanese_holidays;

    fn date(y: i32, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn flat_list_marks_past_and_today() {
        let list = japanese_holidays(2024);
        let text = render_list(2024, &list, date(2024, 5, 6), false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 22);
        assert_eq!(lines[0], "- 01/01  1日 (月)  元日");
        assert_eq!(lines[10], "* 05/06  6日 (月)  振替休日  今日");
        assert_eq!(lines[11], "  07/15  15日 (月)  海の日");
        assert_eq!(lines[21], "2024年の祝日: 21日");
    }

    #[test]
    fn grouped_list_has_month_headers() {
        let list = japanese_holidays(2024);
        let text = render_list(2024, &list, date(2023, 1, 1), true);
        let headers: Vec<&str> = text.lines().filter(|l| l.ends_with('月')).collect();
        assert_eq!(
            headers,
            vec!["1月", "2月", "3月", "4月", "5月", "7月", "8月", "9月", "10月", "11月"]
        );
        assert!(text.contains("\n    01/08  8日 (月)  成人の日\n"));
    }

    #[test]
    fn next_panel() {
        let today = date(2024, 12, 1);
        let next = NextHoliday::new(today, &Holiday::new(date(2025, 1, 1), "元日"));
        assert_eq!(render_next(&next), "次の祝日: 元日\n2025/01/01 1日 (水)\nあと31日\n");
        let json = serde_json::to_string(&next).unwrap();
        assert_eq!(json, r#"{"date":"2025-01-01","name":"元日","days_until":31}"#);
    }

    #[test]
    fn day_reports() {
        let cal = JapanCalendar::default();
        assert_eq!(
            render_day(&DayReport::new(&cal, date(2024, 5, 6))),
            "2024/05/06 (月)  祝日 振替休日\n"
        );
        assert_eq!(render_day(&DayReport::new(&cal, date(2024, 5, 11))), "2024/05/11 (土)  週末\n");
        let weekday = DayReport::new(&cal, date(2024, 5, 7));
        assert!(weekday.business_day);
        assert_eq!(render_day(&weekday), "2024/05/07 (火)  平日\n");
    }
}
