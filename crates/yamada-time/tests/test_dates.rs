//! Integration tests for `Date`, `Weekday`, and `Month`.

use std::collections::HashSet;

use yamada_time::date::{days_in_month, is_leap_year};
use yamada_time::weekday::Weekday;
use yamada_time::{Date, Month};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Date consistency test ────────────────────────────────────────────────────

#[test]
fn test_consistency() {
    // Walk 1890-01-01 .. 2110-12-31 one day at a time and check every
    // invariant against the previous day.
    let min_serial = date(1890, 1, 1).serial();
    let max_serial = date(2110, 12, 31).serial();

    let prev = Date::from_serial(min_serial - 1).unwrap();
    let mut dy_old = prev.day_of_year() as i32;
    let mut d_old = prev.day_of_month() as i32;
    let mut m_old = prev.month() as i32;
    let mut y_old = prev.year();
    let mut wd_old = prev.weekday().ordinal() as i32;

    for i in min_serial..=max_serial {
        let t = Date::from_serial(i).unwrap();
        assert_eq!(t.serial(), i, "inconsistent serial for date {t}");

        let dy = t.day_of_year() as i32;
        let d = t.day_of_month() as i32;
        let m = t.month() as i32;
        let y = t.year();
        let wd = t.weekday().ordinal() as i32;

        assert!(
            (dy == dy_old + 1)
                || (dy == 1 && dy_old == 365 && !is_leap_year(y_old))
                || (dy == 1 && dy_old == 366 && is_leap_year(y_old)),
            "wrong day of year increment: date={t}, dy={dy}, prev={dy_old}"
        );
        dy_old = dy;

        assert!(
            (d == d_old + 1 && m == m_old && y == y_old)
                || (d == 1 && m == m_old + 1 && y == y_old)
                || (d == 1 && m == 1 && y == y_old + 1),
            "wrong day/month/year increment: date={t}, d/m/y={d}/{m}/{y}, \
             prev={d_old}/{m_old}/{y_old}"
        );
        d_old = d;
        m_old = m;
        y_old = y;

        let max_day = days_in_month(y, m as u8) as i32;
        assert!(
            d >= 1 && d <= max_day,
            "invalid day of month: date={t}, day={d}, max={max_day}"
        );

        // Weekday wraps from 7 to 1
        assert!(
            (wd == wd_old + 1) || (wd == 1 && wd_old == 7),
            "invalid weekday increment: date={t}, wd={wd}, prev_wd={wd_old}"
        );
        wd_old = wd;

        let s = Date::from_ymd(y, m as u8, d as u8).unwrap();
        assert_eq!(s.serial(), i, "roundtrip failed: date={t}, serial={i}");

        let parsed: Date = t.to_string().parse().unwrap();
        assert_eq!(parsed, t, "ISO roundtrip failed for {t}");
    }
}

// ─── Hash test ────────────────────────────────────────────────────────────────

#[test]
fn can_hash() {
    let start = date(2020, 1, 1);
    let set: HashSet<Date> = (0..500).map(|i| start + i).collect();
    assert_eq!(set.len(), 500);
    assert!(set.contains(&date(2020, 12, 31)));
    assert!(!set.contains(&date(2019, 12, 31)));
}

// ─── Leap year tests ─────────────────────────────────────────────────────────

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(!is_leap_year(1900));
    assert!(is_leap_year(2004));
    assert!(!is_leap_year(2001));
    assert!(is_leap_year(2400));
    assert!(!is_leap_year(2100));
    assert!(is_leap_year(0));
    assert!(is_leap_year(-4));
}

// ─── End of month tests ──────────────────────────────────────────────────────

#[test]
fn end_of_month() {
    assert!(date(2024, 2, 29).is_end_of_month());
    assert!(!date(2024, 2, 28).is_end_of_month());
    assert!(date(2023, 2, 28).is_end_of_month());
    assert!(date(2023, 12, 31).is_end_of_month());
    assert!(!date(2023, 12, 30).is_end_of_month());
}

// ─── Date arithmetic tests ──────────────────────────────────────────────────

#[test]
fn date_arithmetic() {
    let d = date(2024, 1, 15);

    let d2 = d + 10;
    assert_eq!(d2, date(2024, 1, 25));

    let d3 = d - 15;
    assert_eq!(d3, date(2023, 12, 31));

    assert_eq!(d2 - d3, 25);
    assert_eq!(d3.days_between(d2), 25);

    assert_eq!(date(2024, 1, 31) + 1, date(2024, 2, 1));
    assert_eq!(date(2023, 12, 31) + 1, date(2024, 1, 1));
}

// ─── Weekday / month tests ──────────────────────────────────────────────────

#[test]
fn weekday_consistency() {
    // Known: 2024-01-01 is Monday
    assert_eq!(date(2024, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(date(2024, 1, 2).weekday(), Weekday::Tuesday);
    assert_eq!(date(2024, 1, 6).weekday(), Weekday::Saturday);
    assert_eq!(date(2024, 1, 7).weekday(), Weekday::Sunday);
    // Far from the epoch in both directions.
    assert_eq!(date(1900, 1, 1).weekday(), Weekday::Monday);
    assert_eq!(date(2100, 1, 1).weekday(), Weekday::Friday);
}

#[test]
fn month_of_year() {
    assert_eq!(date(2024, 9, 16).month_of_year(), Month::September);
    assert_eq!(date(2024, 9, 16).month_of_year().japanese_name(), "9月");
}

// ─── ISO parsing ─────────────────────────────────────────────────────────────

#[test]
fn iso_dates() {
    let d: Date = "2006-01-15".parse().unwrap();
    assert_eq!(d.ymd(), (2006, 1, 15));
    assert_eq!(d.to_string(), "2006-01-15");
    assert!(" 2006-01-15 ".parse::<Date>().is_ok());
    assert!("20060115".parse::<Date>().is_err());
    assert!("2006-1-15".parse::<Date>().is_err());
    assert!("".parse::<Date>().is_err());
}
