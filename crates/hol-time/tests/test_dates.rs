//! Integration tests for `Date` serial arithmetic.
//!
//! Serial conversions are checked against `chrono`, which implements the
//! same proleptic Gregorian calendar independently.

use chrono::Datelike;
use proptest::prelude::*;

use hol_core::Error;
use hol_time::date::{days_in_month, is_leap_year};
use hol_time::gregorian::nth_weekday_of_month;
use hol_time::{Date, Month, Ordinal, Weekday};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2100));
    assert_eq!(days_in_month(2100, 2), 28);
    assert_eq!(days_in_month(2400, 2), 29);
}

#[test]
fn consecutive_serials_are_consecutive_days() {
    let mut d = date(1999, 12, 25);
    let end = date(2001, 3, 5);
    let mut previous = d;
    d += 1;
    while d <= end {
        assert_eq!(d - previous, 1);
        assert_ne!(d.weekday(), previous.weekday());
        if previous.is_end_of_month() {
            assert_eq!(d.day_of_month(), 1, "{d} should start a month");
        } else {
            assert_eq!(d.day_of_month(), previous.day_of_month() + 1);
        }
        previous = d;
        d += 1;
    }
}

#[test]
fn weekday_cycle_from_epoch() {
    // 2024-01-01 is a Monday; serials advance the weekday by one.
    let monday = date(2024, 1, 1);
    for (i, wd) in Weekday::ALL.iter().enumerate() {
        assert_eq!((monday + i as i32).weekday(), *wd);
    }
}

proptest! {
    #[test]
    fn serial_matches_chrono(serial in 1i32..=3_652_059) {
        let d = Date::from_serial(serial).unwrap();
        let n = d.to_naive_date().unwrap();
        prop_assert_eq!(d.year(), n.year());
        prop_assert_eq!(d.month() as u32, n.month());
        prop_assert_eq!(d.day_of_month() as u32, n.day());
        prop_assert_eq!(d.day_of_year() as u32, n.ordinal());
        prop_assert_eq!(
            d.weekday().ordinal() as u32,
            n.weekday().number_from_monday()
        );
    }

    #[test]
    fn ymd_roundtrip(y in 1i32..=9999, m in 1u8..=12, d in 1u8..=31) {
        prop_assume!(d <= days_in_month(y, m));
        let date = Date::from_ymd(y, m, d).unwrap();
        prop_assert_eq!(date.ymd(), (y, m, d));
        prop_assert_eq!(date.to_string().parse::<Date>().unwrap(), date);
    }

    #[test]
    fn nth_weekday_lands_in_position(
        year in 1583i32..=9999,
        month in prop::sample::select(Month::ALL.to_vec()),
        weekday in prop::sample::select(Weekday::ALL.to_vec()),
        ordinal in prop::sample::select(vec![
            Ordinal::First,
            Ordinal::Second,
            Ordinal::Third,
            Ordinal::Fourth,
            Ordinal::Fifth,
            Ordinal::Last,
        ]),
    ) {
        let last_day = days_in_month(year, month.number());
        match nth_weekday_of_month(year, month, weekday, ordinal) {
            Ok(d) => {
                prop_assert_eq!(d.weekday(), weekday);
                prop_assert_eq!(d.year(), year);
                prop_assert_eq!(d.month(), month.number());
                let day = d.day_of_month();
                match ordinal.position() {
                    Some(n) => {
                        prop_assert_eq!((day - 1) / 7 + 1, n);
                    }
                    None => {
                        prop_assert!(day + 7 > last_day);
                    }
                }
            }
            Err(e) => {
                prop_assert_eq!(ordinal, Ordinal::Fifth);
                prop_assert!(matches!(e, Error::RuleUnsatisfiable(_)));
            }
        }
    }
}
