//! Easter computus against published reference dates.

use proptest::prelude::*;

use hol_core::Error;
use hol_time::{easter_sunday, orthodox_easter_sunday, Date, Weekday};

fn date(y: i32, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn western_golden_vectors() {
    let expected = [
        (1583, 4, 10),
        (1700, 4, 11),
        (1818, 3, 22),
        (1900, 4, 15),
        (1943, 4, 25),
        (1961, 4, 2),
        (2000, 4, 23),
        (2008, 3, 23),
        (2011, 4, 24),
        (2019, 4, 21),
        (2020, 4, 12),
        (2021, 4, 4),
        (2022, 4, 17),
        (2023, 4, 9),
        (2024, 3, 31),
        (2025, 4, 20),
        (2026, 4, 5),
        (2038, 4, 25),
        (2285, 3, 22),
    ];
    for (y, m, d) in expected {
        assert_eq!(easter_sunday(y).unwrap(), date(y, m, d), "Easter {y}");
    }
}

#[test]
fn orthodox_golden_vectors() {
    let expected = [
        (2019, 4, 28),
        (2020, 4, 19),
        (2021, 5, 2),
        (2022, 4, 24),
        (2023, 4, 16),
        (2024, 5, 5),
        (2025, 4, 20),
        (2026, 4, 12),
    ];
    for (y, m, d) in expected {
        assert_eq!(orthodox_easter_sunday(y).unwrap(), date(y, m, d), "Orthodox Easter {y}");
    }
}

#[test]
fn pre_reform_years_are_unsupported() {
    for y in [1, 1000, 1582] {
        assert!(matches!(
            easter_sunday(y),
            Err(Error::UnsupportedYear { min: 1583, .. })
        ));
        assert!(orthodox_easter_sunday(y).is_err());
    }
    assert!(easter_sunday(10_000).is_err());
}

proptest! {
    #[test]
    fn western_easter_is_a_sunday_in_range(y in 1583i32..=9999) {
        let e = easter_sunday(y).unwrap();
        prop_assert_eq!(e.weekday(), Weekday::Sunday);
        prop_assert!(e >= date(y, 3, 22) && e <= date(y, 4, 25), "{}", e);
    }

    #[test]
    fn orthodox_easter_is_a_sunday_not_before_western(y in 1583i32..=9999) {
        let o = orthodox_easter_sunday(y).unwrap();
        prop_assert_eq!(o.weekday(), Weekday::Sunday);
        prop_assert!(o >= easter_sunday(y).unwrap());
    }
}
