//! Easter computus.
//!
//! Easter Sunday anchors every moveable feast: Good Friday is Easter − 2,
//! Ascension Easter + 39, Whit Monday Easter + 50, and so on.

use crate::date::Date;
use hol_core::errors::{Error, Result};
use hol_core::{DayOffset, Year};

/// First year of the Gregorian computus (the reform took effect in
/// October 1582).
pub const FIRST_GREGORIAN_EASTER_YEAR: Year = 1583;

/// Last year for which a [`Date`] can be produced.
pub const LAST_EASTER_YEAR: Year = Date::MAX_YEAR;

/// Which computus to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Computus {
    /// Gregorian computus (Western churches).
    Western,
    /// Julian computus (Eastern Orthodox churches), reported as a Gregorian
    /// date.
    Orthodox,
}

impl std::fmt::Display for Computus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Computus::Western => write!(f, "Easter"),
            Computus::Orthodox => write!(f, "Orthodox Easter"),
        }
    }
}

impl Computus {
    /// Easter Sunday of `year` under this computus.
    pub fn easter_sunday(self, year: Year) -> Result<Date> {
        match self {
            Computus::Western => easter_sunday(year),
            Computus::Orthodox => orthodox_easter_sunday(year),
        }
    }

    /// Easter Sunday of `year` shifted by `offset` days.
    pub fn offset(self, year: Year, offset: DayOffset) -> Result<Date> {
        self.easter_sunday(year)?.add_days(offset)
    }
}

fn check_year(year: Year, algorithm: &'static str) -> Result<()> {
    if !(FIRST_GREGORIAN_EASTER_YEAR..=LAST_EASTER_YEAR).contains(&year) {
        return Err(Error::UnsupportedYear {
            year,
            algorithm,
            min: FIRST_GREGORIAN_EASTER_YEAR,
            max: LAST_EASTER_YEAR,
        });
    }
    Ok(())
}

/// Gregorian Easter Sunday of `year`.
///
/// Oudin's closed-form congruences: golden number, epact of the
/// ecclesiastical full moon, then the following Sunday.
///
/// # Errors
/// [`Error::UnsupportedYear`] outside `1583..=9999`.
pub fn easter_sunday(year: Year) -> Result<Date> {
    check_year(year, "Gregorian computus")?;
    let y = year;
    let golden = y % 19;
    let century = y / 100;
    // Days from March 21 to the paschal full moon, before the epact corrections.
    let h = (century - century / 4 - (8 * century + 13) / 25 + 19 * golden + 15) % 30;
    let full_moon = h - (h / 28) * (1 - (h / 28) * (29 / (h + 1)) * ((21 - golden) / 11));
    // Weekday of the paschal full moon.
    let weekday = (y + y / 4 + full_moon + 2 - century + century / 4) % 7;
    let p = full_moon - weekday;
    let month = 3 + (p + 26) / 30;
    let day = 1 + (p + 27 + (p + 6) / 40) % 31;
    Date::from_ymd(year, month as u8, day as u8)
}

/// Orthodox Easter Sunday of `year`, as a Gregorian date.
///
/// Meeus' Julian computus gives a Julian-calendar date, converted through
/// the Julian day count.
///
/// # Errors
/// [`Error::UnsupportedYear`] outside `1583..=9999`.
pub fn orthodox_easter_sunday(year: Year) -> Result<Date> {
    check_year(year, "Julian computus")?;
    let y = year;
    let d = (19 * (y % 19) + 15) % 30;
    let e = (2 * (y % 4) + 4 * (y % 7) - d + 34) % 7;
    let month = (d + e + 114) / 31;
    let day = (d + e + 114) % 31 + 1;
    Ok(Date::from_serial_unchecked(julian_serial(y, month, day)))
}

/// Serial number of a Julian-calendar date.
fn julian_serial(year: Year, month: i32, day: i32) -> i32 {
    // Julian 0001-01-01 is Gregorian 0000-12-30.
    const JULIAN_EPOCH: i32 = -1;
    let y = year - 1;
    let mut serial =
        JULIAN_EPOCH - 1 + 365 * y + y.div_euclid(4) + (367 * month - 362).div_euclid(12);
    if month > 2 {
        serial -= if year % 4 == 0 { 1 } else { 2 };
    }
    serial + day
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn western_reference_dates() {
        assert_eq!(easter_sunday(2024).unwrap(), date(2024, 3, 31));
        assert_eq!(easter_sunday(2025).unwrap(), date(2025, 4, 20));
        assert_eq!(easter_sunday(2023).unwrap(), date(2023, 4, 9));
        assert_eq!(easter_sunday(2000).unwrap(), date(2000, 4, 23));
    }

    #[test]
    fn western_extremes() {
        // Earliest possible: March 22; latest possible: April 25.
        assert_eq!(easter_sunday(1818).unwrap(), date(1818, 3, 22));
        assert_eq!(easter_sunday(2285).unwrap(), date(2285, 3, 22));
        assert_eq!(easter_sunday(1943).unwrap(), date(1943, 4, 25));
        assert_eq!(easter_sunday(2038).unwrap(), date(2038, 4, 25));
    }

    #[test]
    fn first_supported_year() {
        assert_eq!(easter_sunday(1583).unwrap(), date(1583, 4, 10));
        assert!(matches!(
            easter_sunday(1582),
            Err(Error::UnsupportedYear { year: 1582, min: 1583, .. })
        ));
    }

    #[test]
    fn orthodox_reference_dates() {
        assert_eq!(orthodox_easter_sunday(2024).unwrap(), date(2024, 5, 5));
        assert_eq!(orthodox_easter_sunday(2025).unwrap(), date(2025, 4, 20));
        assert_eq!(orthodox_easter_sunday(2023).unwrap(), date(2023, 4, 16));
        assert_eq!(orthodox_easter_sunday(2021).unwrap(), date(2021, 5, 2));
    }

    #[test]
    fn offsets() {
        // Good Friday 2024
        assert_eq!(Computus::Western.offset(2024, -2).unwrap(), date(2024, 3, 29));
        // Whit Monday 2024
        assert_eq!(Computus::Western.offset(2024, 50).unwrap(), date(2024, 5, 20));
        assert_eq!(Computus::Orthodox.offset(2024, 1).unwrap(), date(2024, 5, 6));
    }
}
