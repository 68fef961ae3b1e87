//! Arithmetic Hebrew calendar.
//!
//! Year lengths follow from the molad (mean conjunction) of Tishrei and the
//! postponement rules (dehiyyot); everything else is day counting from the
//! epoch, 1 Tishrei AM 1.
//!
//! # Month numbering
//! Months are numbered from Nisan, the first month of the ecclesiastical
//! year, although the year number changes at Tishrei:
//!
//! | no. | month   | no. | month   |
//! |-----|---------|-----|---------|
//! | 1   | Nisan   | 7   | Tishrei |
//! | 2   | Iyar    | 8   | Heshvan |
//! | 3   | Sivan   | 9   | Kislev  |
//! | 4   | Tammuz  | 10  | Tevet   |
//! | 5   | Av      | 11  | Shevat  |
//! | 6   | Elul    | 12  | Adar    |
//!
//! In leap years Adar is doubled. Month 12 *with* the intercalary flag is
//! Adar I (leap years only). Month 12 *without* the flag is Adar in common
//! years and Adar II in leap years, which is where Adar observances such as
//! Purim are kept. Month 13 is accepted as an explicit alias for Adar II.

use super::{LunisolarCalendar, LunisolarDate, LunisolarMonth};
use crate::date::Date;
use hol_core::errors::{Error, Result};
use hol_core::Year;

/// Serial number of 1 Tishrei AM 1 (Julian 7 October 3761 BCE).
const EPOCH: i64 = -1_373_427;

/// Parts (1/1080 hour) in a day.
const PARTS_PER_DAY: i64 = 25_920;

/// Difference between the Hebrew year beginning in a Gregorian autumn and
/// that Gregorian year.
const YEAR_OFFSET: Year = 3761;

// Internal month numbers: Adar I is 12 and Adar II 13 in leap years.
const NISAN: u8 = 1;
const IYAR: u8 = 2;
const TAMMUZ: u8 = 4;
const ELUL: u8 = 6;
const TISHREI: u8 = 7;
const HESHVAN: u8 = 8;
const KISLEV: u8 = 9;
const TEVET: u8 = 10;
const ADAR: u8 = 12;
const ADAR_II: u8 = 13;

const MONTH_NAMES: [&str; 13] = [
    "Nisan", "Iyar", "Sivan", "Tammuz", "Av", "Elul", "Tishrei", "Heshvan", "Kislev", "Tevet",
    "Shevat", "Adar", "Adar II",
];

/// Named Hebrew months, for building [`LunisolarMonth`] values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HebrewMonth {
    /// Nisan (1).
    Nisan,
    /// Iyar (2).
    Iyar,
    /// Sivan (3).
    Sivan,
    /// Tammuz (4).
    Tammuz,
    /// Av (5).
    Av,
    /// Elul (6).
    Elul,
    /// Tishrei (7), the civil new year.
    Tishrei,
    /// Heshvan (8), 29 or 30 days.
    Heshvan,
    /// Kislev (9), 29 or 30 days.
    Kislev,
    /// Tevet (10).
    Tevet,
    /// Shevat (11).
    Shevat,
    /// Adar in common years, Adar II in leap years (12).
    Adar,
    /// Adar I, the intercalary month of leap years.
    AdarI,
    /// Adar II (leap years only).
    AdarII,
}

impl From<HebrewMonth> for LunisolarMonth {
    fn from(m: HebrewMonth) -> Self {
        match m {
            HebrewMonth::AdarI => LunisolarMonth::new(ADAR, true),
            HebrewMonth::AdarII => LunisolarMonth::regular(ADAR_II),
            other => LunisolarMonth::regular(other as u8 + 1),
        }
    }
}

/// The arithmetic Hebrew calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct Hebrew;

impl Hebrew {
    /// Registry name.
    pub const NAME: &'static str = "hebrew";

    /// Days from the epoch to the start of `year`, before the year-length
    /// correction.
    fn elapsed_days(year: i64) -> i64 {
        let months_elapsed = (235 * year - 234).div_euclid(19);
        let parts_elapsed = 12_084 + 13_753 * months_elapsed;
        let days = 29 * months_elapsed + parts_elapsed.div_euclid(PARTS_PER_DAY);
        // Rosh Hashanah never falls on Sunday, Wednesday, or Friday.
        if (3 * (days + 1)).rem_euclid(7) < 3 {
            days + 1
        } else {
            days
        }
    }

    /// Postponement keeping year lengths within 353–355 / 383–385 days.
    fn year_length_correction(year: i64) -> i64 {
        let ny0 = Self::elapsed_days(year - 1);
        let ny1 = Self::elapsed_days(year);
        let ny2 = Self::elapsed_days(year + 1);
        if ny2 - ny1 == 356 {
            2
        } else if ny1 - ny0 == 382 {
            1
        } else {
            0
        }
    }

    /// Serial of 1 Tishrei of `year`.
    fn new_year(year: i64) -> i64 {
        EPOCH + Self::elapsed_days(year) + Self::year_length_correction(year)
    }

    /// Number of days in `year` (353–355 or 383–385).
    pub fn days_in_year(year: Year) -> u16 {
        let y = year as i64;
        (Self::new_year(y + 1) - Self::new_year(y)) as u16
    }

    fn leap(year: i64) -> bool {
        (7 * year + 1).rem_euclid(19) < 7
    }

    fn last_month(year: i64) -> u8 {
        if Self::leap(year) {
            ADAR_II
        } else {
            ADAR
        }
    }

    /// Length of an internal month number.
    fn month_length(year: i64, month: u8) -> u8 {
        let days = Self::new_year(year + 1) - Self::new_year(year);
        let long_heshvan = days % 10 == 5;
        let short_kislev = days % 10 == 3;
        match month {
            IYAR | TAMMUZ | ELUL | TEVET | ADAR_II => 29,
            ADAR if !Self::leap(year) => 29,
            HESHVAN if !long_heshvan => 29,
            KISLEV if short_kislev => 29,
            _ => 30,
        }
    }

    /// Map a public month to the internal numbering, validating that it
    /// exists in `year`.
    fn internal_month(year: i64, month: LunisolarMonth) -> Result<u8> {
        let leap = Self::leap(year);
        match (month.number, month.intercalary) {
            (ADAR, true) if leap => Ok(ADAR),
            (ADAR, true) => Err(Error::InvalidCalendarDate(format!(
                "Hebrew year {year} is not a leap year and has no Adar I"
            ))),
            (n, true) => Err(Error::InvalidCalendarDate(format!(
                "Hebrew month {n} has no intercalary counterpart (only Adar does)"
            ))),
            (ADAR, false) if leap => Ok(ADAR_II),
            (ADAR_II, false) if leap => Ok(ADAR_II),
            (ADAR_II, false) => Err(Error::InvalidCalendarDate(format!(
                "Hebrew year {year} is not a leap year and has no Adar II"
            ))),
            (n @ NISAN..=ADAR, false) => Ok(n),
            (n, false) => Err(Error::InvalidCalendarDate(format!(
                "Hebrew month {n} out of range [1, 13]"
            ))),
        }
    }

    /// Inverse of [`internal_month`](Self::internal_month).
    fn public_month(year: i64, month: u8) -> LunisolarMonth {
        match month {
            ADAR if Self::leap(year) => LunisolarMonth::new(ADAR, true),
            ADAR_II => LunisolarMonth::regular(ADAR),
            n => LunisolarMonth::regular(n),
        }
    }

    fn month_name(year: i64, month: u8) -> &'static str {
        if month == ADAR && Self::leap(year) {
            "Adar I"
        } else {
            MONTH_NAMES[month as usize - 1]
        }
    }

    /// Serial of `day` of internal `month` in `year`; no validation.
    fn serial(year: i64, month: u8, day: u8) -> i64 {
        let mut serial = Self::new_year(year) + day as i64 - 1;
        if month < TISHREI {
            // Nisan..Elul come after all of Tishrei..Adar (II).
            serial += (TISHREI..=Self::last_month(year))
                .map(|m| Self::month_length(year, m) as i64)
                .sum::<i64>();
            serial += (NISAN..month)
                .map(|m| Self::month_length(year, m) as i64)
                .sum::<i64>();
        } else {
            serial += (TISHREI..month)
                .map(|m| Self::month_length(year, m) as i64)
                .sum::<i64>();
        }
        serial
    }
}

impl LunisolarCalendar for Hebrew {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn is_leap_year(&self, year: Year) -> bool {
        Self::leap(year as i64)
    }

    fn months_in_year(&self, year: Year) -> u8 {
        Self::last_month(year as i64)
    }

    fn days_in_month(&self, year: Year, month: LunisolarMonth) -> Result<u8> {
        let y = year as i64;
        Ok(Self::month_length(y, Self::internal_month(y, month)?))
    }

    fn to_gregorian(&self, date: &LunisolarDate) -> Result<Date> {
        let year = date.year as i64;
        let month = Self::internal_month(year, date.month)?;
        let length = Self::month_length(year, month);
        if date.day == 0 || date.day > length {
            return Err(Error::InvalidCalendarDate(format!(
                "day {} out of range [1, {length}] for {} {year}",
                date.day,
                Self::month_name(year, month)
            )));
        }
        let serial = Self::serial(year, month, date.day);
        i32::try_from(serial)
            .map_err(|_| Error::InvalidDate(format!("Hebrew year {year} is out of range")))
            .and_then(Date::from_serial)
    }

    fn from_gregorian(&self, date: Date) -> Result<LunisolarDate> {
        let serial = date.serial() as i64;
        // Mean year length is 35975351/98496 days; the estimate is within
        // one year of the answer.
        let approx = ((serial - EPOCH) * 98_496).div_euclid(35_975_351) + 1;
        let mut year = approx - 1;
        while Self::new_year(year + 1) <= serial {
            year += 1;
        }
        let mut months: Vec<u8> = if serial < Self::serial(year, NISAN, 1) {
            (TISHREI..=Self::last_month(year)).collect()
        } else {
            (NISAN..=ELUL).collect()
        };
        months.retain(|&m| serial <= Self::serial(year, m, Self::month_length(year, m)));
        let month = months.first().copied().ok_or_else(|| {
            Error::InvalidDate(format!("{date} could not be placed in Hebrew year {year}"))
        })?;
        let day = (serial - Self::serial(year, month, 1) + 1) as u8;
        Ok(LunisolarDate::new(
            year as Year,
            Self::public_month(year, month),
            day,
        ))
    }

    fn nominal_year(&self, gregorian_year: Year, month: LunisolarMonth) -> Year {
        // Tishrei..Kislev of the year beginning in the Gregorian autumn fall
        // in that Gregorian year; later months fall in the next one.
        match month.number {
            TISHREI..=KISLEV if !month.intercalary => gregorian_year + YEAR_OFFSET,
            _ => gregorian_year + YEAR_OFFSET - 1,
        }
    }
}
