//! `Date` type.
//!
//! Dates are represented as a serial number of days in the proleptic
//! Gregorian calendar (rata die).
//!
//! # Serial number convention
//! * Serial 0 is used as the "null date" sentinel.
//! * Serial 1 = Monday, January 1, 0001.
//! * The valid date range is 0001-01-01 to 9999-12-31.
//!
//! Day-count arithmetic on serials is what every other calendar in this
//! crate converts through: Easter, the Hebrew calendar, and time-zone
//! anchoring all meet at [`Date`].

use std::str::FromStr;

use crate::month::Month;
use crate::weekday::Weekday;
use hol_core::errors::{Error, Result};
use hol_core::{Serial, Year};

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Date(Serial);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// The null date sentinel (serial 0).
    pub const NULL: Date = Date(0);

    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_059);

    /// Smallest representable year.
    pub const MIN_YEAR: Year = 1;

    /// Largest representable year.
    pub const MAX_YEAR: Year = 9999;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if `serial <= 0` (the null sentinel or before the
    /// epoch) or past [`Date::MAX`].
    pub fn from_serial(serial: Serial) -> Result<Self> {
        if serial <= 0 || serial > Self::MAX.0 {
            return Err(Error::InvalidDate(format!(
                "serial {serial} out of range [1, {}]",
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::InvalidDate(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDate(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::InvalidDate(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Create a date from a year, a [`Month`], and a day-of-month.
    pub fn from_month_day(year: Year, month: Month, day: u8) -> Result<Self> {
        Self::from_ymd(year, month.number(), day)
    }

    /// Create a date from an (unchecked) serial number.
    pub(crate) fn from_serial_unchecked(serial: Serial) -> Self {
        debug_assert!(
            serial > 0 && serial <= Self::MAX.0,
            "invalid date serial {serial}"
        );
        Date(serial)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> Serial {
        self.0
    }

    /// Return `true` if this is the null date sentinel.
    pub fn is_null(&self) -> bool {
        self.0 == 0
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (Year, u8, u8) {
        ymd_from_serial(self.0)
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> Year {
        year_from_serial(self.0)
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        match Month::from_number(self.month()) {
            Some(m) => m,
            None => unreachable!("ymd_from_serial always yields a month in 1..=12"),
        }
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        (self.0 - serial_from_ymd(self.year(), 1, 1) + 1) as u16
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (0001-01-01) is a Monday (ordinal 1).
        let w = ((self.0 - 1).rem_euclid(7) + 1) as u8;
        match Weekday::from_ordinal(w) {
            Some(wd) => wd,
            None => unreachable!("rem_euclid always in 1..=7"),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0.checked_add(n).unwrap_or(0);
        if serial <= 0 || serial > Self::MAX.0 {
            return Err(Error::InvalidDate(format!(
                "{self} {n:+} days is out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// Return the latest date on or before `self` that falls on `weekday`.
    pub fn on_or_before(self, weekday: Weekday) -> Result<Self> {
        let back = (self.weekday().ordinal() as i32 - weekday.ordinal() as i32).rem_euclid(7);
        self.add_days(-back)
    }

    /// Return the earliest date on or after `self` that falls on `weekday`.
    pub fn on_or_after(self, weekday: Weekday) -> Result<Self> {
        let fwd = (weekday.ordinal() as i32 - self.weekday().ordinal() as i32).rem_euclid(7);
        self.add_days(fwd)
    }

    /// Return the *n*-th occurrence of `weekday` in the month of `year`/`month`.
    ///
    /// For example, `nth_weekday(3, Weekday::Wednesday, 2024, 3)` returns the
    /// third Wednesday of March 2024 (2024-03-20).
    ///
    /// # Errors
    /// [`Error::InvalidRule`] if `n` is zero, [`Error::RuleUnsatisfiable`] if
    /// the month has fewer than `n` such weekdays.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        if n == 0 {
            return Err(Error::InvalidRule("nth_weekday: n must be >= 1".into()));
        }
        let first = Date::from_ymd(year, month, 1)?.on_or_after(weekday)?;
        let day = first.day_of_month() as u32 + 7 * (n as u32 - 1);
        if day > days_in_month(year, month) as u32 {
            return Err(Error::RuleUnsatisfiable(format!(
                "there is no {n}-th {weekday} in {year:04}-{month:02}"
            )));
        }
        Date::from_ymd(year, month, day as u8)
    }

    /// Return the last occurrence of `weekday` in the month of `year`/`month`.
    pub fn last_weekday(weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        Date::from_ymd(year, month, 1)?
            .end_of_month()
            .on_or_before(weekday)
    }

    /// Convert to a `chrono::NaiveDate`.
    pub fn to_naive_date(self) -> Result<chrono::NaiveDate> {
        let (y, m, d) = ymd_from_serial(self.0);
        chrono::NaiveDate::from_ymd_opt(y, m as u32, d as u32)
            .ok_or_else(|| Error::InvalidDate(format!("{self:?} has no chrono equivalent")))
    }
}

impl TryFrom<chrono::NaiveDate> for Date {
    type Error = Error;

    fn try_from(value: chrono::NaiveDate) -> Result<Self> {
        use chrono::Datelike;
        Date::from_ymd(value.year(), value.month() as u8, value.day() as u8)
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

impl std::ops::AddAssign<i32> for Date {
    fn add_assign(&mut self, rhs: i32) {
        *self = self.add_days(rhs).expect("date addition overflow");
    }
}

// ── Display / parsing ─────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "null date");
        }
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "{y:04}-{m:02}-{d:02}")
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_null() {
            return write!(f, "Date(null)");
        }
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO 8601 calendar date (`YYYY-MM-DD`).
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::InvalidDate(format!("cannot parse '{s}' as YYYY-MM-DD"));
        let mut parts = s.trim().split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(bad());
        };
        let year: Year = y.parse().map_err(|_| bad())?;
        let month: u8 = m.parse().map_err(|_| bad())?;
        let day: u8 = d.parse().map_err(|_| bad())?;
        Date::from_ymd(year, month, day)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year in the proleptic Gregorian calendar.
pub fn is_leap_year(year: Year) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial number.
fn serial_from_ymd(year: Year, month: u8, day: u8) -> Serial {
    let y = year - 1;
    let m = month as i32;
    let mut serial = 365 * y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400);
    // Days before the first of `month`, counting February as 30 days...
    serial += (367 * m - 362).div_euclid(12);
    // ...then correcting for its real length.
    if m > 2 {
        serial -= if is_leap_year(year) { 1 } else { 2 };
    }
    serial + day as i32
}

/// Gregorian year containing `serial`.
fn year_from_serial(serial: Serial) -> Year {
    let d0 = serial - 1;
    let n400 = d0.div_euclid(146_097);
    let d1 = d0.rem_euclid(146_097);
    let n100 = d1 / 36_524;
    let d2 = d1 % 36_524;
    let n4 = d2 / 1_461;
    let d3 = d2 % 1_461;
    let n1 = d3 / 365;
    let year = 400 * n400 + 100 * n100 + 4 * n4 + n1;
    // Dec 31 of a leap year (or of a 400-year cycle) ends the previous year.
    if n100 == 4 || n1 == 4 {
        year
    } else {
        year + 1
    }
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: Serial) -> (Year, u8, u8) {
    let year = year_from_serial(serial);
    let prior_days = serial - serial_from_ymd(year, 1, 1);
    let correction = if serial < serial_from_ymd(year, 3, 1) {
        0
    } else if is_leap_year(year) {
        1
    } else {
        2
    };
    let month = ((12 * (prior_days + correction) + 373) / 367) as u8;
    let day = (serial - serial_from_ymd(year, month, 1) + 1) as u8;
    (year, month, day)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
