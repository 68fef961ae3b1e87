//! Lunisolar calendar conversion.
//!
//! A [`LunisolarCalendar`] knows its own leap-month schedule and month
//! lengths and converts dates to and from the proleptic Gregorian calendar
//! through day-count arithmetic. The [`LunisolarCalendarConverter`] looks
//! calendars up by name so that holiday rules can refer to them as data.
//!
//! Because a lunisolar year straddles two Gregorian years, each calendar
//! also defines a *nominal* lunisolar year for a given Gregorian year and
//! month: the cycle in which that month usually falls inside the Gregorian
//! year. What happens when it does not is a [`LunisolarPolicy`] decision.

use std::collections::BTreeMap;
use std::str::FromStr;
use std::sync::Arc;

use crate::date::Date;
use hol_core::errors::{Error, Result};
use hol_core::Year;

/// The Hebrew calendar.
pub mod hebrew;

pub use hebrew::{Hebrew, HebrewMonth};

/// A month of a lunisolar year.
///
/// `intercalary` marks the leap month inserted in designated years; what
/// `number` it attaches to is calendar-specific (see [`Hebrew`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunisolarMonth {
    /// Calendar-specific month number.
    pub number: u8,
    /// `true` for the intercalary (leap) month.
    pub intercalary: bool,
}

impl LunisolarMonth {
    /// A month, optionally intercalary.
    pub const fn new(number: u8, intercalary: bool) -> Self {
        Self { number, intercalary }
    }

    /// A regular (non-intercalary) month.
    pub const fn regular(number: u8) -> Self {
        Self::new(number, false)
    }
}

impl std::fmt::Display for LunisolarMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.intercalary {
            write!(f, "{} (intercalary)", self.number)
        } else {
            write!(f, "{}", self.number)
        }
    }
}

/// A date in a lunisolar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunisolarDate {
    /// Lunisolar year.
    pub year: Year,
    /// Month within that year.
    pub month: LunisolarMonth,
    /// Day of the month (1-based).
    pub day: u8,
}

impl LunisolarDate {
    /// Create a lunisolar date (unvalidated; calendars validate on
    /// conversion).
    pub const fn new(year: Year, month: LunisolarMonth, day: u8) -> Self {
        Self { year, month, day }
    }
}

/// What to do when a lunisolar date converted for Gregorian year `G` lands
/// outside `G`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum LunisolarPolicy {
    /// Report the date of the nominal lunisolar year unchanged, even if it
    /// falls in an adjacent Gregorian year.
    #[default]
    ReportAsIs,
    /// Recompute with the adjacent lunisolar year toward `G`. If that does
    /// not land in `G` either, the date has no occurrence in `G`.
    Reanchor,
}

impl FromStr for LunisolarPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "report_as_is" => Ok(LunisolarPolicy::ReportAsIs),
            "reanchor" => Ok(LunisolarPolicy::Reanchor),
            other => Err(Error::Config(format!("unknown lunisolar policy '{other}'"))),
        }
    }
}

/// A lunisolar calendar system.
pub trait LunisolarCalendar: std::fmt::Debug + Send + Sync {
    /// Registry name (lower case, e.g. `"hebrew"`).
    fn name(&self) -> &str;

    /// Return `true` if `year` contains the intercalary month.
    fn is_leap_year(&self, year: Year) -> bool;

    /// Number of months in `year`.
    fn months_in_year(&self, year: Year) -> u8;

    /// Number of days in `month` of `year`.
    ///
    /// # Errors
    /// [`Error::InvalidCalendarDate`] if the month does not exist in `year`.
    fn days_in_month(&self, year: Year, month: LunisolarMonth) -> Result<u8>;

    /// Convert a lunisolar date to the Gregorian calendar.
    ///
    /// # Errors
    /// [`Error::InvalidCalendarDate`] if the month or day does not exist;
    /// [`Error::InvalidDate`] if the result leaves the [`Date`] range.
    fn to_gregorian(&self, date: &LunisolarDate) -> Result<Date>;

    /// Convert a Gregorian date to this calendar.
    fn from_gregorian(&self, date: Date) -> Result<LunisolarDate>;

    /// The lunisolar year whose `month` nominally falls in `gregorian_year`.
    fn nominal_year(&self, gregorian_year: Year, month: LunisolarMonth) -> Year;
}

/// Converts lunisolar dates to Gregorian ones, looking calendars up by
/// name.
///
/// The default converter knows the Hebrew calendar; further calendars can be
/// added with [`register`](Self::register).
#[derive(Debug, Clone)]
pub struct LunisolarCalendarConverter {
    calendars: BTreeMap<String, Arc<dyn LunisolarCalendar>>,
}

impl Default for LunisolarCalendarConverter {
    fn default() -> Self {
        let mut converter = Self::empty();
        converter.register(Arc::new(Hebrew));
        converter
    }
}

impl LunisolarCalendarConverter {
    /// A converter with the built-in calendars.
    pub fn new() -> Self {
        Self::default()
    }

    /// A converter that knows no calendars.
    pub fn empty() -> Self {
        Self {
            calendars: BTreeMap::new(),
        }
    }

    /// Register `calendar` under its name, replacing any calendar of the
    /// same name.
    pub fn register(&mut self, calendar: Arc<dyn LunisolarCalendar>) {
        self.calendars
            .insert(calendar.name().to_ascii_lowercase(), calendar);
    }

    /// Names of all registered calendars.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.calendars.keys().map(String::as_str)
    }

    /// Look up a calendar by (case-insensitive) name.
    pub fn calendar(&self, name: &str) -> Result<&dyn LunisolarCalendar> {
        self.calendars
            .get(&name.to_ascii_lowercase())
            .map(|c| c.as_ref())
            .ok_or_else(|| Error::UnsupportedCalendar(name.to_string()))
    }

    /// Gregorian date of `month`/`day` in the lunisolar year nominally
    /// corresponding to `gregorian_year`.
    ///
    /// The result may fall outside `gregorian_year`; see
    /// [`convert_in_year`](Self::convert_in_year).
    pub fn convert(
        &self,
        calendar: &str,
        gregorian_year: Year,
        month: u8,
        day: u8,
        intercalary: bool,
    ) -> Result<Date> {
        let cal = self.calendar(calendar)?;
        check_year(gregorian_year)?;
        let month = LunisolarMonth::new(month, intercalary);
        let year = cal.nominal_year(gregorian_year, month);
        cal.to_gregorian(&LunisolarDate::new(year, month, day))
    }

    /// Like [`convert`](Self::convert), resolving dates that fall outside
    /// `gregorian_year` according to `policy`.
    ///
    /// Returns `Ok(None)` when, under [`LunisolarPolicy::Reanchor`], no
    /// occurrence of the date falls inside `gregorian_year`.
    pub fn convert_in_year(
        &self,
        calendar: &str,
        gregorian_year: Year,
        month: LunisolarMonth,
        day: u8,
        policy: LunisolarPolicy,
    ) -> Result<Option<Date>> {
        let cal = self.calendar(calendar)?;
        check_year(gregorian_year)?;
        let nominal = cal.nominal_year(gregorian_year, month);
        let date = cal.to_gregorian(&LunisolarDate::new(nominal, month, day))?;
        if policy == LunisolarPolicy::ReportAsIs || date.year() == gregorian_year {
            return Ok(Some(date));
        }
        let adjacent = if date.year() < gregorian_year {
            nominal + 1
        } else {
            nominal - 1
        };
        match cal.to_gregorian(&LunisolarDate::new(adjacent, month, day)) {
            Ok(d) if d.year() == gregorian_year => Ok(Some(d)),
            Ok(_) | Err(Error::InvalidCalendarDate(_)) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Convert a lunisolar date of the named calendar to a Gregorian date.
    pub fn to_gregorian(&self, calendar: &str, date: &LunisolarDate) -> Result<Date> {
        self.calendar(calendar)?.to_gregorian(date)
    }

    /// Convert a Gregorian date to the named calendar.
    pub fn from_gregorian(&self, calendar: &str, date: Date) -> Result<LunisolarDate> {
        self.calendar(calendar)?.from_gregorian(date)
    }
}

fn check_year(year: Year) -> Result<()> {
    if !(Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year) {
        return Err(Error::UnsupportedYear {
            year,
            algorithm: "lunisolar conversion",
            min: Date::MIN_YEAR,
            max: Date::MAX_YEAR,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEVET: LunisolarMonth = LunisolarMonth::regular(10);

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn convert_rosh_hashanah_2024() {
        let conv = LunisolarCalendarConverter::new();
        assert_eq!(conv.convert("hebrew", 2024, 7, 1, false).unwrap(), date(2024, 10, 3));
        assert_eq!(conv.convert("Hebrew", 2024, 7, 1, false).unwrap(), date(2024, 10, 3));
    }

    #[test]
    fn unknown_calendar() {
        let conv = LunisolarCalendarConverter::new();
        assert_eq!(
            conv.convert("mayan", 2024, 1, 1, false),
            Err(Error::UnsupportedCalendar("mayan".into()))
        );
        assert!(LunisolarCalendarConverter::empty().calendar("hebrew").is_err());
    }

    #[test]
    fn report_as_is_keeps_out_of_year_date() {
        let conv = LunisolarCalendarConverter::new();
        // 10 Tevet 5784 is 2023-12-22: nominal for 2024, but outside it.
        let d = conv
            .convert_in_year("hebrew", 2024, TEVET, 10, LunisolarPolicy::ReportAsIs)
            .unwrap();
        assert_eq!(d, Some(date(2023, 12, 22)));
    }

    #[test]
    fn reanchor_finds_no_occurrence() {
        let conv = LunisolarCalendarConverter::new();
        // 10 Tevet 5785 is 2025-01-10, so 2024 has no 10 Tevet at all.
        let d = conv
            .convert_in_year("hebrew", 2024, TEVET, 10, LunisolarPolicy::Reanchor)
            .unwrap();
        assert_eq!(d, None);
    }

    #[test]
    fn reanchor_moves_to_adjacent_cycle() {
        let conv = LunisolarCalendarConverter::new();
        // Nominal year for 2025 is 5785 (2025-01-10); in range, unchanged.
        let d = conv
            .convert_in_year("hebrew", 2025, TEVET, 10, LunisolarPolicy::Reanchor)
            .unwrap();
        assert_eq!(d, Some(date(2025, 1, 10)));
        // 1 Tevet 5784 is 2023-12-13: nominal for 2024 lands in 2023, the
        // next cycle (1 Tevet 5785) is 2025-01-01, also outside 2024.
        let d = conv
            .convert_in_year("hebrew", 2024, TEVET, 1, LunisolarPolicy::Reanchor)
            .unwrap();
        assert_eq!(d, None);
        // 1 Tevet for 2023 under the nominal mapping is 5783 (2022-12-25);
        // reanchoring picks 5784 (2023-12-13).
        let d = conv
            .convert_in_year("hebrew", 2023, TEVET, 1, LunisolarPolicy::Reanchor)
            .unwrap();
        assert_eq!(d, Some(date(2023, 12, 13)));
    }

    #[test]
    fn years_outside_the_date_range_are_rejected() {
        let conv = LunisolarCalendarConverter::new();
        for year in [0, -5, 10_000, i32::MAX - 10, i32::MIN] {
            assert!(
                matches!(
                    conv.convert("hebrew", year, 7, 1, false),
                    Err(Error::UnsupportedYear { min: 1, max: 9999, .. })
                ),
                "{year}"
            );
            for policy in [LunisolarPolicy::ReportAsIs, LunisolarPolicy::Reanchor] {
                assert!(matches!(
                    conv.convert_in_year("hebrew", year, TEVET, 10, policy),
                    Err(Error::UnsupportedYear { .. })
                ));
            }
        }
        assert!(conv.convert("hebrew", 9999, 7, 1, false).is_ok());
    }

    #[test]
    fn policy_parsing() {
        assert_eq!("reanchor".parse::<LunisolarPolicy>().unwrap(), LunisolarPolicy::Reanchor);
        assert_eq!(
            "report-as-is".parse::<LunisolarPolicy>().unwrap(),
            LunisolarPolicy::ReportAsIs
        );
        assert!("guess".parse::<LunisolarPolicy>().is_err());
        assert_eq!(LunisolarPolicy::default(), LunisolarPolicy::ReportAsIs);
    }
}
