//! Holiday rules: how a holiday's date is derived from a year.
//!
//! A [`HolidayRule`] is pure data. Evaluating it dispatches to the matching
//! evaluator in `hol-time` (Gregorian rules, the Easter computus, or a
//! lunisolar calendar) and never consults anything but its inputs.

use hol_core::errors::{Error, Result};
use hol_core::{ensure, DayOffset, Year};
use hol_time::{
    easter, gregorian, Date, LunisolarCalendarConverter, LunisolarMonth, LunisolarPolicy, Month,
    Ordinal, Weekday,
};

/// Largest Easter offset accepted, in days.
pub const MAX_EASTER_OFFSET: DayOffset = 366;

/// Largest month number a lunisolar rule may name.
const MAX_LUNISOLAR_MONTH: u8 = 13;

/// Longest lunisolar month.
const MAX_LUNISOLAR_DAY: u8 = 30;

/// How a holiday's date is derived for a given year.
///
/// Construct through the validating constructors ([`fixed_date`],
/// [`easter_offset`], …); they reject values no year could satisfy.
///
/// [`fixed_date`]: HolidayRule::fixed_date
/// [`easter_offset`]: HolidayRule::easter_offset
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HolidayRule {
    /// The same month and day every year.
    FixedDate {
        /// Month.
        month: Month,
        /// Day of the month.
        day: u8,
    },
    /// The n-th (or last) given weekday of a month.
    NthWeekdayOfMonth {
        /// Month.
        month: Month,
        /// Weekday.
        weekday: Weekday,
        /// Which occurrence.
        ordinal: Ordinal,
    },
    /// The latest given weekday on or before a month and day.
    WeekdayOnOrBefore {
        /// Month of the boundary date.
        month: Month,
        /// Day of the boundary date.
        day: u8,
        /// Weekday.
        weekday: Weekday,
    },
    /// Western Easter Sunday plus a number of days.
    EasterOffset {
        /// Days after (or, if negative, before) Easter Sunday.
        days: DayOffset,
    },
    /// Orthodox Easter Sunday plus a number of days.
    OrthodoxEasterOffset {
        /// Days after (or, if negative, before) Orthodox Easter Sunday.
        days: DayOffset,
    },
    /// A date in a lunisolar calendar, converted for each Gregorian year.
    LunisolarDate {
        /// Registered calendar name (e.g. `"hebrew"`).
        calendar: String,
        /// Month, possibly intercalary.
        month: LunisolarMonth,
        /// Day of the month.
        day: u8,
    },
}

impl HolidayRule {
    /// `month`/`day` every year.
    ///
    /// # Errors
    /// [`Error::InvalidRule`] if `day` exceeds the longest length of `month`
    /// (February 29 is accepted).
    pub fn fixed_date(month: Month, day: u8) -> Result<Self> {
        check_day(month, day)?;
        Ok(HolidayRule::FixedDate { month, day })
    }

    /// The `ordinal` `weekday` of `month`.
    pub fn nth_weekday(month: Month, weekday: Weekday, ordinal: Ordinal) -> Self {
        HolidayRule::NthWeekdayOfMonth {
            month,
            weekday,
            ordinal,
        }
    }

    /// The latest `weekday` on or before `month`/`day`.
    pub fn weekday_on_or_before(month: Month, day: u8, weekday: Weekday) -> Result<Self> {
        check_day(month, day)?;
        Ok(HolidayRule::WeekdayOnOrBefore {
            month,
            day,
            weekday,
        })
    }

    /// Western Easter Sunday shifted by `days`.
    pub fn easter_offset(days: DayOffset) -> Result<Self> {
        check_offset(days)?;
        Ok(HolidayRule::EasterOffset { days })
    }

    /// Orthodox Easter Sunday shifted by `days`.
    pub fn orthodox_easter_offset(days: DayOffset) -> Result<Self> {
        check_offset(days)?;
        Ok(HolidayRule::OrthodoxEasterOffset { days })
    }

    /// `day` of `month` in the named lunisolar calendar.
    ///
    /// Only the ranges shared by all lunisolar calendars are checked here;
    /// whether the month exists in a particular year is decided on
    /// evaluation.
    pub fn lunisolar(calendar: &str, month: impl Into<LunisolarMonth>, day: u8) -> Result<Self> {
        let month = month.into();
        let calendar = calendar.trim();
        ensure!(!calendar.is_empty(), InvalidRule, "lunisolar rule needs a calendar name");
        ensure!(
            (1..=MAX_LUNISOLAR_MONTH).contains(&month.number),
            InvalidRule,
            "lunisolar month {} out of range [1, {MAX_LUNISOLAR_MONTH}]",
            month.number
        );
        ensure!(
            (1..=MAX_LUNISOLAR_DAY).contains(&day),
            InvalidRule,
            "lunisolar day {day} out of range [1, {MAX_LUNISOLAR_DAY}]"
        );
        Ok(HolidayRule::LunisolarDate {
            calendar: calendar.to_ascii_lowercase(),
            month,
            day,
        })
    }

    /// The date this rule yields in `year`.
    ///
    /// Returns `Ok(None)` only for lunisolar rules under
    /// [`LunisolarPolicy::Reanchor`] when no occurrence falls in `year`.
    ///
    /// # Errors
    /// Whatever the underlying evaluator reports: [`Error::InvalidDate`],
    /// [`Error::RuleUnsatisfiable`], [`Error::UnsupportedYear`],
    /// [`Error::UnsupportedCalendar`] or [`Error::InvalidCalendarDate`].
    pub fn evaluate(
        &self,
        year: Year,
        converter: &LunisolarCalendarConverter,
        policy: LunisolarPolicy,
    ) -> Result<Option<Date>> {
        let date = match self {
            HolidayRule::FixedDate { month, day } => gregorian::fixed_date(year, *month, *day)?,
            HolidayRule::NthWeekdayOfMonth {
                month,
                weekday,
                ordinal,
            } => gregorian::nth_weekday_of_month(year, *month, *weekday, *ordinal)?,
            HolidayRule::WeekdayOnOrBefore {
                month,
                day,
                weekday,
            } => gregorian::weekday_on_or_before(year, *month, *day, *weekday)?,
            HolidayRule::EasterOffset { days } => easter::Computus::Western.offset(year, *days)?,
            HolidayRule::OrthodoxEasterOffset { days } => {
                easter::Computus::Orthodox.offset(year, *days)?
            }
            HolidayRule::LunisolarDate {
                calendar,
                month,
                day,
            } => return converter.convert_in_year(calendar, year, *month, *day, policy),
        };
        Ok(Some(date))
    }

    /// Return `true` for rules whose date depends on a lunisolar calendar.
    pub fn is_lunisolar(&self) -> bool {
        matches!(self, HolidayRule::LunisolarDate { .. })
    }
}

fn check_day(month: Month, day: u8) -> Result<()> {
    ensure!(
        (1..=month.max_days()).contains(&day),
        InvalidRule,
        "day {day} out of range [1, {}] for {}",
        month.max_days(),
        month.long_name()
    );
    Ok(())
}

fn check_offset(days: DayOffset) -> Result<()> {
    if days.abs() > MAX_EASTER_OFFSET {
        return Err(Error::InvalidRule(format!(
            "Easter offset {days} exceeds ±{MAX_EASTER_OFFSET} days"
        )));
    }
    Ok(())
}

fn signed(days: DayOffset) -> String {
    match days {
        0 => String::new(),
        d if d > 0 => format!(" +{d}"),
        d => format!(" {d}"),
    }
}

impl std::fmt::Display for HolidayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayRule::FixedDate { month, day } => write!(f, "{} {day}", month.long_name()),
            HolidayRule::NthWeekdayOfMonth {
                month,
                weekday,
                ordinal,
            } => write!(f, "{ordinal} {weekday} of {}", month.long_name()),
            HolidayRule::WeekdayOnOrBefore {
                month,
                day,
                weekday,
            } => write!(f, "{weekday} on or before {} {day}", month.long_name()),
            HolidayRule::EasterOffset { days } => write!(f, "Easter{}", signed(*days)),
            HolidayRule::OrthodoxEasterOffset { days } => {
                write!(f, "Orthodox Easter{}", signed(*days))
            }
            HolidayRule::LunisolarDate {
                calendar,
                month,
                day,
            } => write!(f, "{calendar} month {month} day {day}"),
        }
    }
}
