//! Gregorian rule evaluation: fixed dates and relative-weekday rules.
//!
//! All functions are pure: the same inputs always give the same date or the
//! same error.

use std::str::FromStr;

use crate::date::Date;
use crate::month::Month;
use crate::weekday::Weekday;
use hol_core::errors::{Error, Result};
use hol_core::Year;

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Ordinal {
    /// First occurrence.
    First,
    /// Second occurrence.
    Second,
    /// Third occurrence.
    Third,
    /// Fourth occurrence.
    Fourth,
    /// Fifth occurrence (does not exist in every month).
    Fifth,
    /// Final occurrence, whether it is the fourth or the fifth.
    Last,
}

impl Ordinal {
    /// Construct from a position 1–5.
    pub fn from_position(n: u8) -> Option<Self> {
        match n {
            1 => Some(Ordinal::First),
            2 => Some(Ordinal::Second),
            3 => Some(Ordinal::Third),
            4 => Some(Ordinal::Fourth),
            5 => Some(Ordinal::Fifth),
            _ => None,
        }
    }

    /// Return the position 1–5, or `None` for [`Ordinal::Last`].
    pub fn position(&self) -> Option<u8> {
        match self {
            Ordinal::First => Some(1),
            Ordinal::Second => Some(2),
            Ordinal::Third => Some(3),
            Ordinal::Fourth => Some(4),
            Ordinal::Fifth => Some(5),
            Ordinal::Last => None,
        }
    }
}

impl std::fmt::Display for Ordinal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Ordinal::First => "first",
            Ordinal::Second => "second",
            Ordinal::Third => "third",
            Ordinal::Fourth => "fourth",
            Ordinal::Fifth => "fifth",
            Ordinal::Last => "last",
        };
        write!(f, "{s}")
    }
}

impl FromStr for Ordinal {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(n) = s.parse::<u8>() {
            return Self::from_position(n)
                .ok_or_else(|| Error::InvalidRule(format!("ordinal {n} out of range [1, 5]")));
        }
        match s.to_ascii_lowercase().as_str() {
            "first" | "1st" => Ok(Ordinal::First),
            "second" | "2nd" => Ok(Ordinal::Second),
            "third" | "3rd" => Ok(Ordinal::Third),
            "fourth" | "4th" => Ok(Ordinal::Fourth),
            "fifth" | "5th" => Ok(Ordinal::Fifth),
            "last" => Ok(Ordinal::Last),
            _ => Err(Error::InvalidRule(format!("unknown ordinal '{s}'"))),
        }
    }
}

/// `year-month-day` verbatim.
///
/// # Errors
/// [`Error::InvalidDate`] if the combination does not exist in `year`
/// (February 29 in a common year).
pub fn fixed_date(year: Year, month: Month, day: u8) -> Result<Date> {
    Date::from_month_day(year, month, day)
}

/// The `ordinal`-th `weekday` of `month` in `year`.
///
/// # Errors
/// [`Error::RuleUnsatisfiable`] if the month has no such occurrence (a
/// fifth Monday in a four-Monday month).
pub fn nth_weekday_of_month(
    year: Year,
    month: Month,
    weekday: Weekday,
    ordinal: Ordinal,
) -> Result<Date> {
    match ordinal.position() {
        Some(n) => Date::nth_weekday(n, weekday, year, month.number()),
        None => Date::last_weekday(weekday, year, month.number()),
    }
}

/// The latest `weekday` on or before `month`/`day` of `year`.
///
/// Victoria Day in Canada, for example, is the Monday on or before May 24.
pub fn weekday_on_or_before(year: Year, month: Month, day: u8, weekday: Weekday) -> Result<Date> {
    Date::from_month_day(year, month, day)?.on_or_before(weekday)
}
