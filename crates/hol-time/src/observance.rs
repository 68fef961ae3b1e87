//! Observance shifts: moving a holiday that falls on a weekend.

use std::str::FromStr;

use crate::date::Date;
use crate::weekday::Weekday;
use hol_core::errors::{Error, Result};

/// How a holiday landing on a Saturday or Sunday is observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ObservanceShift {
    /// Observed on the date itself.
    #[default]
    None,
    /// Saturday and Sunday move forward to the following Monday.
    NextMonday,
    /// Saturday moves back to Friday, Sunday forward to Monday.
    NearestWeekday,
}

impl ObservanceShift {
    /// The observed date for a holiday falling on `date`.
    pub fn apply(self, date: Date) -> Result<Date> {
        match (self, date.weekday()) {
            (ObservanceShift::None, _) => Ok(date),
            (ObservanceShift::NextMonday, Weekday::Saturday) => date.add_days(2),
            (ObservanceShift::NextMonday, Weekday::Sunday) => date.add_days(1),
            (ObservanceShift::NearestWeekday, Weekday::Saturday) => date.add_days(-1),
            (ObservanceShift::NearestWeekday, Weekday::Sunday) => date.add_days(1),
            _ => Ok(date),
        }
    }
}

impl std::fmt::Display for ObservanceShift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ObservanceShift::None => "none",
            ObservanceShift::NextMonday => "next Monday",
            ObservanceShift::NearestWeekday => "nearest weekday",
        };
        write!(f, "{s}")
    }
}

impl FromStr for ObservanceShift {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace(['-', ' '], "_").as_str() {
            "none" => Ok(ObservanceShift::None),
            "next_monday" => Ok(ObservanceShift::NextMonday),
            "nearest_weekday" => Ok(ObservanceShift::NearestWeekday),
            other => Err(Error::InvalidRule(format!("unknown observance shift '{other}'"))),
        }
    }
}
