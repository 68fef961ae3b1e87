//! Rolling a date off weekends and holidays.

use std::str::FromStr;

use hol_core::errors::Error;

/// Where to move a date that is not a business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessDayConvention {
    /// Leave the date as it is.
    Unadjusted,
    /// Roll forward to the next business day.
    Following,
    /// Roll forward, unless that crosses into the next month; then roll
    /// back instead.
    ModifiedFollowing,
    /// Roll back to the previous business day.
    Preceding,
    /// Roll back, unless that crosses into the previous month; then roll
    /// forward instead.
    ModifiedPreceding,
    /// Roll to whichever business day is closer, forward on a tie.
    Nearest,
}

impl BusinessDayConvention {
    /// All conventions.
    pub const ALL: [BusinessDayConvention; 6] = [
        BusinessDayConvention::Unadjusted,
        BusinessDayConvention::Following,
        BusinessDayConvention::ModifiedFollowing,
        BusinessDayConvention::Preceding,
        BusinessDayConvention::ModifiedPreceding,
        BusinessDayConvention::Nearest,
    ];

    /// Lower-case name with spaces (`"modified following"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            BusinessDayConvention::Unadjusted => "unadjusted",
            BusinessDayConvention::Following => "following",
            BusinessDayConvention::ModifiedFollowing => "modified following",
            BusinessDayConvention::Preceding => "preceding",
            BusinessDayConvention::ModifiedPreceding => "modified preceding",
            BusinessDayConvention::Nearest => "nearest",
        }
    }
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BusinessDayConvention {
    type Err = Error;

    /// Case-insensitive; `-` and `_` may stand for spaces.
    fn from_str(s: &str) -> Result<Self, Error> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', '_'], " ");
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == normalized)
            .ok_or_else(|| Error::InvalidRule(format!("unknown business-day convention '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_and_display() {
        for c in BusinessDayConvention::ALL {
            assert_eq!(c.to_string().parse::<BusinessDayConvention>().unwrap(), c);
        }
        assert_eq!(
            "Modified_Following".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert!("end of month".parse::<BusinessDayConvention>().is_err());
    }
}
