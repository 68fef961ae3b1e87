//! Canada and Prince Edward Island.

use hol_core::errors::Result;
use hol_time::{Month, ObservanceShift, Ordinal, Weekday};

use super::holiday;
use crate::descriptor::HolidayType;
use crate::region::RegionProfile;
use crate::rule::HolidayRule;

/// Region id of Canada.
pub const ID: &str = "CA";

/// Region id of Prince Edward Island.
pub const PRINCE_EDWARD_ISLAND: &str = "CA-PE";

/// The `CA` and `CA-PE` profiles.
pub fn profiles() -> Result<Vec<RegionProfile>> {
    Ok(vec![canada()?, prince_edward_island()?])
}

fn canada() -> Result<RegionProfile> {
    RegionProfile::builder(ID, "Canada", "America/Toronto")
        .holiday(
            holiday(
                "newYearsDay",
                HolidayRule::fixed_date(Month::January, 1)?,
                &[("en", "New Year's Day"), ("fr", "Jour de l'An")],
            )
            .build()?,
        )
        .holiday(
            holiday(
                "goodFriday",
                HolidayRule::easter_offset(-2)?,
                &[("en", "Good Friday"), ("fr", "Vendredi saint")],
            )
            .build()?,
        )
        .holiday(
            holiday(
                "canadaDay",
                HolidayRule::fixed_date(Month::July, 1)?,
                &[("en", "Canada Day"), ("fr", "Fête du Canada")],
            )
            .valid_from(1879)
            .observance(ObservanceShift::NextMonday)
            .build()?,
        )
        .holiday(
            holiday(
                "labourDay",
                HolidayRule::nth_weekday(Month::September, Weekday::Monday, Ordinal::First),
                &[("en", "Labour Day"), ("fr", "Fête du travail")],
            )
            .valid_from(1894)
            .build()?,
        )
        .holiday(
            holiday(
                "thanksgivingDay",
                HolidayRule::nth_weekday(Month::October, Weekday::Monday, Ordinal::Second),
                &[("en", "Thanksgiving"), ("fr", "Action de grâce")],
            )
            .valid_from(1957)
            .build()?,
        )
        .holiday(
            holiday(
                "remembranceDay",
                HolidayRule::fixed_date(Month::November, 11)?,
                &[("en", "Remembrance Day"), ("fr", "Jour du souvenir")],
            )
            .valid_from(1931)
            .holiday_type(HolidayType::Observance)
            .build()?,
        )
        .holiday(
            holiday(
                "christmasDay",
                HolidayRule::fixed_date(Month::December, 25)?,
                &[("en", "Christmas Day"), ("fr", "Noël")],
            )
            .build()?,
        )
        .holiday(
            holiday(
                "boxingDay",
                HolidayRule::fixed_date(Month::December, 26)?,
                &[("en", "Boxing Day"), ("fr", "Lendemain de Noël")],
            )
            .build()?,
        )
        .build()
}

fn prince_edward_island() -> Result<RegionProfile> {
    RegionProfile::builder(PRINCE_EDWARD_ISLAND, "Prince Edward Island", "America/Halifax")
        .parent(ID)
        .holiday(
            holiday(
                "islanderDay",
                HolidayRule::nth_weekday(Month::February, Weekday::Monday, Ordinal::Third),
                &[("en", "Islander Day"), ("fr", "Fête des Insulaires")],
            )
            .valid_from(2009)
            .build()?,
        )
        .holiday(
            holiday(
                "victoriaDay",
                HolidayRule::weekday_on_or_before(Month::May, 24, Weekday::Monday)?,
                &[("en", "Victoria Day"), ("fr", "Fête de la Reine")],
            )
            .valid_from(1845)
            .build()?,
        )
        .holiday(
            holiday(
                "goldCupParadeDay",
                HolidayRule::nth_weekday(Month::August, Weekday::Friday, Ordinal::Third),
                &[("en", "Gold Cup Parade Day"), ("fr", "Défilé de la coupe d'or")],
            )
            .valid_from(1962)
            .build()?,
        )
        .build()
}
