//! Switzerland and the canton of Obwalden.
//!
//! Only Swiss National Day is a federal public holiday. New Year's Day,
//! Ascension and Christmas are equal to Sundays under federal law; the
//! remaining days are set by the cantons.

use hol_core::errors::Result;
use hol_time::Month;

use super::holiday;
use crate::descriptor::{HolidayDescriptor, HolidayType};
use crate::region::RegionProfile;
use crate::rule::HolidayRule;

/// Region id of Switzerland.
pub const ID: &str = "CH";

/// Region id of Obwalden.
pub const OBWALDEN: &str = "CH-OW";

/// The `CH` and `CH-OW` profiles.
pub fn profiles() -> Result<Vec<RegionProfile>> {
    Ok(vec![switzerland()?, obwalden()?])
}

/// A cantonal or Sunday-equivalent day.
fn other(key: &str, rule: HolidayRule, en: &str, de: &str) -> Result<HolidayDescriptor> {
    holiday(key, rule, &[("en", en), ("de", de)])
        .holiday_type(HolidayType::Other)
        .build()
}

fn switzerland() -> Result<RegionProfile> {
    RegionProfile::builder(ID, "Switzerland", "Europe/Zurich")
        .holiday(other(
            "newYearsDay",
            HolidayRule::fixed_date(Month::January, 1)?,
            "New Year's Day",
            "Neujahr",
        )?)
        .holiday(other(
            "ascensionDay",
            HolidayRule::easter_offset(39)?,
            "Ascension Day",
            "Auffahrt",
        )?)
        .holiday(
            holiday(
                "swissNationalDay",
                HolidayRule::fixed_date(Month::August, 1)?,
                &[
                    ("en", "National Day"),
                    ("de", "Bundesfeiertag"),
                    ("fr", "Fête nationale"),
                    ("it", "Festa nazionale"),
                    ("rm", "Festa naziunala"),
                ],
            )
            .valid_from(1994)
            .build()?,
        )
        .holiday(other(
            "christmasDay",
            HolidayRule::fixed_date(Month::December, 25)?,
            "Christmas Day",
            "Weihnachtstag",
        )?)
        .build()
}

fn obwalden() -> Result<RegionProfile> {
    RegionProfile::builder(OBWALDEN, "Obwalden", "Europe/Zurich")
        .parent(ID)
        .holidays([
            other(
                "berchtoldsTag",
                HolidayRule::fixed_date(Month::January, 2)?,
                "Berchtold's Day",
                "Berchtoldstag",
            )?,
            other("goodFriday", HolidayRule::easter_offset(-2)?, "Good Friday", "Karfreitag")?,
            other("easterMonday", HolidayRule::easter_offset(1)?, "Easter Monday", "Ostermontag")?,
            other(
                "pentecostMonday",
                HolidayRule::easter_offset(50)?,
                "Whit Monday",
                "Pfingstmontag",
            )?,
            other(
                "corpusChristi",
                HolidayRule::easter_offset(60)?,
                "Corpus Christi",
                "Fronleichnam",
            )?,
            other(
                "assumptionOfMary",
                HolidayRule::fixed_date(Month::August, 15)?,
                "Assumption of Mary",
                "Mariä Himmelfahrt",
            )?,
            holiday(
                "bruderKlausenFest",
                HolidayRule::fixed_date(Month::September, 25)?,
                &[("en", "Saint Nicholas of Flüe"), ("de", "Bruder-Klausen-Fest")],
            )
            .valid_from(1947)
            .holiday_type(HolidayType::Other)
            .build()?,
            other(
                "allSaintsDay",
                HolidayRule::fixed_date(Month::November, 1)?,
                "All Saints' Day",
                "Allerheiligen",
            )?,
            other(
                "immaculateConception",
                HolidayRule::fixed_date(Month::December, 8)?,
                "Immaculate Conception",
                "Mariä Empfängnis",
            )?,
            other(
                "stStephensDay",
                HolidayRule::fixed_date(Month::December, 26)?,
                "St. Stephen's Day",
                "Stephanstag",
            )?,
        ])
        .build()
}
