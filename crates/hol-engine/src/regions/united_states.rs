//! United States federal holidays.
//!
//! Fixed-date holidays falling on a weekend are observed on the nearest
//! weekday; New Year's Day may therefore be observed on December 31 of the
//! previous year.

use hol_core::errors::Result;
use hol_time::{Month, ObservanceShift, Ordinal, Weekday};

use super::holiday;
use crate::region::RegionProfile;
use crate::rule::HolidayRule;

/// Region id.
pub const ID: &str = "US";

/// The `US` profile.
pub fn profiles() -> Result<Vec<RegionProfile>> {
    let nearest = ObservanceShift::NearestWeekday;
    let us = RegionProfile::builder(ID, "United States", "America/New_York")
        .holiday(
            holiday(
                "newYearsDay",
                HolidayRule::fixed_date(Month::January, 1)?,
                &[("en", "New Year's Day")],
            )
            .observance(nearest)
            .build()?,
        )
        .holiday(
            holiday(
                "martinLutherKingDay",
                HolidayRule::nth_weekday(Month::January, Weekday::Monday, Ordinal::Third),
                &[("en", "Dr. Martin Luther King Jr's Birthday")],
            )
            .valid_from(1986)
            .build()?,
        )
        .holiday(
            holiday(
                "washingtonsBirthday",
                HolidayRule::nth_weekday(Month::February, Weekday::Monday, Ordinal::Third),
                &[("en", "Washington's Birthday")],
            )
            .build()?,
        )
        .holiday(
            holiday(
                "memorialDay",
                HolidayRule::nth_weekday(Month::May, Weekday::Monday, Ordinal::Last),
                &[("en", "Memorial Day")],
            )
            .build()?,
        )
        .holiday(
            holiday(
                "juneteenth",
                HolidayRule::fixed_date(Month::June, 19)?,
                &[("en", "Juneteenth")],
            )
            .valid_from(2021)
            .observance(nearest)
            .build()?,
        )
        .holiday(
            holiday(
                "independenceDay",
                HolidayRule::fixed_date(Month::July, 4)?,
                &[("en", "Independence Day")],
            )
            .observance(nearest)
            .build()?,
        )
        .holiday(
            holiday(
                "labourDay",
                HolidayRule::nth_weekday(Month::September, Weekday::Monday, Ordinal::First),
                &[("en", "Labor Day")],
            )
            .build()?,
        )
        .holiday(
            holiday(
                "columbusDay",
                HolidayRule::nth_weekday(Month::October, Weekday::Monday, Ordinal::Second),
                &[("en", "Columbus Day")],
            )
            .build()?,
        )
        .holiday(
            holiday(
                "veteransDay",
                HolidayRule::fixed_date(Month::November, 11)?,
                &[("en", "Veterans Day")],
            )
            .observance(nearest)
            .build()?,
        )
        .holiday(
            holiday(
                "thanksgivingDay",
                HolidayRule::nth_weekday(Month::November, Weekday::Thursday, Ordinal::Fourth),
                &[("en", "Thanksgiving Day")],
            )
            .build()?,
        )
        .holiday(
            holiday(
                "christmasDay",
                HolidayRule::fixed_date(Month::December, 25)?,
                &[("en", "Christmas")],
            )
            .observance(nearest)
            .build()?,
        )
        .build()?;
    Ok(vec![us])
}
