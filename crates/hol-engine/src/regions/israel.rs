//! Israel.
//!
//! Festivals follow the Hebrew calendar; the weekend is Friday and
//! Saturday.

use hol_core::errors::Result;
use hol_time::{Hebrew, HebrewMonth, Month, Weekday};

use super::holiday;
use crate::descriptor::HolidayType;
use crate::region::RegionProfile;
use crate::rule::HolidayRule;

/// Region id.
pub const ID: &str = "IL";

fn hebrew(month: HebrewMonth, day: u8) -> Result<HolidayRule> {
    HolidayRule::lunisolar(Hebrew::NAME, month, day)
}

/// The `IL` profile.
pub fn profiles() -> Result<Vec<RegionProfile>> {
    let israel = RegionProfile::builder(ID, "Israel", "Asia/Jerusalem")
        .weekend([Weekday::Friday, Weekday::Saturday])
        .holiday(
            holiday(
                "newYearsDay",
                HolidayRule::fixed_date(Month::January, 1)?,
                &[("en", "New Year's Day"), ("he", "ראש השנה הלועזי")],
            )
            .holiday_type(HolidayType::Observance)
            .build()?,
        )
        .holiday(
            holiday(
                "purim",
                hebrew(HebrewMonth::Adar, 14)?,
                &[("en", "Purim"), ("he", "פורים")],
            )
            .holiday_type(HolidayType::Observance)
            .build()?,
        )
        .holiday(
            holiday(
                "passover",
                hebrew(HebrewMonth::Nisan, 15)?,
                &[("en", "Passover"), ("he", "פסח")],
            )
            .build()?,
        )
        .holiday(
            holiday(
                "independenceDay",
                hebrew(HebrewMonth::Iyar, 5)?,
                &[("en", "Independence Day"), ("he", "יום העצמאות")],
            )
            .valid_from(1949)
            .build()?,
        )
        .holiday(
            holiday(
                "shavuot",
                hebrew(HebrewMonth::Sivan, 6)?,
                &[("en", "Shavuot"), ("he", "שבועות")],
            )
            .build()?,
        )
        .holiday(
            holiday(
                "roshHashanah",
                hebrew(HebrewMonth::Tishrei, 1)?,
                &[("en", "Rosh Hashanah"), ("he", "ראש השנה")],
            )
            .build()?,
        )
        .holiday(
            holiday(
                "yomKippur",
                hebrew(HebrewMonth::Tishrei, 10)?,
                &[("en", "Yom Kippur"), ("he", "יום כיפור")],
            )
            .build()?,
        )
        .holiday(
            holiday(
                "sukkot",
                hebrew(HebrewMonth::Tishrei, 15)?,
                &[("en", "Sukkot"), ("he", "סוכות")],
            )
            .build()?,
        )
        .build()?;
    Ok(vec![israel])
}
