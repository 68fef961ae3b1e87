//! YAML region catalogs.
//!
//! A catalog is a list of regions. Rules are tagged by `type`; months,
//! weekdays and ordinals may be given by name or by number.
//!
//! ```yaml
//! regions:
//!   - id: FR
//!     name: France
//!     timezone: Europe/Paris
//!     holidays:
//!       - key: bastilleDay
//!         names: { en: Bastille Day, fr: Fête nationale }
//!         rule: { type: fixed_date, month: july, day: 14 }
//!         valid_from: 1880
//!       - key: whitMonday
//!         names: { en: Whit Monday, fr: Lundi de Pentecôte }
//!         rule: { type: easter_offset, days: 50 }
//!   - id: FR-67
//!     name: Bas-Rhin
//!     timezone: Europe/Paris
//!     parent: FR
//!     holidays:
//!       - key: goodFriday
//!         names: { en: Good Friday, fr: Vendredi saint }
//!         rule: { type: easter_offset, days: -2 }
//! ```
//!
//! Other rule types: `nth_weekday` (`month`, `weekday`, `ordinal`),
//! `weekday_on_or_before` (`month`, `day`, `weekday`),
//! `orthodox_easter_offset` (`days`), and `lunisolar` (`calendar`, `month`,
//! `day`, optional `intercalary`). A region may also carry `weekend`,
//! `replace` (descriptors) and `remove` (keys).

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use hol_core::errors::{Error, Result};
use hol_time::{LunisolarMonth, Month, ObservanceShift, Ordinal, Weekday};
use serde::Deserialize;
use tracing::debug;

use crate::descriptor::{HolidayDescriptor, HolidayType};
use crate::region::RegionProfile;
use crate::rule::HolidayRule;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    regions: Vec<RawRegion>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawRegion {
    id: String,
    name: String,
    timezone: String,
    #[serde(default)]
    parent: Option<String>,
    #[serde(default)]
    weekend: Option<Vec<Token>>,
    #[serde(default)]
    holidays: Vec<RawHoliday>,
    #[serde(default)]
    replace: Vec<RawHoliday>,
    #[serde(default)]
    remove: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawHoliday {
    key: String,
    names: BTreeMap<String, String>,
    rule: RawRule,
    #[serde(default)]
    valid_from: Option<i32>,
    #[serde(default)]
    valid_until: Option<i32>,
    #[serde(default)]
    observance: Option<String>,
    #[serde(default, rename = "type")]
    holiday_type: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
enum RawRule {
    FixedDate {
        month: Token,
        day: u8,
    },
    NthWeekday {
        month: Token,
        weekday: Token,
        ordinal: Token,
    },
    WeekdayOnOrBefore {
        month: Token,
        day: u8,
        weekday: Token,
    },
    EasterOffset {
        days: i32,
    },
    OrthodoxEasterOffset {
        days: i32,
    },
    Lunisolar {
        calendar: String,
        month: u8,
        day: u8,
        #[serde(default)]
        intercalary: bool,
    },
}

/// A scalar given either by name or by number.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Token {
    Number(i64),
    Name(String),
}

impl Token {
    fn parse<T: std::str::FromStr<Err = Error>>(&self) -> Result<T> {
        match self {
            Token::Number(n) => n.to_string().parse(),
            Token::Name(s) => s.parse(),
        }
    }
}

impl RawRule {
    fn into_rule(self) -> Result<HolidayRule> {
        match self {
            RawRule::FixedDate { month, day } => {
                HolidayRule::fixed_date(month.parse::<Month>()?, day)
            }
            RawRule::NthWeekday {
                month,
                weekday,
                ordinal,
            } => Ok(HolidayRule::nth_weekday(
                month.parse::<Month>()?,
                weekday.parse::<Weekday>()?,
                ordinal.parse::<Ordinal>()?,
            )),
            RawRule::WeekdayOnOrBefore {
                month,
                day,
                weekday,
            } => HolidayRule::weekday_on_or_before(month.parse::<Month>()?, day, weekday.parse()?),
            RawRule::EasterOffset { days } => HolidayRule::easter_offset(days),
            RawRule::OrthodoxEasterOffset { days } => HolidayRule::orthodox_easter_offset(days),
            RawRule::Lunisolar {
                calendar,
                month,
                day,
                intercalary,
            } => HolidayRule::lunisolar(&calendar, LunisolarMonth::new(month, intercalary), day),
        }
    }
}

impl RawHoliday {
    fn into_descriptor(self) -> Result<HolidayDescriptor> {
        let mut builder = HolidayDescriptor::builder(&self.key, self.rule.into_rule()?);
        for (locale, name) in &self.names {
            builder = builder.name(locale, name);
        }
        if let Some(year) = self.valid_from {
            builder = builder.valid_from(year);
        }
        if let Some(year) = self.valid_until {
            builder = builder.valid_until(year);
        }
        if let Some(shift) = &self.observance {
            builder = builder.observance(shift.parse::<ObservanceShift>()?);
        }
        if let Some(t) = &self.holiday_type {
            builder = builder.holiday_type(t.parse::<HolidayType>()?);
        }
        builder.build()
    }
}

impl RawRegion {
    fn into_profile(self) -> Result<RegionProfile> {
        let mut builder = RegionProfile::builder(&self.id, &self.name, &self.timezone);
        if let Some(parent) = &self.parent {
            builder = builder.parent(parent);
        }
        if let Some(days) = &self.weekend {
            let days = days
                .iter()
                .map(Token::parse::<Weekday>)
                .collect::<Result<Vec<_>>>()?;
            builder = builder.weekend(days);
        }
        for holiday in self.holidays {
            let key = holiday.key.clone();
            builder = builder.holiday(holiday.into_descriptor().map_err(|e| in_holiday(&key, e))?);
        }
        for holiday in self.replace {
            let key = holiday.key.clone();
            builder = builder.replace(holiday.into_descriptor().map_err(|e| in_holiday(&key, e))?);
        }
        for key in &self.remove {
            builder = builder.remove(key);
        }
        builder.build()
    }
}

fn in_holiday(key: &str, e: Error) -> Error {
    Error::Catalog(format!("holiday '{key}': {e}"))
}

/// Parse a YAML catalog into region profiles.
///
/// # Errors
/// [`Error::Catalog`] naming the offending region (and holiday) for malformed
/// YAML, unknown fields, invalid rules, or unknown time zones.
pub fn parse_str(yaml: &str) -> Result<Vec<RegionProfile>> {
    let raw: RawCatalog =
        serde_yaml::from_str(yaml).map_err(|e| Error::Catalog(format!("malformed catalog: {e}")))?;
    let profiles = raw
        .regions
        .into_iter()
        .map(|region| {
            let id = region.id.clone();
            region
                .into_profile()
                .map_err(|e| Error::Catalog(format!("region '{id}': {e}")))
        })
        .collect::<Result<Vec<_>>>()?;
    debug!(regions = profiles.len(), "parsed holiday catalog");
    Ok(profiles)
}

/// Read and parse a YAML catalog file.
pub fn parse_file(path: &Path) -> Result<Vec<RegionProfile>> {
    let content = fs::read_to_string(path)
        .map_err(|e| Error::Catalog(format!("cannot read {}: {e}", path.display())))?;
    parse_str(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_rule_type() {
        let yaml = r#"
regions:
  - id: ZZ
    name: Test
    timezone: Europe/Athens
    weekend: [friday, 6]
    holidays:
      - key: a
        names: { en: A }
        rule: { type: fixed_date, month: 3, day: 25 }
      - key: b
        names: { en: B }
        rule: { type: nth_weekday, month: May, weekday: mon, ordinal: last }
        observance: next_monday
      - key: c
        names: { en: C }
        rule: { type: weekday_on_or_before, month: may, day: 24, weekday: 1 }
      - key: d
        names: { en: D }
        rule: { type: easter_offset, days: -2 }
        type: bank
      - key: e
        names: { en: E, el: Ε }
        rule: { type: orthodox_easter_offset, days: 1 }
        valid_from: 2000
        valid_until: 2100
      - key: f
        names: { en: F }
        rule: { type: lunisolar, calendar: hebrew, month: 12, day: 14, intercalary: true }
"#;
        let profiles = parse_str(yaml).unwrap();
        assert_eq!(profiles.len(), 1);
        let p = &profiles[0];
        assert_eq!(p.weekend(), Some(&[Weekday::Friday, Weekday::Saturday][..]));
        let h = p.holidays();
        assert_eq!(h.len(), 6);
        assert_eq!(h[0].rule(), &HolidayRule::fixed_date(Month::March, 25).unwrap());
        assert_eq!(h[1].observance(), ObservanceShift::NextMonday);
        assert_eq!(h[3].holiday_type(), HolidayType::Bank);
        assert_eq!(h[4].valid_until(), Some(2100));
        assert_eq!(
            h[5].rule(),
            &HolidayRule::lunisolar("hebrew", LunisolarMonth::new(12, true), 14).unwrap()
        );
    }

    #[test]
    fn errors_name_the_region_and_holiday() {
        let yaml = r#"
regions:
  - id: ZZ
    name: Test
    timezone: UTC
    holidays:
      - key: broken
        names: { en: Broken }
        rule: { type: fixed_date, month: 2, day: 30 }
"#;
        let err = parse_str(yaml).unwrap_err();
        let Error::Catalog(message) = err else {
            panic!("expected a catalog error");
        };
        assert!(message.contains("region 'ZZ'"), "{message}");
        assert!(message.contains("holiday 'broken'"), "{message}");
    }

    #[test]
    fn malformed_documents() {
        assert!(matches!(parse_str("regions: 3"), Err(Error::Catalog(_))));
        assert!(matches!(
            parse_str("regions:\n  - { id: A, name: A, timezone: UTC, colour: red }"),
            Err(Error::Catalog(_))
        ));
        assert!(matches!(
            parse_str("regions:\n  - { id: A, name: A, timezone: Nowhere/Land }"),
            Err(Error::Catalog(_))
        ));
        assert!(matches!(
            parse_file(Path::new("/nonexistent/catalog.yaml")),
            Err(Error::Catalog(_))
        ));
    }
}
