//! Holiday descriptors: a rule plus everything needed to report it.

use std::collections::BTreeMap;
use std::str::FromStr;

use hol_core::errors::{Error, Result};
use hol_core::{ensure, Year};
use hol_time::ObservanceShift;

use crate::rule::HolidayRule;

/// Category of a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum HolidayType {
    /// Statutory public holiday.
    #[default]
    Official,
    /// Observed but not a day off.
    Observance,
    /// Start of a season (solstice, equinox).
    Season,
    /// Bank holiday.
    Bank,
    /// Regional or otherwise unclassified day.
    Other,
}

impl HolidayType {
    /// All holiday types.
    pub const ALL: [HolidayType; 5] = [
        HolidayType::Official,
        HolidayType::Observance,
        HolidayType::Season,
        HolidayType::Bank,
        HolidayType::Other,
    ];

    /// Lower-case name, as used in catalogs.
    pub fn as_str(&self) -> &'static str {
        match self {
            HolidayType::Official => "official",
            HolidayType::Observance => "observance",
            HolidayType::Season => "season",
            HolidayType::Bank => "bank",
            HolidayType::Other => "other",
        }
    }
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HolidayType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| Error::InvalidRule(format!("unknown holiday type '{s}'")))
    }
}

/// Canonical form of a locale tag: lower case, `_` as separator.
fn normalize_locale(locale: &str) -> String {
    locale.trim().replace('-', "_").to_ascii_lowercase()
}

/// Localized names of a holiday, keyed by locale tag.
///
/// Tags compare case-insensitively and treat `-` and `_` alike, so `fr-CA`
/// and `fr_ca` name the same locale.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayNames {
    names: BTreeMap<String, String>,
}

impl HolidayNames {
    /// No names.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the name for `locale`.
    pub fn with(mut self, locale: &str, name: &str) -> Self {
        self.insert(locale, name);
        self
    }

    /// Add (or replace) the name for `locale`.
    pub fn insert(&mut self, locale: &str, name: &str) {
        self.names.insert(normalize_locale(locale), name.to_string());
    }

    /// The name for exactly `locale`.
    ///
    /// # Errors
    /// [`Error::UnknownLocale`] if there is no name for `locale`. The error's
    /// `key` is left empty; [`HolidayDescriptor::name`] fills it in.
    pub fn get(&self, locale: &str) -> Result<&str> {
        self.names
            .get(&normalize_locale(locale))
            .map(String::as_str)
            .ok_or_else(|| Error::UnknownLocale {
                key: String::new(),
                locale: locale.to_string(),
            })
    }

    /// The name for `locale`, falling back to its language subtag
    /// (`fr_CA` → `fr`) and then to `fallback`.
    pub fn resolve(&self, locale: &str, fallback: &str) -> Result<&str> {
        let normalized = normalize_locale(locale);
        let language = normalized.split('_').next().unwrap_or_default();
        let found = [normalized.as_str(), language, fallback]
            .into_iter()
            .find_map(|tag| self.get(tag).ok())
            .ok_or_else(|| Error::UnknownLocale {
                key: String::new(),
                locale: locale.to_string(),
            });
        found
    }

    /// Locale tags with a name, in normalized form.
    pub fn locales(&self) -> impl Iterator<Item = &str> {
        self.names.keys().map(String::as_str)
    }

    /// Number of locales.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Return `true` if there are no names.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, &'a str)> for HolidayNames {
    fn from_iter<I: IntoIterator<Item = (&'a str, &'a str)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |names, (locale, name)| names.with(locale, name))
    }
}

/// A holiday of a region catalog.
///
/// Built once through [`HolidayDescriptor::builder`] and immutable
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidayDescriptor {
    key: String,
    names: HolidayNames,
    rule: HolidayRule,
    valid_from: Option<Year>,
    valid_until: Option<Year>,
    observance: ObservanceShift,
    holiday_type: HolidayType,
}

impl HolidayDescriptor {
    /// Start building a descriptor for `key` following `rule`.
    pub fn builder(key: &str, rule: HolidayRule) -> DescriptorBuilder {
        DescriptorBuilder {
            key: key.trim().to_string(),
            names: HolidayNames::new(),
            rule,
            valid_from: None,
            valid_until: None,
            observance: ObservanceShift::None,
            holiday_type: HolidayType::Official,
        }
    }

    /// Canonical key (e.g. `"islanderDay"`).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Localized names.
    pub fn names(&self) -> &HolidayNames {
        &self.names
    }

    /// Date rule.
    pub fn rule(&self) -> &HolidayRule {
        &self.rule
    }

    /// First year the holiday is observed, if bounded.
    pub fn valid_from(&self) -> Option<Year> {
        self.valid_from
    }

    /// Last year the holiday is observed, if bounded.
    pub fn valid_until(&self) -> Option<Year> {
        self.valid_until
    }

    /// Weekend observance shift.
    pub fn observance(&self) -> ObservanceShift {
        self.observance
    }

    /// Holiday category.
    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }

    /// Return `true` if `year` lies within the validity bounds.
    pub fn is_active_in(&self, year: Year) -> bool {
        self.valid_from.map_or(true, |from| year >= from)
            && self.valid_until.map_or(true, |until| year <= until)
    }

    /// Name for `locale` with language and `fallback` fallbacks.
    ///
    /// # Errors
    /// [`Error::UnknownLocale`] carrying this descriptor's key.
    pub fn name(&self, locale: &str, fallback: &str) -> Result<&str> {
        self.names.resolve(locale, fallback).map_err(|e| match e {
            Error::UnknownLocale { locale, .. } => Error::UnknownLocale {
                key: self.key.clone(),
                locale,
            },
            other => other,
        })
    }
}

/// Builder for [`HolidayDescriptor`].
#[derive(Debug, Clone)]
pub struct DescriptorBuilder {
    key: String,
    names: HolidayNames,
    rule: HolidayRule,
    valid_from: Option<Year>,
    valid_until: Option<Year>,
    observance: ObservanceShift,
    holiday_type: HolidayType,
}

impl DescriptorBuilder {
    /// Add the name for `locale`.
    pub fn name(mut self, locale: &str, name: &str) -> Self {
        self.names.insert(locale, name);
        self
    }

    /// Replace all names.
    pub fn names(mut self, names: HolidayNames) -> Self {
        self.names = names;
        self
    }

    /// First year of observance.
    pub fn valid_from(mut self, year: Year) -> Self {
        self.valid_from = Some(year);
        self
    }

    /// Last year of observance.
    pub fn valid_until(mut self, year: Year) -> Self {
        self.valid_until = Some(year);
        self
    }

    /// Weekend observance shift.
    pub fn observance(mut self, shift: ObservanceShift) -> Self {
        self.observance = shift;
        self
    }

    /// Holiday category.
    pub fn holiday_type(mut self, holiday_type: HolidayType) -> Self {
        self.holiday_type = holiday_type;
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    /// [`Error::InvalidRule`] if the key is empty, there are no names, or
    /// `valid_from > valid_until`.
    pub fn build(self) -> Result<HolidayDescriptor> {
        ensure!(!self.key.is_empty(), InvalidRule, "holiday key must not be empty");
        ensure!(
            !self.names.is_empty(),
            InvalidRule,
            "holiday '{}' has no names",
            self.key
        );
        if let (Some(from), Some(until)) = (self.valid_from, self.valid_until) {
            ensure!(
                from <= until,
                InvalidRule,
                "holiday '{}': valid from {from} is after valid until {until}",
                self.key
            );
        }
        Ok(HolidayDescriptor {
            key: self.key,
            names: self.names,
            rule: self.rule,
            valid_from: self.valid_from,
            valid_until: self.valid_until,
            observance: self.observance,
            holiday_type: self.holiday_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hol_time::Month;

    fn christmas() -> DescriptorBuilder {
        let rule = HolidayRule::fixed_date(Month::December, 25).unwrap();
        HolidayDescriptor::builder("christmasDay", rule)
            .name("en", "Christmas Day")
            .name("fr", "Noël")
    }

    #[test]
    fn strict_get() {
        let d = christmas().build().unwrap();
        assert_eq!(d.names().get("fr").unwrap(), "Noël");
        assert_eq!(d.names().get("FR").unwrap(), "Noël");
        assert!(matches!(d.names().get("fr_CA"), Err(Error::UnknownLocale { .. })));
    }

    #[test]
    fn resolve_falls_back() {
        let d = christmas().name("de_CH", "Weihnachtstag").build().unwrap();
        assert_eq!(d.name("de-CH", "en").unwrap(), "Weihnachtstag");
        assert_eq!(d.name("fr_CA", "en").unwrap(), "Noël");
        assert_eq!(d.name("it", "en").unwrap(), "Christmas Day");
        assert_eq!(
            d.name("it", "nl"),
            Err(Error::UnknownLocale {
                key: "christmasDay".into(),
                locale: "it".into()
            })
        );
    }

    #[test]
    fn resolved_name_borrows_from_names() {
        let names: HolidayNames = [("en", "Labour Day"), ("fr", "Fête du Travail")]
            .into_iter()
            .collect();
        let name = {
            let locale = String::from("FR-ca");
            names.resolve(&locale, "en").unwrap()
        };
        assert_eq!(name, "Fête du Travail");
        assert_eq!(names.resolve("de", "en").unwrap(), "Labour Day");
        assert!(matches!(
            names.resolve("de", "it"),
            Err(Error::UnknownLocale { .. })
        ));
    }

    #[test]
    fn validity_window() {
        let d = christmas().valid_from(2009).build().unwrap();
        assert!(!d.is_active_in(2008));
        assert!(d.is_active_in(2009));
        assert!(d.is_active_in(9999));

        let d = christmas().valid_from(1962).valid_until(1970).build().unwrap();
        assert!(d.is_active_in(1970));
        assert!(!d.is_active_in(1971));
    }

    #[test]
    fn builder_validation() {
        assert!(matches!(
            christmas().valid_from(2010).valid_until(2009).build(),
            Err(Error::InvalidRule(_))
        ));
        let rule = HolidayRule::fixed_date(Month::January, 1).unwrap();
        assert!(HolidayDescriptor::builder("  ", rule.clone()).name("en", "x").build().is_err());
        assert!(HolidayDescriptor::builder("nameless", rule).build().is_err());
    }

    #[test]
    fn defaults() {
        let d = christmas().build().unwrap();
        assert_eq!(d.observance(), ObservanceShift::None);
        assert_eq!(d.holiday_type(), HolidayType::Official);
        assert_eq!(d.valid_from(), None);
    }

    #[test]
    fn holiday_type_parsing() {
        assert_eq!("Bank".parse::<HolidayType>().unwrap(), HolidayType::Bank);
        assert!("national".parse::<HolidayType>().is_err());
        assert_eq!(HolidayType::Observance.to_string(), "observance");
    }

    #[test]
    fn names_from_pairs() {
        let names: HolidayNames = [("en", "Purim"), ("he", "פורים")].into_iter().collect();
        assert_eq!(names.len(), 2);
        assert_eq!(names.locales().collect::<Vec<_>>(), vec!["en", "he"]);
    }
}
