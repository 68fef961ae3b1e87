//! The holiday computation engine.

use hol_core::errors::{Error, Result};
use hol_core::Year;
use hol_time::LunisolarCalendarConverter;
use tracing::{debug, trace};

use crate::config::EngineConfig;
use crate::descriptor::HolidayDescriptor;
use crate::holiday_set::{ComputedHoliday, HolidaySet};
use crate::region::RegionProfile;
use crate::registry::HolidayRuleRegistry;

/// Computes the holidays of a region for a year.
///
/// The engine owns an immutable registry, a lunisolar converter and its
/// configuration; computing is pure, so one engine can serve any number of
/// threads.
///
/// # Example
/// ```
/// use hol_engine::{HolidayComputationEngine, HolidayRuleRegistry};
///
/// let engine = HolidayComputationEngine::new(HolidayRuleRegistry::builtin()?);
/// let holidays = engine.compute("CA-PE", 2024)?;
/// assert_eq!(holidays.get("islanderDay").unwrap().date().to_string(), "2024-02-19");
/// # Ok::<(), hol_core::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct HolidayComputationEngine {
    registry: HolidayRuleRegistry,
    converter: LunisolarCalendarConverter,
    config: EngineConfig,
}

impl HolidayComputationEngine {
    /// An engine over `registry` with the default configuration.
    pub fn new(registry: HolidayRuleRegistry) -> Self {
        Self::with_config(registry, EngineConfig::default())
    }

    /// An engine over `registry` with `config`.
    pub fn with_config(registry: HolidayRuleRegistry, config: EngineConfig) -> Self {
        Self {
            registry,
            converter: LunisolarCalendarConverter::new(),
            config,
        }
    }

    /// Replace the lunisolar converter (to add calendars).
    pub fn with_converter(mut self, converter: LunisolarCalendarConverter) -> Self {
        self.converter = converter;
        self
    }

    /// The region registry.
    pub fn registry(&self) -> &HolidayRuleRegistry {
        &self.registry
    }

    /// The configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The lunisolar converter.
    pub fn converter(&self) -> &LunisolarCalendarConverter {
        &self.converter
    }

    /// Holidays of `region` in `year`, named in the configured locale.
    ///
    /// # Errors
    /// [`Error::UnknownRegion`] for an unregistered region, [`Error::Catalog`]
    /// if the region's catalog does not resolve, [`Error::DuplicateHolidayKey`]
    /// if two descriptors share a key, and [`Error::Descriptor`] wrapping the
    /// first rule or name failure.
    pub fn compute(&self, region: &str, year: Year) -> Result<HolidaySet> {
        self.compute_with_locale(region, year, &self.config.locale)
    }

    /// Holidays of `region` in `year`, named in `locale`.
    pub fn compute_with_locale(
        &self,
        region: &str,
        year: Year,
        locale: &str,
    ) -> Result<HolidaySet> {
        let profile = self.registry.get(region)?;
        let descriptors = self.registry.resolve(region)?;
        let mut set = HolidaySet::new(profile.id(), year);
        for descriptor in descriptors {
            if !descriptor.is_active_in(year) {
                trace!(region = profile.id(), key = descriptor.key(), year, "not in force");
                continue;
            }
            let holiday = self
                .compute_one(profile, descriptor, year, locale)
                .map_err(|source| Error::Descriptor {
                    region: profile.id().to_string(),
                    key: descriptor.key().to_string(),
                    rule: descriptor.rule().to_string(),
                    source: Box::new(source),
                })?;
            match holiday {
                Some(h) => set.insert(h)?,
                None => debug!(
                    region = profile.id(),
                    key = descriptor.key(),
                    year,
                    "no occurrence in year"
                ),
            }
        }
        debug!(region = profile.id(), year, holidays = set.len(), "computed holidays");
        Ok(set)
    }

    /// One holiday set per year of `years`, failing on the first error.
    pub fn compute_years<I>(&self, region: &str, years: I) -> Result<Vec<HolidaySet>>
    where
        I: IntoIterator<Item = Year>,
    {
        years
            .into_iter()
            .map(|year| self.compute(region, year))
            .collect()
    }

    fn compute_one(
        &self,
        profile: &RegionProfile,
        descriptor: &HolidayDescriptor,
        year: Year,
        locale: &str,
    ) -> Result<Option<ComputedHoliday>> {
        let Some(date) =
            descriptor
                .rule()
                .evaluate(year, &self.converter, self.config.lunisolar_policy)?
        else {
            return Ok(None);
        };
        let observed = descriptor.observance().apply(date)?;
        if observed != date {
            trace!(key = descriptor.key(), %date, %observed, "observance shift");
        }
        let name = descriptor.name(locale, &self.config.fallback_locale)?;
        Ok(Some(ComputedHoliday::new(
            descriptor.key(),
            name,
            observed,
            profile.timezone(),
            descriptor.holiday_type(),
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::HolidayRule;
    use hol_time::{Date, Month, Ordinal, Weekday};

    fn engine() -> HolidayComputationEngine {
        HolidayComputationEngine::new(HolidayRuleRegistry::builtin().unwrap())
    }

    #[test]
    fn unknown_region() {
        assert_eq!(
            engine().compute("XX", 2024),
            Err(Error::UnknownRegion("XX".into()))
        );
    }

    #[test]
    fn descriptor_errors_are_wrapped() {
        let fifth_monday =
            HolidayRule::nth_weekday(Month::February, Weekday::Monday, Ordinal::Fifth);
        let mut registry = HolidayRuleRegistry::new();
        registry
            .register(
                RegionProfile::builder("T", "Test", "UTC")
                    .holiday(
                        HolidayDescriptor::builder("fifthMonday", fifth_monday)
                            .name("en", "Fifth Monday")
                            .build()
                            .unwrap(),
                    )
                    .build()
                    .unwrap(),
            )
            .unwrap();
        let engine = HolidayComputationEngine::new(registry);
        assert_eq!(
            engine.compute("T", 2016).unwrap().get("fifthMonday").unwrap().date(),
            Date::from_ymd(2016, 2, 29).unwrap()
        );
        match engine.compute("T", 2021).unwrap_err() {
            Error::Descriptor { region, key, rule, source } => {
                assert_eq!(region, "T");
                assert_eq!(key, "fifthMonday");
                assert_eq!(rule, "fifth Monday of February");
                assert!(matches!(*source, Error::RuleUnsatisfiable(_)));
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HolidayComputationEngine>();
        assert_send_sync::<HolidayRuleRegistry>();
        assert_send_sync::<LunisolarCalendarConverter>();
        assert_send_sync::<crate::RegionCalendar>();

        let engine = std::sync::Arc::new(engine());
        let handles: Vec<_> = [2023, 2024, 2025]
            .into_iter()
            .map(|year| {
                let engine = std::sync::Arc::clone(&engine);
                std::thread::spawn(move || engine.compute("IL", year))
            })
            .collect();
        for handle in handles {
            assert!(!handle.join().unwrap().unwrap().is_empty());
        }
    }

    #[test]
    fn compute_years_collects() {
        let sets = engine().compute_years("US", 2020..2025).unwrap();
        assert_eq!(sets.len(), 5);
        assert_eq!(sets[3].year(), 2023);
        assert!(engine().compute_years("CH", [2024, 1500]).is_err());
    }
}
