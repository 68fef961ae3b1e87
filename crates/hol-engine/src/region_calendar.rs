//! Business-day calendar view of a region.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use hol_core::errors::Result;
use hol_core::Year;
use hol_time::{Calendar, Date, Weekday};
use tracing::warn;

use crate::engine::HolidayComputationEngine;
use crate::holiday_set::HolidaySet;

/// A region's holidays and weekend as a [`Calendar`].
///
/// Holiday sets are computed on first use and kept per year; entries are
/// never invalidated, since the engine behind them is immutable.
///
/// Observed dates may spill into a neighbouring year (New Year's Day moved
/// back to December 31, a lunisolar date reported as is), so a date is a
/// holiday if the set of its own year or of either neighbour lists it.
#[derive(Debug)]
pub struct RegionCalendar {
    engine: Arc<HolidayComputationEngine>,
    region: String,
    name: String,
    weekend: Vec<Weekday>,
    cache: RwLock<HashMap<Year, Arc<HolidaySet>>>,
}

impl RegionCalendar {
    /// The calendar of `region`.
    ///
    /// # Errors
    /// [`Error::UnknownRegion`](hol_core::Error::UnknownRegion) or a catalog
    /// error from resolving the region's weekend.
    pub fn new(engine: Arc<HolidayComputationEngine>, region: &str) -> Result<Self> {
        let profile = engine.registry().get(region)?;
        let weekend = engine.registry().weekend(region)?;
        Ok(Self {
            region: profile.id().to_string(),
            name: profile.name().to_string(),
            weekend,
            engine,
            cache: RwLock::new(HashMap::new()),
        })
    }

    /// Region id.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// Weekend days.
    pub fn weekend_days(&self) -> &[Weekday] {
        &self.weekend
    }

    /// The holiday set of `year`, computed once.
    pub fn holidays(&self, year: Year) -> Result<Arc<HolidaySet>> {
        if let Some(set) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&year)
        {
            return Ok(Arc::clone(set));
        }
        let set = Arc::new(self.engine.compute(&self.region, year)?);
        let mut cache = self.cache.write().unwrap_or_else(PoisonError::into_inner);
        Ok(Arc::clone(cache.entry(year).or_insert(set)))
    }
}

impl Calendar for RegionCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_holiday(&self, date: Date) -> Result<bool> {
        let year = date.year();
        if self.holidays(year)?.is_holiday(date) {
            return Ok(true);
        }
        for neighbour in [year - 1, year + 1] {
            match self.holidays(neighbour) {
                Ok(set) if set.is_holiday(date) => return Ok(true),
                Ok(_) => {}
                Err(e) => warn!(
                    region = %self.region,
                    year = neighbour,
                    error = %e,
                    "neighbouring year unavailable"
                ),
            }
        }
        Ok(false)
    }

    fn is_weekend(&self, date: Date) -> bool {
        self.weekend.contains(&date.weekday())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::HolidayRuleRegistry;
    use hol_time::BusinessDayConvention;

    fn date(y: Year, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn calendar(region: &str) -> RegionCalendar {
        let engine = Arc::new(HolidayComputationEngine::new(
            HolidayRuleRegistry::builtin().unwrap(),
        ));
        RegionCalendar::new(engine, region).unwrap()
    }

    #[test]
    fn israel_weekend_is_friday_saturday() {
        let cal = calendar("IL");
        assert_eq!(cal.weekend_days(), &[Weekday::Friday, Weekday::Saturday]);
        // 2024-06-14 is a Friday, 2024-06-16 a Sunday.
        assert!(!cal.is_business_day(date(2024, 6, 14)).unwrap());
        assert!(cal.is_business_day(date(2024, 6, 16)).unwrap());
    }

    #[test]
    fn holidays_are_memoized() {
        let cal = calendar("CH");
        let a = cal.holidays(2024).unwrap();
        let b = cal.holidays(2024).unwrap();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn adjust_around_swiss_national_day() {
        let cal = calendar("CH");
        // 2024-08-01 is a Thursday.
        assert!(cal.is_holiday(date(2024, 8, 1)).unwrap());
        assert_eq!(
            cal.adjust(date(2024, 8, 1), BusinessDayConvention::Following).unwrap(),
            date(2024, 8, 2)
        );
        assert_eq!(
            cal.adjust(date(2024, 8, 1), BusinessDayConvention::Preceding).unwrap(),
            date(2024, 7, 31)
        );
    }

    #[test]
    fn unknown_region() {
        let engine = Arc::new(HolidayComputationEngine::new(HolidayRuleRegistry::new()));
        assert!(RegionCalendar::new(engine, "CH").is_err());
    }
}
