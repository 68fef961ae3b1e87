//! Computed holidays and the per-region, per-year holiday set.

use std::collections::BTreeSet;

use chrono::DateTime;
use chrono_tz::Tz;
use hol_core::errors::{Error, Result};
use hol_core::Year;
use hol_time::{Date, TimezoneAnchor};

use crate::descriptor::HolidayType;

/// One holiday of one year, with its localized name and observed date.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComputedHoliday {
    key: String,
    name: String,
    date: Date,
    timezone: TimezoneAnchor,
    holiday_type: HolidayType,
}

impl ComputedHoliday {
    /// Create a computed holiday.
    pub fn new(
        key: &str,
        name: &str,
        date: Date,
        timezone: TimezoneAnchor,
        holiday_type: HolidayType,
    ) -> Self {
        Self {
            key: key.to_string(),
            name: name.to_string(),
            date,
            timezone,
            holiday_type,
        }
    }

    /// Canonical key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Localized name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Observed civil date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Time zone the date is anchored to.
    pub fn timezone(&self) -> TimezoneAnchor {
        self.timezone
    }

    /// Holiday category.
    pub fn holiday_type(&self) -> HolidayType {
        self.holiday_type
    }

    /// The instant the holiday begins: local midnight in its time zone.
    pub fn starts_at(&self) -> Result<DateTime<Tz>> {
        self.timezone.start_of_day(self.date)
    }
}

impl std::fmt::Display for ComputedHoliday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.date, self.name, self.key)
    }
}

/// The holidays of one region in one year, ordered by date then key.
///
/// Keys are unique within a set. A holiday is filed under the year it was
/// computed for, even when an observance shift or a lunisolar conversion
/// puts its date in a neighbouring year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HolidaySet {
    region: String,
    year: Year,
    holidays: Vec<ComputedHoliday>,
}

impl HolidaySet {
    /// An empty set for `region` and `year`.
    pub fn new(region: &str, year: Year) -> Self {
        Self {
            region: region.to_string(),
            year,
            holidays: Vec::new(),
        }
    }

    /// Add `holiday`, keeping date order.
    ///
    /// # Errors
    /// [`Error::DuplicateHolidayKey`] if the key is already present.
    pub fn insert(&mut self, holiday: ComputedHoliday) -> Result<()> {
        if self.contains(holiday.key()) {
            return Err(Error::DuplicateHolidayKey {
                key: holiday.key.clone(),
            });
        }
        let pos = self
            .holidays
            .partition_point(|h| (h.date, h.key.as_str()) < (holiday.date, holiday.key.as_str()));
        self.holidays.insert(pos, holiday);
        Ok(())
    }

    /// Region id.
    pub fn region(&self) -> &str {
        &self.region
    }

    /// The year the set was computed for.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return `true` if a holiday with `key` is present.
    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The holiday with `key`.
    pub fn get(&self, key: &str) -> Option<&ComputedHoliday> {
        self.holidays.iter().find(|h| h.key == key)
    }

    /// All holidays in chronological order.
    pub fn all(&self) -> &[ComputedHoliday] {
        &self.holidays
    }

    /// Iterate in chronological order.
    pub fn iter(&self) -> std::slice::Iter<'_, ComputedHoliday> {
        self.holidays.iter()
    }

    /// Number of holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Return `true` if any holiday falls on `date`.
    pub fn is_holiday(&self, date: Date) -> bool {
        self.on(date).next().is_some()
    }

    /// Holidays falling on `date`.
    pub fn on(&self, date: Date) -> impl Iterator<Item = &ComputedHoliday> {
        self.between(date, date)
    }

    /// Holidays falling in `from..=to`.
    pub fn between(&self, from: Date, to: Date) -> impl Iterator<Item = &ComputedHoliday> {
        let start = self.holidays.partition_point(|h| h.date < from);
        self.holidays[start..]
            .iter()
            .take_while(move |h| h.date <= to)
    }

    /// Holidays of type `holiday_type`.
    pub fn of_type(&self, holiday_type: HolidayType) -> impl Iterator<Item = &ComputedHoliday> {
        self.holidays
            .iter()
            .filter(move |h| h.holiday_type == holiday_type)
    }

    /// The distinct dates of the set.
    pub fn dates(&self) -> BTreeSet<Date> {
        self.holidays.iter().map(|h| h.date).collect()
    }
}

impl<'a> IntoIterator for &'a HolidaySet {
    type Item = &'a ComputedHoliday;
    type IntoIter = std::slice::Iter<'a, ComputedHoliday>;

    fn into_iter(self) -> Self::IntoIter {
        self.holidays.iter()
    }
}
