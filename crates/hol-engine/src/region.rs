//! Region profiles: the holiday catalog of one country or subdivision.

use hol_core::errors::{Error, Result};
use hol_time::{timezone, TimezoneAnchor, Weekday};

use crate::descriptor::HolidayDescriptor;

/// The weekend most regions observe.
pub const SATURDAY_SUNDAY: [Weekday; 2] = [Weekday::Saturday, Weekday::Sunday];

/// The holiday catalog of one region.
///
/// A profile may name a parent; it then inherits the parent's holidays,
/// dropping those listed in [`removals`](Self::removals), swapping those
/// in [`replacements`](Self::replacements) by key, and appending its own
/// [`holidays`](Self::holidays).
#[derive(Debug, Clone)]
pub struct RegionProfile {
    id: String,
    name: String,
    timezone: TimezoneAnchor,
    parent: Option<String>,
    weekend: Option<Vec<Weekday>>,
    holidays: Vec<HolidayDescriptor>,
    replacements: Vec<HolidayDescriptor>,
    removals: Vec<String>,
}

impl RegionProfile {
    /// Start building a profile for region `id` (e.g. `"CA-PE"`) anchored
    /// to the IANA zone `timezone`.
    pub fn builder(id: &str, name: &str, timezone: &str) -> RegionProfileBuilder {
        RegionProfileBuilder {
            id: id.trim().to_string(),
            name: name.to_string(),
            timezone: timezone.to_string(),
            parent: None,
            weekend: None,
            holidays: Vec::new(),
            replacements: Vec::new(),
            removals: Vec::new(),
        }
    }

    /// Region id.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Time zone the region's dates are anchored to.
    pub fn timezone(&self) -> TimezoneAnchor {
        self.timezone
    }

    /// Parent region id, if any.
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Weekend days set on this profile itself; `None` inherits.
    pub fn weekend(&self) -> Option<&[Weekday]> {
        self.weekend.as_deref()
    }

    /// Holidays this profile adds.
    pub fn holidays(&self) -> &[HolidayDescriptor] {
        &self.holidays
    }

    /// Parent holidays this profile redefines, matched by key.
    pub fn replacements(&self) -> &[HolidayDescriptor] {
        &self.replacements
    }

    /// Keys of parent holidays this profile drops.
    pub fn removals(&self) -> &[String] {
        &self.removals
    }
}

/// Builder for [`RegionProfile`].
#[derive(Debug, Clone)]
pub struct RegionProfileBuilder {
    id: String,
    name: String,
    timezone: String,
    parent: Option<String>,
    weekend: Option<Vec<Weekday>>,
    holidays: Vec<HolidayDescriptor>,
    replacements: Vec<HolidayDescriptor>,
    removals: Vec<String>,
}

impl RegionProfileBuilder {
    /// Inherit from region `parent`.
    pub fn parent(mut self, parent: &str) -> Self {
        self.parent = Some(parent.trim().to_string());
        self
    }

    /// Weekend days, replacing any inherited ones.
    pub fn weekend(mut self, days: impl IntoIterator<Item = Weekday>) -> Self {
        let mut days: Vec<Weekday> = days.into_iter().collect();
        days.sort();
        days.dedup();
        self.weekend = Some(days);
        self
    }

    /// Add a holiday.
    pub fn holiday(mut self, descriptor: HolidayDescriptor) -> Self {
        self.holidays.push(descriptor);
        self
    }

    /// Add several holidays.
    pub fn holidays(mut self, descriptors: impl IntoIterator<Item = HolidayDescriptor>) -> Self {
        self.holidays.extend(descriptors);
        self
    }

    /// Redefine the inherited holiday with the same key.
    pub fn replace(mut self, descriptor: HolidayDescriptor) -> Self {
        self.replacements.push(descriptor);
        self
    }

    /// Drop the inherited holiday `key`.
    pub fn remove(mut self, key: &str) -> Self {
        self.removals.push(key.trim().to_string());
        self
    }

    /// Validate and build.
    ///
    /// # Errors
    /// [`Error::Catalog`] for an empty id, a region that is its own parent,
    /// or a weekend covering the whole week; [`Error::UnknownTimezone`] if
    /// the zone is not in the IANA database.
    pub fn build(self) -> Result<RegionProfile> {
        if self.id.is_empty() {
            return Err(Error::Catalog("region id must not be empty".into()));
        }
        if self
            .parent
            .as_deref()
            .is_some_and(|p| p.eq_ignore_ascii_case(&self.id))
        {
            return Err(Error::Catalog(format!("region '{}' is its own parent", self.id)));
        }
        if self.weekend.as_ref().is_some_and(|w| w.len() >= Weekday::ALL.len()) {
            return Err(Error::Catalog(format!(
                "region '{}' has no working days",
                self.id
            )));
        }
        let timezone = timezone::resolve(&self.timezone)?;
        Ok(RegionProfile {
            id: self.id,
            name: self.name,
            timezone,
            parent: self.parent,
            weekend: self.weekend,
            holidays: self.holidays,
            replacements: self.replacements,
            removals: self.removals,
        })
    }
}
