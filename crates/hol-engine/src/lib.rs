//! # hol-engine
//!
//! Holiday rules, region catalogs, and the engine that turns them into
//! concrete holiday dates.
//!
//! A [`HolidayRuleRegistry`] holds [`RegionProfile`]s, each a list of
//! [`HolidayDescriptor`]s that may extend a parent region. The
//! [`HolidayComputationEngine`] resolves a region's descriptors, evaluates
//! every [`HolidayRule`] for the requested year, applies observance shifts,
//! names each holiday in the configured locale, and returns a
//! [`HolidaySet`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// YAML region catalogs.
pub mod catalog;

/// Engine configuration.
pub mod config;

/// Holiday descriptors, names and types.
pub mod descriptor;

/// The holiday computation engine.
pub mod engine;

/// Computed holidays and holiday sets.
pub mod holiday_set;

/// Region profiles.
pub mod region;

/// Business-day calendar view of a region.
pub mod region_calendar;

/// Built-in region catalogs.
pub mod regions;

/// Region registry.
pub mod registry;

/// Holiday date rules.
pub mod rule;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use config::EngineConfig;
pub use descriptor::{DescriptorBuilder, HolidayDescriptor, HolidayNames, HolidayType};
pub use engine::HolidayComputationEngine;
pub use holiday_set::{ComputedHoliday, HolidaySet};
pub use region::{RegionProfile, RegionProfileBuilder};
pub use region_calendar::RegionCalendar;
pub use registry::HolidayRuleRegistry;
pub use rule::HolidayRule;
