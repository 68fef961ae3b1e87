//! # holidays
//!
//! Public holidays per region and year: fixed dates, nth-weekday rules,
//! Easter-relative moveable feasts, and dates of the Hebrew calendar.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `hol-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use holidays::prelude::*;
//!
//! let engine = HolidayComputationEngine::new(HolidayRuleRegistry::builtin()?);
//! let israel = engine.compute("IL", 2024)?;
//! let rosh = israel.get("roshHashanah").unwrap();
//! assert_eq!(rosh.date(), Date::from_ymd(2024, 10, 3)?);
//! assert_eq!(rosh.timezone().id(), "Asia/Jerusalem");
//! # Ok::<(), holidays::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, and error definitions.
pub use hol_core as core;

/// Dates, Easter computus, lunisolar calendars, and time zones.
pub use hol_time as time;

/// Holiday rules, region catalogs, and the computation engine.
pub use hol_engine as engine;

/// The types most programs need.
pub mod prelude {
    pub use hol_core::{Error, Result};
    pub use hol_engine::{
        ComputedHoliday, EngineConfig, HolidayComputationEngine, HolidayDescriptor,
        HolidayRuleRegistry, HolidayRule, HolidaySet, HolidayType, RegionCalendar, RegionProfile,
    };
    pub use hol_time::{
        BusinessDayConvention, Calendar, Date, HebrewMonth, LunisolarPolicy, Month,
        ObservanceShift, Ordinal, Weekday,
    };
}
