//! # hol-time
//!
//! Date arithmetic and calendar conversion for the holiday engine: the
//! `Date` type, Gregorian weekday rules, the Easter computus, lunisolar
//! calendars, time-zone anchoring, observance shifts, and business-day
//! calendars.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// Calendar trait for business-day queries.
pub mod calendar;

/// `Date` type.
pub mod date;

/// Easter Sunday, Western and Orthodox.
pub mod easter;

/// Fixed-date and relative-weekday rules.
pub mod gregorian;

/// Lunisolar calendars and conversion to Gregorian dates.
pub mod lunisolar;

/// `Month`: month of the year.
pub mod month;

/// Weekend observance shifts.
pub mod observance;

/// IANA time-zone anchoring.
pub mod timezone;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use business_day_convention::BusinessDayConvention;
pub use calendar::{Calendar, WeekendsOnly};
pub use date::Date;
pub use easter::{easter_sunday, orthodox_easter_sunday, Computus};
pub use gregorian::Ordinal;
pub use lunisolar::{
    Hebrew, HebrewMonth, LunisolarCalendar, LunisolarCalendarConverter, LunisolarDate,
    LunisolarMonth, LunisolarPolicy,
};
pub use month::Month;
pub use observance::ObservanceShift;
pub use timezone::TimezoneAnchor;
pub use weekday::Weekday;
