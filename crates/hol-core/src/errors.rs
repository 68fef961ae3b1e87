//! Error types for the holiday engine.
//!
//! Every failure mode of rule evaluation, calendar conversion, and catalog
//! handling maps to one variant of a single `thiserror`-derived enum. None of
//! them are recoverable by retrying: inputs are deterministic, so the same
//! call fails the same way until the catalog or the algorithm is fixed.

use thiserror::Error;

/// The top-level error type used throughout the holiday engine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A rule produced a calendrically impossible date (e.g. Feb 29 in a
    /// common year), or date arithmetic left the supported range.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// An nth-weekday rule has no matching occurrence in the month.
    #[error("rule cannot be satisfied: {0}")]
    RuleUnsatisfiable(String),

    /// A year outside an algorithm's valid domain.
    #[error("year {year} is not supported by {algorithm} (valid range {min}..={max})")]
    UnsupportedYear {
        /// The requested year.
        year: i32,
        /// The algorithm that rejected it.
        algorithm: &'static str,
        /// Smallest supported year.
        min: i32,
        /// Largest supported year.
        max: i32,
    },

    /// No lunisolar calendar is registered under this name.
    #[error("unsupported calendar: {0}")]
    UnsupportedCalendar(String),

    /// Month or day out of range for the given lunisolar year.
    #[error("invalid calendar date: {0}")]
    InvalidCalendarDate(String),

    /// The same holiday key was added twice to one holiday set.
    #[error("duplicate holiday key '{key}'")]
    DuplicateHolidayKey {
        /// The key that was already present.
        key: String,
    },

    /// A holiday has no name for the requested locale.
    #[error("no name for locale '{locale}' (holiday '{key}')")]
    UnknownLocale {
        /// Holiday key, or empty if unknown at the point of lookup.
        key: String,
        /// The requested locale tag.
        locale: String,
    },

    /// No region is registered under this id.
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// The time-zone identifier is not in the IANA database.
    #[error("unknown time zone: {0}")]
    UnknownTimezone(String),

    /// A rule or descriptor failed validation at construction time.
    #[error("invalid rule: {0}")]
    InvalidRule(String),

    /// A region catalog is malformed (parse error, missing parent, cycle…).
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Engine configuration could not be read or parsed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A descriptor failed while computing a region's holidays.
    ///
    /// Wraps the underlying error with the failing descriptor's key and
    /// rule so that the catalog defect can be located.
    #[error("region '{region}', holiday '{key}' ({rule}): {source}")]
    Descriptor {
        /// Region being computed.
        region: String,
        /// Key of the failing descriptor.
        key: String,
        /// Human-readable rule detail.
        rule: String,
        /// The underlying failure.
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Return the innermost error, looking through [`Error::Descriptor`]
    /// wrappers.
    pub fn root(&self) -> &Error {
        match self {
            Error::Descriptor { source, .. } => source.root(),
            other => other,
        }
    }
}

/// Shorthand `Result` type used throughout the holiday engine.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return early with `Err(Error::$variant(format!(...)))` if `$cond` is false.
///
/// Only usable with the single-message variants (`InvalidDate`,
/// `InvalidRule`, `InvalidCalendarDate`, …).
///
/// # Example
/// ```
/// use hol_core::{ensure, errors::Error};
/// fn month(m: u8) -> hol_core::errors::Result<u8> {
///     ensure!((1..=12).contains(&m), InvalidRule, "month {m} out of range");
///     Ok(m)
/// }
/// assert!(month(3).is_ok());
/// assert_eq!(
///     month(13),
///     Err(Error::InvalidRule("month 13 out of range".into()))
/// );
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $variant:ident, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::$variant(format!($($msg)*)));
        }
    };
}
