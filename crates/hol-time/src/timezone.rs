//! Time-zone anchoring.
//!
//! Holiday dates are civil dates; the anchor says *where* that civil date is
//! observed, so the date can be turned into an unambiguous instant (local
//! midnight in the region's IANA zone) without wall-clock drift.

use chrono::{DateTime, NaiveTime, TimeZone};
use chrono_tz::Tz;

use crate::date::Date;
use hol_core::errors::{Error, Result};

/// An IANA time zone that holiday dates are anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimezoneAnchor(Tz);

impl TimezoneAnchor {
    /// UTC.
    pub const UTC: TimezoneAnchor = TimezoneAnchor(Tz::UTC);

    /// The IANA identifier (e.g. `"Asia/Jerusalem"`).
    pub fn id(&self) -> &'static str {
        self.0.name()
    }

    /// The underlying `chrono_tz` zone.
    pub fn tz(&self) -> Tz {
        self.0
    }

    /// The instant at which `date` begins in this zone.
    ///
    /// That is local midnight, unless a DST transition skips midnight, in
    /// which case it is the first local time that exists on `date`.
    pub fn start_of_day(&self, date: Date) -> Result<DateTime<Tz>> {
        let naive = date.to_naive_date()?;
        for hour in 0..24 {
            let Some(time) = NaiveTime::from_hms_opt(hour, 0, 0) else {
                break;
            };
            if let Some(dt) = self.0.from_local_datetime(&naive.and_time(time)).earliest() {
                return Ok(dt);
            }
        }
        Err(Error::InvalidDate(format!(
            "{date} has no local start of day in {}",
            self.id()
        )))
    }
}

impl Default for TimezoneAnchor {
    fn default() -> Self {
        Self::UTC
    }
}

impl std::fmt::Display for TimezoneAnchor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl From<Tz> for TimezoneAnchor {
    fn from(tz: Tz) -> Self {
        Self(tz)
    }
}

/// Resolve an IANA time-zone identifier to an anchor.
///
/// # Errors
/// [`Error::UnknownTimezone`] if `id` is not in the IANA database.
pub fn resolve(id: &str) -> Result<TimezoneAnchor> {
    id.trim()
        .parse::<Tz>()
        .map(TimezoneAnchor)
        .map_err(|_| Error::UnknownTimezone(id.to_string()))
}
