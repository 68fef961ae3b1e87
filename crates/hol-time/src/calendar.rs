//! `Calendar` trait: business days over a set of holidays.
//!
//! A calendar knows which dates are holidays and which weekdays form the
//! weekend, and can adjust dates according to a [`BusinessDayConvention`].
//! Holiday lookups may have to compute a year's holidays first, so every
//! query is fallible.

use crate::business_day_convention::BusinessDayConvention;
use crate::date::Date;
use crate::weekday::Weekday;
use hol_core::errors::Result;

/// A business-day calendar.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Israel"`).
    fn name(&self) -> &str;

    /// Return `true` if `date` is a listed holiday in this calendar.
    fn is_holiday(&self, date: Date) -> Result<bool>;

    /// Return `true` if `date` is a weekend according to this calendar.
    ///
    /// Most calendars consider Saturday and Sunday as weekends.
    fn is_weekend(&self, date: Date) -> bool {
        matches!(date.weekday(), Weekday::Saturday | Weekday::Sunday)
    }

    /// Return `true` if `date` is neither a weekend nor a holiday.
    fn is_business_day(&self, date: Date) -> Result<bool> {
        Ok(!self.is_weekend(date) && !self.is_holiday(date)?)
    }

    /// Adjust `date` according to the given business-day convention.
    fn adjust(&self, mut date: Date, convention: BusinessDayConvention) -> Result<Date> {
        match convention {
            BusinessDayConvention::Unadjusted => Ok(date),
            BusinessDayConvention::Following => {
                while !self.is_business_day(date)? {
                    date = date.add_days(1)?;
                }
                Ok(date)
            }
            BusinessDayConvention::ModifiedFollowing => {
                let adjusted = self.adjust(date, BusinessDayConvention::Following)?;
                if adjusted.month() != date.month() {
                    self.adjust(date, BusinessDayConvention::Preceding)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::Preceding => {
                while !self.is_business_day(date)? {
                    date = date.add_days(-1)?;
                }
                Ok(date)
            }
            BusinessDayConvention::ModifiedPreceding => {
                let adjusted = self.adjust(date, BusinessDayConvention::Preceding)?;
                if adjusted.month() != date.month() {
                    self.adjust(date, BusinessDayConvention::Following)
                } else {
                    Ok(adjusted)
                }
            }
            BusinessDayConvention::Nearest => {
                if self.is_business_day(date)? {
                    return Ok(date);
                }
                let fwd = self.adjust(date, BusinessDayConvention::Following)?;
                let bwd = self.adjust(date, BusinessDayConvention::Preceding)?;
                if fwd - date <= date - bwd {
                    Ok(fwd)
                } else {
                    Ok(bwd)
                }
            }
        }
    }

    /// Advance `date` by `n` business days.
    fn advance_business_days(&self, mut date: Date, n: i32) -> Result<Date> {
        let step: i32 = if n >= 0 { 1 } else { -1 };
        let mut remaining = n.abs();
        while remaining > 0 {
            date = date.add_days(step)?;
            if self.is_business_day(date)? {
                remaining -= 1;
            }
        }
        Ok(date)
    }

    /// Count the number of business days between `d1` (exclusive) and `d2`
    /// (inclusive).  Returns a negative number if `d2 < d1`.
    fn business_days_between(&self, d1: Date, d2: Date) -> Result<i32> {
        if d1 == d2 {
            return Ok(0);
        }
        let sign = if d2 > d1 { 1 } else { -1 };
        let (start, end) = if d2 > d1 { (d1, d2) } else { (d2, d1) };
        let mut count = 0;
        let mut d = start.add_days(1)?;
        while d <= end {
            if self.is_business_day(d)? {
                count += 1;
            }
            if d == end {
                break;
            }
            d = d.add_days(1)?;
        }
        Ok(sign * count)
    }
}

/// A calendar that treats only Saturdays and Sundays as non-business days,
/// with no additional holidays.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly;

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn is_holiday(&self, _date: Date) -> Result<bool> {
        Ok(false)
    }
}
