//! Built-in region catalogs.
//!
//! Each submodule builds the profiles of one country and its subdivisions.
//! They are ordinary data: the same catalogs could be loaded from YAML.

use hol_core::errors::Result;

use crate::descriptor::{DescriptorBuilder, HolidayDescriptor};
use crate::region::RegionProfile;
use crate::rule::HolidayRule;

/// Canada and Prince Edward Island.
pub mod canada;
/// Israel.
pub mod israel;
/// Switzerland and Obwalden.
pub mod switzerland;
/// United States (federal holidays).
pub mod united_states;

/// Every built-in profile, parents before children.
pub fn builtin_profiles() -> Result<Vec<RegionProfile>> {
    let mut profiles = Vec::new();
    profiles.extend(canada::profiles()?);
    profiles.extend(israel::profiles()?);
    profiles.extend(switzerland::profiles()?);
    profiles.extend(united_states::profiles()?);
    Ok(profiles)
}

/// A descriptor builder with `names` given as `(locale, name)` pairs.
fn holiday(key: &str, rule: HolidayRule, names: &[(&str, &str)]) -> DescriptorBuilder {
    names
        .iter()
        .fold(HolidayDescriptor::builder(key, rule), |b, (locale, name)| {
            b.name(locale, name)
        })
}
