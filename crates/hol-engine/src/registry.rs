//! Registry of region profiles and descriptor resolution.

use std::collections::BTreeMap;
use std::path::Path;

use hol_core::errors::{Error, Result};
use hol_time::{TimezoneAnchor, Weekday};
use tracing::debug;

use crate::catalog;
use crate::descriptor::HolidayDescriptor;
use crate::region::{RegionProfile, SATURDAY_SUNDAY};
use crate::regions;

/// Region id → [`RegionProfile`].
///
/// Ids are matched case-insensitively. The registry is immutable once
/// handed to an engine, so it can be shared across threads freely.
#[derive(Debug, Clone, Default)]
pub struct HolidayRuleRegistry {
    profiles: BTreeMap<String, RegionProfile>,
}

fn registry_key(id: &str) -> String {
    id.trim().to_ascii_uppercase()
}

impl HolidayRuleRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry preloaded with the built-in region catalogs.
    ///
    /// # Errors
    /// Only if a built-in catalog is malformed.
    pub fn builtin() -> Result<Self> {
        let mut registry = Self::new();
        for profile in regions::builtin_profiles()? {
            registry.register(profile)?;
        }
        Ok(registry)
    }

    /// Add `profile`.
    ///
    /// The parent need not be registered yet; it is looked up on
    /// [`resolve`](Self::resolve).
    ///
    /// # Errors
    /// [`Error::Catalog`] if a profile with the same id is already
    /// registered.
    pub fn register(&mut self, profile: RegionProfile) -> Result<()> {
        let key = registry_key(profile.id());
        if self.profiles.contains_key(&key) {
            return Err(Error::Catalog(format!(
                "region '{}' is already registered",
                profile.id()
            )));
        }
        debug!(
            region = profile.id(),
            parent = profile.parent().unwrap_or("-"),
            holidays = profile.holidays().len(),
            "registered region"
        );
        self.profiles.insert(key, profile);
        Ok(())
    }

    /// Return `true` if region `id` is registered.
    pub fn contains(&self, id: &str) -> bool {
        self.profiles.contains_key(&registry_key(id))
    }

    /// The profile of region `id`.
    ///
    /// # Errors
    /// [`Error::UnknownRegion`].
    pub fn get(&self, id: &str) -> Result<&RegionProfile> {
        self.profiles
            .get(&registry_key(id))
            .ok_or_else(|| Error::UnknownRegion(id.to_string()))
    }

    /// Registered region ids, sorted.
    pub fn regions(&self) -> impl Iterator<Item = &str> {
        self.profiles.values().map(RegionProfile::id)
    }

    /// Number of registered regions.
    pub fn len(&self) -> usize {
        self.profiles.len()
    }

    /// Return `true` if no region is registered.
    pub fn is_empty(&self) -> bool {
        self.profiles.is_empty()
    }

    /// The descriptors applying to region `id`, parents first.
    ///
    /// Resolution walks the parent chain from the root down. At each level
    /// the level's removals are dropped, its replacements swapped in by key,
    /// and its own holidays appended.
    ///
    /// # Errors
    /// [`Error::UnknownRegion`] if `id` is not registered; [`Error::Catalog`]
    /// for a missing parent, a parent cycle, or a removal/replacement of a
    /// key the parent chain does not define.
    pub fn resolve(&self, id: &str) -> Result<Vec<&HolidayDescriptor>> {
        let chain = self.chain(id)?;
        let mut resolved: Vec<&HolidayDescriptor> = Vec::new();
        for profile in chain.into_iter().rev() {
            for key in profile.removals() {
                let pos = position(&resolved, key).ok_or_else(|| {
                    Error::Catalog(format!(
                        "region '{}' removes '{key}', which its parent does not define",
                        profile.id()
                    ))
                })?;
                resolved.remove(pos);
            }
            for replacement in profile.replacements() {
                let pos = position(&resolved, replacement.key()).ok_or_else(|| {
                    Error::Catalog(format!(
                        "region '{}' replaces '{}', which its parent does not define",
                        profile.id(),
                        replacement.key()
                    ))
                })?;
                resolved[pos] = replacement;
            }
            resolved.extend(profile.holidays());
        }
        Ok(resolved)
    }

    /// Weekend days of region `id`: its own, else the nearest ancestor's,
    /// else Saturday and Sunday.
    pub fn weekend(&self, id: &str) -> Result<Vec<Weekday>> {
        Ok(self
            .chain(id)?
            .into_iter()
            .find_map(RegionProfile::weekend)
            .map_or_else(|| SATURDAY_SUNDAY.to_vec(), <[Weekday]>::to_vec))
    }

    /// Time zone of region `id`.
    pub fn timezone(&self, id: &str) -> Result<TimezoneAnchor> {
        self.get(id).map(RegionProfile::timezone)
    }

    /// Extend the registry from a YAML catalog; returns the number of
    /// regions added. See [`catalog`] for the format.
    ///
    /// Nothing is registered if any region of the catalog fails.
    pub fn load_yaml_str(&mut self, yaml: &str) -> Result<usize> {
        let profiles = catalog::parse_str(yaml)?;
        self.register_all(profiles)
    }

    /// Extend the registry from a YAML catalog file.
    pub fn load_yaml_file<P: AsRef<Path>>(&mut self, path: P) -> Result<usize> {
        let profiles = catalog::parse_file(path.as_ref())?;
        self.register_all(profiles)
    }

    fn register_all(&mut self, profiles: Vec<RegionProfile>) -> Result<usize> {
        let mut seen = std::collections::BTreeSet::new();
        for profile in &profiles {
            let key = registry_key(profile.id());
            if self.profiles.contains_key(&key) || !seen.insert(key) {
                return Err(Error::Catalog(format!(
                    "region '{}' is already registered",
                    profile.id()
                )));
            }
        }
        let count = profiles.len();
        for profile in profiles {
            self.register(profile)?;
        }
        Ok(count)
    }

    /// `id` followed by its ancestors, nearest first.
    fn chain(&self, id: &str) -> Result<Vec<&RegionProfile>> {
        let mut current = self.get(id)?;
        let mut chain = vec![current];
        while let Some(parent) = current.parent() {
            let profile = self.profiles.get(&registry_key(parent)).ok_or_else(|| {
                Error::Catalog(format!(
                    "region '{}' has unknown parent '{parent}'",
                    current.id()
                ))
            })?;
            if chain.iter().any(|p| p.id() == profile.id()) {
                let path: Vec<&str> = chain.iter().map(|p| p.id()).collect();
                return Err(Error::Catalog(format!(
                    "parent cycle: {} -> {}",
                    path.join(" -> "),
                    profile.id()
                )));
            }
            chain.push(profile);
            current = profile;
        }
        Ok(chain)
    }
}

fn position(resolved: &[&HolidayDescriptor], key: &str) -> Option<usize> {
    resolved.iter().position(|d| d.key() == key)
}
