//! Engine configuration.
//!
//! ```yaml
//! locale: fr_CA
//! fallback_locale: en
//! lunisolar_policy: reanchor
//! ```
//!
//! Every field is optional; missing ones take their [`Default`] values.

use std::fs;
use std::path::Path;

use hol_core::errors::{Error, Result};
use hol_time::LunisolarPolicy;
use serde::{Deserialize, Serialize};

/// Settings of a [`HolidayComputationEngine`](crate::HolidayComputationEngine).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Locale holiday names are reported in.
    pub locale: String,
    /// Locale used when a holiday has no name for `locale` or its language.
    pub fallback_locale: String,
    /// Handling of lunisolar dates that fall outside the requested year.
    pub lunisolar_policy: LunisolarPolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            fallback_locale: "en".to_string(),
            lunisolar_policy: LunisolarPolicy::ReportAsIs,
        }
    }
}

impl EngineConfig {
    /// Parse a YAML document.
    ///
    /// # Errors
    /// [`Error::Config`] on malformed YAML, unknown keys, or an empty
    /// locale.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = if yaml.trim().is_empty() {
            Self::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| Error::Config(e.to_string()))?
        };
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a YAML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_yaml_str(&content)
            .map_err(|e| Error::Config(format!("{}: {e}", path.display())))
    }

    /// Set the locale.
    pub fn with_locale(mut self, locale: &str) -> Self {
        self.locale = locale.to_string();
        self
    }

    /// Set the lunisolar policy.
    pub fn with_lunisolar_policy(mut self, policy: LunisolarPolicy) -> Self {
        self.lunisolar_policy = policy;
        self
    }

    fn validate(&self) -> Result<()> {
        if self.locale.trim().is_empty() || self.fallback_locale.trim().is_empty() {
            return Err(Error::Config("locales must not be empty".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let c = EngineConfig::default();
        assert_eq!(c.locale, "en");
        assert_eq!(c.fallback_locale, "en");
        assert_eq!(c.lunisolar_policy, LunisolarPolicy::ReportAsIs);
        assert_eq!(EngineConfig::from_yaml_str("").unwrap(), c);
    }

    #[test]
    fn parse_yaml() {
        let c = EngineConfig::from_yaml_str("locale: he\nlunisolar_policy: reanchor\n").unwrap();
        assert_eq!(c.locale, "he");
        assert_eq!(c.fallback_locale, "en");
        assert_eq!(c.lunisolar_policy, LunisolarPolicy::Reanchor);
    }

    #[test]
    fn rejects_bad_input() {
        assert!(matches!(
            EngineConfig::from_yaml_str("lunisolar_policy: guess"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_yaml_str("colour: blue"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            EngineConfig::from_yaml_str("locale: ''"),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            EngineConfig::load("/nonexistent/holidays.yaml"),
            Err(Error::Config(_))
        ));
    }
}
