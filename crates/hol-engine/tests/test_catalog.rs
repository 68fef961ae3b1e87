//! Loading region catalogs from YAML and computing from them.

use std::path::PathBuf;

use hol_core::Error;
use hol_engine::{HolidayComputationEngine, HolidayRuleRegistry};

fn data(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("data")
        .join(name)
}

#[test]
fn load_catalog_file() {
    let mut registry = HolidayRuleRegistry::new();
    assert_eq!(registry.load_yaml_file(data("france.yaml")).unwrap(), 2);
    let engine = HolidayComputationEngine::new(registry);

    let set = engine.compute_with_locale("FR-67", 2024, "fr").unwrap();
    let keys: Vec<&str> = set.iter().map(|h| h.key()).collect();
    assert_eq!(
        keys,
        [
            "newYearsDay",
            "goodFriday",
            "easterMonday",
            "labourDay",
            "bastilleDay",
            "christmasDay",
            "stStephensDay"
        ]
    );
    assert_eq!(set.get("bastilleDay").unwrap().name(), "Fête nationale");
    assert!(!engine.compute("FR", 1879).unwrap().contains("bastilleDay"));
}

#[test]
fn extend_builtin_regions() {
    let yaml = r#"
regions:
  - id: CH-ZH
    name: Zürich
    timezone: Europe/Zurich
    parent: CH
    remove: [ascensionDay]
    replace:
      - key: christmasDay
        names: { en: Christmas, de: Weihnachten }
        rule: { type: fixed_date, month: 12, day: 25 }
        type: official
    holidays:
      - key: sechselaeuten
        names: { en: Sechseläuten, de: Sechseläuten }
        rule: { type: nth_weekday, month: april, weekday: monday, ordinal: third }
        type: observance
"#;
    let mut registry = HolidayRuleRegistry::builtin().unwrap();
    assert_eq!(registry.load_yaml_str(yaml).unwrap(), 1);
    let engine = HolidayComputationEngine::new(registry);
    let set = engine.compute_with_locale("CH-ZH", 2024, "de_CH").unwrap();

    assert!(!set.contains("ascensionDay"));
    assert_eq!(set.get("christmasDay").unwrap().name(), "Weihnachten");
    assert_eq!(
        set.get("sechselaeuten").unwrap().date().to_string(),
        "2024-04-15"
    );
    assert_eq!(set.len(), 4);
}

#[test]
fn failed_catalog_registers_nothing() {
    let yaml = r#"
regions:
  - id: AA
    name: A
    timezone: UTC
  - id: CH
    name: Switzerland again
    timezone: Europe/Zurich
"#;
    let mut registry = HolidayRuleRegistry::builtin().unwrap();
    let before = registry.len();
    assert!(matches!(registry.load_yaml_str(yaml), Err(Error::Catalog(_))));
    assert_eq!(registry.len(), before);
    assert!(!registry.contains("AA"));
}

#[test]
fn dangling_references_fail_on_compute() {
    let yaml = r#"
regions:
  - id: BB
    name: B
    timezone: UTC
    parent: CA
    remove: [easterMonday]
"#;
    let mut registry = HolidayRuleRegistry::builtin().unwrap();
    registry.load_yaml_str(yaml).unwrap();
    let engine = HolidayComputationEngine::new(registry);
    assert!(matches!(engine.compute("BB", 2024), Err(Error::Catalog(_))));
}

#[test]
fn missing_file() {
    let mut registry = HolidayRuleRegistry::new();
    assert!(matches!(
        registry.load_yaml_file(data("missing.yaml")),
        Err(Error::Catalog(_))
    ));
}
