//! Built-in region catalogs against published holiday dates.

use hol_engine::{HolidayComputationEngine, HolidayRuleRegistry, HolidaySet, HolidayType};
use hol_time::Date;

fn compute(region: &str, year: i32) -> HolidaySet {
    HolidayComputationEngine::new(HolidayRuleRegistry::builtin().unwrap())
        .compute(region, year)
        .unwrap()
}

fn listing(set: &HolidaySet) -> Vec<(String, String)> {
    set.iter()
        .map(|h| (h.date().to_string(), h.key().to_string()))
        .collect()
}

fn expected(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(d, k)| (d.to_string(), k.to_string()))
        .collect()
}

#[test]
fn united_states_2024() {
    let set = compute("US", 2024);
    assert_eq!(
        listing(&set),
        expected(&[
            ("2024-01-01", "newYearsDay"),
            ("2024-01-15", "martinLutherKingDay"),
            ("2024-02-19", "washingtonsBirthday"),
            ("2024-05-27", "memorialDay"),
            ("2024-06-19", "juneteenth"),
            ("2024-07-04", "independenceDay"),
            ("2024-09-02", "labourDay"),
            ("2024-10-14", "columbusDay"),
            ("2024-11-11", "veteransDay"),
            ("2024-11-28", "thanksgivingDay"),
            ("2024-12-25", "christmasDay"),
        ])
    );
    assert!(!compute("US", 2020).contains("juneteenth"));
}

#[test]
fn prince_edward_island_2024() {
    let set = compute("CA-PE", 2024);
    assert_eq!(
        listing(&set),
        expected(&[
            ("2024-01-01", "newYearsDay"),
            ("2024-02-19", "islanderDay"),
            ("2024-03-29", "goodFriday"),
            ("2024-05-20", "victoriaDay"),
            ("2024-07-01", "canadaDay"),
            ("2024-08-16", "goldCupParadeDay"),
            ("2024-09-02", "labourDay"),
            ("2024-10-14", "thanksgivingDay"),
            ("2024-11-11", "remembranceDay"),
            ("2024-12-25", "christmasDay"),
            ("2024-12-26", "boxingDay"),
        ])
    );
    assert_eq!(set.region(), "CA-PE");
    assert!(set.iter().all(|h| h.timezone().id() == "America/Halifax"));
    assert!(!compute("CA", 2024).contains("islanderDay"));
}

#[test]
fn gold_cup_parade_starts_in_1962() {
    assert!(!compute("CA-PE", 1961).contains("goldCupParadeDay"));
    assert_eq!(
        compute("CA-PE", 1962).get("goldCupParadeDay").unwrap().date(),
        Date::from_ymd(1962, 8, 17).unwrap()
    );
}

#[test]
fn canada_day_on_saturday_moves_to_monday() {
    let set = compute("CA", 2023);
    assert_eq!(
        set.get("canadaDay").unwrap().date(),
        Date::from_ymd(2023, 7, 3).unwrap()
    );
}

#[test]
fn obwalden_2024() {
    let set = compute("CH-OW", 2024);
    assert_eq!(
        listing(&set),
        expected(&[
            ("2024-01-01", "newYearsDay"),
            ("2024-01-02", "berchtoldsTag"),
            ("2024-03-29", "goodFriday"),
            ("2024-04-01", "easterMonday"),
            ("2024-05-09", "ascensionDay"),
            ("2024-05-20", "pentecostMonday"),
            ("2024-05-30", "corpusChristi"),
            ("2024-08-01", "swissNationalDay"),
            ("2024-08-15", "assumptionOfMary"),
            ("2024-09-25", "bruderKlausenFest"),
            ("2024-11-01", "allSaintsDay"),
            ("2024-12-08", "immaculateConception"),
            ("2024-12-25", "christmasDay"),
            ("2024-12-26", "stStephensDay"),
        ])
    );
    let official: Vec<&str> = set.of_type(HolidayType::Official).map(|h| h.key()).collect();
    assert_eq!(official, ["swissNationalDay"]);
    assert_eq!(set.of_type(HolidayType::Other).count(), 13);
    assert_eq!(set.of_type(HolidayType::Bank).count(), 0);
    assert_eq!(compute("CH", 2024).len(), 4);
}

#[test]
fn israel_2024() {
    let set = compute("IL", 2024);
    assert_eq!(
        listing(&set),
        expected(&[
            ("2024-01-01", "newYearsDay"),
            ("2024-03-24", "purim"),
            ("2024-04-23", "passover"),
            ("2024-05-13", "independenceDay"),
            ("2024-06-12", "shavuot"),
            ("2024-10-03", "roshHashanah"),
            ("2024-10-12", "yomKippur"),
            ("2024-10-17", "sukkot"),
        ])
    );
    let rosh = set.get("roshHashanah").unwrap();
    assert_eq!(rosh.name(), "Rosh Hashanah");
    assert_eq!(rosh.starts_at().unwrap().to_rfc3339(), "2024-10-03T00:00:00+03:00");
}

#[test]
fn israel_2025() {
    let set = compute("IL", 2025);
    let date = |key: &str| set.get(key).unwrap().date().to_string();
    assert_eq!(date("purim"), "2025-03-14");
    assert_eq!(date("passover"), "2025-04-13");
    assert_eq!(date("independenceDay"), "2025-05-03");
    assert_eq!(date("shavuot"), "2025-06-02");
    assert_eq!(date("roshHashanah"), "2025-09-23");
    assert_eq!(date("yomKippur"), "2025-10-02");
    assert_eq!(date("sukkot"), "2025-10-07");
}

#[test]
fn hebrew_names() {
    let engine = HolidayComputationEngine::new(HolidayRuleRegistry::builtin().unwrap());
    let set = engine.compute_with_locale("IL", 2024, "he_IL").unwrap();
    assert_eq!(set.get("independenceDay").unwrap().name(), "יום העצמאות");
    assert_eq!(set.get("roshHashanah").unwrap().name(), "ראש השנה");
}
