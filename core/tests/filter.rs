//! Filter engine properties over the default 500-row dataset.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use tablero_core::{filter, generate, Borough, CrimeType, FilterCriteria, IncidentRecord};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 21).unwrap()
}

fn base() -> Vec<IncidentRecord> {
    generate(500, 42, today()).expect("generate")
}

fn narrow() -> FilterCriteria {
    FilterCriteria {
        selected_boroughs:    [Borough::Coyoacan, Borough::Iztapalapa, Borough::Tlalpan].into_iter().collect(),
        selected_crime_types: [CrimeType::Homicide, CrimeType::StreetRobbery].into_iter().collect(),
        date_start:           today() - Days::new(90),
        date_end:             today() - Days::new(10),
    }
}

fn satisfies(r: &IncidentRecord, c: &FilterCriteria) -> bool {
    c.selected_boroughs.contains(&r.borough())
        && c.selected_crime_types.contains(&r.crime_type())
        && c.date_start <= r.date()
        && r.date() <= c.date_end
}

/// Every kept row passes all three predicates; every dropped row fails one.
#[test]
fn kept_and_dropped_rows_partition_by_predicate() {
    let records = base();
    let criteria = narrow();
    let view = filter(&records, &criteria);

    assert!(!view.is_empty(), "narrow criteria should still match something in 500 rows");
    assert!(view.iter().all(|r| satisfies(r, &criteria)));

    let kept = records.iter().filter(|r| satisfies(r, &criteria)).count();
    assert_eq!(kept, view.len(), "filter dropped a row that satisfies every predicate");
}

#[test]
fn view_is_ordered_subsequence_of_base() {
    let records = base();
    let view = filter(&records, &narrow());

    let mut cursor = records.iter();
    for row in &view {
        assert!(
            cursor.any(|r| r == row),
            "row {row:?} is out of base order or not in base"
        );
    }
}

#[test]
fn empty_borough_selection_yields_nothing() {
    let criteria = FilterCriteria { selected_boroughs: BTreeSet::new(), ..narrow() };
    assert!(filter(&base(), &criteria).is_empty());
}

#[test]
fn empty_crime_selection_yields_nothing() {
    let criteria = FilterCriteria { selected_crime_types: BTreeSet::new(), ..narrow() };
    assert!(filter(&base(), &criteria).is_empty());
}

#[test]
fn inverted_range_yields_nothing() {
    let criteria = FilterCriteria {
        date_start: today(),
        date_end:   today() - Days::new(1),
        ..FilterCriteria::defaults(today(), 60)
    };
    assert!(criteria.is_inverted());
    assert!(filter(&base(), &criteria).is_empty());
}

#[test]
fn full_selection_over_whole_window_keeps_everything() {
    let records = base();
    let criteria = FilterCriteria::defaults(today(), 180);
    assert_eq!(filter(&records, &criteria), records);
}

#[test]
fn base_dataset_is_untouched() {
    let records = base();
    let before = records.clone();
    let _ = filter(&records, &narrow());
    assert_eq!(records, before);
}

#[test]
fn coyoacan_homicide_january_scenario() {
    let d = |m, day| NaiveDate::from_ymd_opt(2024, m, day).unwrap();
    let records = vec![
        IncidentRecord::new(d(1, 10), Borough::Coyoacan, CrimeType::Homicide, 19.35, -99.16).unwrap(),
        IncidentRecord::new(d(3, 1), Borough::Tlalpan, CrimeType::StreetRobbery, 19.29, -99.17).unwrap(),
        IncidentRecord::new(d(5, 1), Borough::Coyoacan, CrimeType::Homicide, 19.33, -99.15).unwrap(),
    ];
    let criteria = FilterCriteria {
        selected_boroughs:    [Borough::Coyoacan].into_iter().collect(),
        selected_crime_types: [CrimeType::Homicide].into_iter().collect(),
        date_start:           d(1, 1),
        date_end:             d(2, 1),
    };

    let view = filter(&records, &criteria);
    assert_eq!(view, vec![records[0]]);
}

#[test]
fn criteria_deserialize_from_spanish_labels() {
    let json = r#"{
        "selected_boroughs": ["Coyoacán", "Álvaro Obregón"],
        "selected_crime_types": ["Robo a transeúnte"],
        "date_start": "2024-01-01",
        "date_end": "2024-02-01"
    }"#;
    let criteria: FilterCriteria = serde_json::from_str(json).expect("parse criteria");
    assert!(criteria.selected_boroughs.contains(&Borough::AlvaroObregon));
    assert_eq!(criteria.selected_crime_types.len(), 1);
    assert_eq!(criteria.date_end, NaiveDate::from_ymd_opt(2024, 2, 1).unwrap());
}
