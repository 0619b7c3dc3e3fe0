//! End-to-end pipeline tests through Dashboard::render.

use chrono::{Days, NaiveDate};
use tablero_core::{
    clock::FixedClock,
    config::DashboardConfig,
    filter, generate,
    projection::to_csv_bytes,
    Borough, CrimeType, Dashboard, FilterCriteria,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 21).unwrap()
}

fn build(config: DashboardConfig) -> Dashboard {
    let _ = env_logger::builder().is_test(true).try_init();
    Dashboard::new(config, Box::new(FixedClock(today()))).expect("build dashboard")
}

#[test]
fn default_render_matches_standalone_pipeline() {
    let mut dashboard = build(DashboardConfig::default());
    let criteria = dashboard.default_criteria();
    let view = dashboard.render(criteria.clone()).unwrap();

    let expected = filter(&generate(500, 42, today()).unwrap(), &criteria);
    assert_eq!(view.base_count, 500);
    assert_eq!(view.rows, expected);
    assert_eq!(view.map.points.len(), expected.len());
    assert_eq!(view.table.len(), expected.len());
    assert_eq!(view.bars.total(), expected.len());
    assert_eq!(&view.export.bytes[..], &to_csv_bytes(&expected).unwrap()[..]);
    assert_eq!(view.export_size, view.export.bytes.len());
}

#[test]
fn default_criteria_cover_last_sixty_days() {
    let dashboard = build(DashboardConfig::default());
    let criteria = dashboard.default_criteria();
    assert_eq!(criteria.date_end, today());
    assert_eq!(criteria.date_start, today() - Days::new(60));
    assert_eq!(criteria.selected_boroughs.len(), Borough::ALL.len());
    assert_eq!(criteria.selected_crime_types.len(), CrimeType::ALL.len());
}

#[test]
fn export_file_metadata() {
    let mut dashboard = build(DashboardConfig::default());
    let view = dashboard.render(dashboard.default_criteria()).unwrap();
    assert_eq!(view.export.file_name, "datos_filtrados.csv");
    assert_eq!(view.export.mime, "text/csv");
    assert_eq!(view.title, "Tablero Geoespacial FGJCDMX");
}

#[test]
fn rerender_reuses_dataset_and_export() {
    let mut dashboard = build(DashboardConfig::default());
    let criteria = dashboard.default_criteria();

    let first = dashboard.render(criteria.clone()).unwrap();
    let second = dashboard.render(criteria).unwrap();

    assert_eq!(first.rows, second.rows);
    assert!(std::sync::Arc::ptr_eq(&first.export.bytes, &second.export.bytes));
    assert_eq!(dashboard.export_cache().hits(), 1);
    assert_eq!(dashboard.export_cache().misses(), 1);

    let base_a = dashboard.base_dataset().unwrap();
    let base_b = dashboard.base_dataset().unwrap();
    assert!(std::sync::Arc::ptr_eq(&base_a, &base_b));
}

#[test]
fn narrowing_criteria_shrinks_every_surface() {
    let mut dashboard = build(DashboardConfig::default());
    let all = dashboard.render(dashboard.default_criteria()).unwrap();

    let criteria = FilterCriteria {
        selected_boroughs: [Borough::Iztapalapa].into_iter().collect(),
        ..dashboard.default_criteria()
    };
    let narrow = dashboard.render(criteria).unwrap();

    assert!(narrow.filtered_count() < all.filtered_count());
    assert!(narrow.map.points.iter().all(|p| p.borough == Borough::Iztapalapa));
    assert!(narrow.bars.groups.iter().all(|g| g.borough == Borough::Iztapalapa));
}

#[test]
fn invalid_config_is_rejected() {
    let config = DashboardConfig { record_count: 0, ..DashboardConfig::default() };
    assert!(Dashboard::new(config, Box::new(FixedClock(today()))).is_err());
}

#[test]
fn view_serializes_without_raw_bytes() {
    let mut dashboard = build(DashboardConfig { record_count: 20, ..DashboardConfig::default() });
    let view = dashboard.render(dashboard.default_criteria()).unwrap();
    let json = serde_json::to_value(&view).unwrap();
    assert!(json.get("export").is_none());
    assert!(json.get("rows").is_none());
    assert_eq!(json["base_count"], 20);
    assert_eq!(json["map"]["kind"], "ScatterplotLayer");
    assert_eq!(json["criteria"]["date_end"], "2025-04-21");
}
