//! The dashboard pipeline, one pass per user interaction.
//!
//! STAGE ORDER (fixed, one-way, no stage reads back from a later one):
//!   1. Base dataset   (memoized per (count, seed, today))
//!   2. Filter         (criteria passed by value)
//!   3. Projections    (map layer, bar chart, table, CSV export)
//!
//! RULES:
//!   - The base dataset is never mutated; filtering yields a new Vec.
//!   - All randomness is seeded from config; "today" comes from the Clock.
//!   - render() may be called any number of times; identical criteria
//!     produce identical views and reuse the cached export bytes.

use std::sync::Arc;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    clock::Clock,
    config::DashboardConfig,
    dataset::{DatasetCache, DatasetKey},
    error::DashResult,
    filter::{filter, FilterCriteria},
    generator::Generator,
    projection::{table_rows, BarChart, ExportCache, ExportFile, MapLayer, TableRow},
    record::IncidentRecord,
};

/// Everything the host needs to draw one frame.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardView {
    pub title:       String,
    pub criteria:    FilterCriteria,
    pub base_count:  usize,
    pub map:         MapLayer,
    pub bars:        BarChart,
    pub table:       Vec<TableRow>,
    #[serde(skip)]
    pub rows:        Vec<IncidentRecord>,
    #[serde(skip)]
    pub export:      ExportFile,
    pub export_size: usize,
}

impl DashboardView {
    pub fn filtered_count(&self) -> usize {
        self.rows.len()
    }
}

pub struct Dashboard {
    pub config: DashboardConfig,
    clock:      Box<dyn Clock>,
    datasets:   DatasetCache,
    exports:    ExportCache,
}

impl Dashboard {
    pub fn new(config: DashboardConfig, clock: Box<dyn Clock>) -> DashResult<Self> {
        config.validate()?;
        let generator = Generator::from_config(&config);
        Ok(Self {
            config,
            clock,
            datasets: DatasetCache::new(generator),
            exports:  ExportCache::new(),
        })
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// All boroughs, all crime types, the configured window ending today.
    pub fn default_criteria(&self) -> FilterCriteria {
        FilterCriteria::defaults(self.today(), self.config.default_window_days)
    }

    pub fn base_dataset(&mut self) -> DashResult<Arc<[IncidentRecord]>> {
        let key = DatasetKey {
            count: self.config.record_count,
            seed:  self.config.seed,
            today: self.today(),
        };
        self.datasets.get_or_generate(key)
    }

    /// Run the full pipeline for one set of criteria.
    pub fn render(&mut self, criteria: FilterCriteria) -> DashResult<DashboardView> {
        let base = self.base_dataset()?;
        let rows = filter(&base, &criteria);

        let map = MapLayer::project(&rows, self.config.point_radius, self.config.map_view.clone());
        let bars = BarChart::project(&rows, self.config.bar_chart_height);
        let table = table_rows(&rows);
        let bytes = self.exports.get_or_encode(&rows)?;

        log::debug!(
            "render: {} of {} rows, {} bar groups, {} export bytes",
            rows.len(),
            base.len(),
            bars.groups.len(),
            bytes.len()
        );

        Ok(DashboardView {
            title: self.config.page_title.clone(),
            criteria,
            base_count: base.len(),
            map,
            bars,
            table,
            rows,
            export_size: bytes.len(),
            export: ExportFile {
                file_name: self.config.export_file_name.clone(),
                mime:      self.config.export_mime.clone(),
                bytes,
            },
        })
    }

    pub fn export_cache(&self) -> &ExportCache {
        &self.exports
    }
}
