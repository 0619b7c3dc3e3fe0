//! Simulated crime-incident dashboard for Mexico City boroughs.
//!
//! Pipeline: generator -> filter -> projections (map, bar chart, table,
//! CSV export), orchestrated per interaction by [`dashboard::Dashboard`].

pub mod clock;
pub mod config;
pub mod dashboard;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod generator;
pub mod projection;
pub mod record;
pub mod rng;
pub mod types;

pub use dashboard::{Dashboard, DashboardView};
pub use error::{DashResult, DashboardError};
pub use filter::{filter, FilterCriteria};
pub use generator::generate;
pub use record::IncidentRecord;
pub use types::{Borough, CrimeType, Rgba};
