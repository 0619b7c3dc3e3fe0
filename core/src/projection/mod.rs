//! Presentation projections over a filtered view.
//!
//! Each projection is a pure function of the filtered rows. None of them
//! feed back into filtering, and an empty view yields an empty projection
//! (no points, no groups, header-only CSV).

pub mod bar;
pub mod export;
pub mod map;
pub mod table;

pub use bar::{aggregate_bars, BarChart, BarGroup};
pub use export::{to_csv_bytes, write_csv, ExportCache, ExportFile, EXPORT_HEADER};
pub use map::{MapLayer, MapPoint, Tooltip};
pub use table::{table_rows, TableRow};

/// Serialization format for dates across every projection.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
