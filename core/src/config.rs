use serde::{Deserialize, Serialize};

use crate::error::{DashResult, DashboardError};

/// Geographic box incidents are scattered over.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundingBox {
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
}

impl Default for BoundingBox {
    fn default() -> Self {
        Self {
            lat_min: 19.2,
            lat_max: 19.5,
            lon_min: -99.25,
            lon_max: -99.05,
        }
    }
}

impl BoundingBox {
    /// Half-open on the upper edges, matching the generator's draws.
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        (self.lat_min..self.lat_max).contains(&latitude)
            && (self.lon_min..self.lon_max).contains(&longitude)
    }
}

/// Initial camera of the map widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapViewConfig {
    pub latitude: f64,
    pub longitude: f64,
    pub zoom: f64,
    pub pitch: f64,
    pub map_style: String,
}

impl Default for MapViewConfig {
    fn default() -> Self {
        Self {
            latitude: 19.35,
            longitude: -99.15,
            zoom: 10.0,
            pitch: 40.0,
            map_style: "mapbox://styles/mapbox/light-v9".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub page_title: String,
    /// Size of the simulated base dataset.
    pub record_count: usize,
    pub seed: u64,
    /// Incident dates fall in [today - lookback_days + 1, today].
    pub lookback_days: u32,
    /// Default filter window ends today and starts this many days back.
    pub default_window_days: u32,
    pub bounds: BoundingBox,
    /// Map point radius, in meters.
    pub point_radius: u32,
    pub map_view: MapViewConfig,
    pub bar_chart_height: u32,
    pub export_file_name: String,
    pub export_mime: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            page_title: "Tablero Geoespacial FGJCDMX".into(),
            record_count: 500,
            seed: 42,
            lookback_days: 180,
            default_window_days: 60,
            bounds: BoundingBox::default(),
            point_radius: 250,
            map_view: MapViewConfig::default(),
            bar_chart_height: 400,
            export_file_name: "datos_filtrados.csv".into(),
            export_mime: "text/csv".into(),
        }
    }
}

impl DashboardConfig {
    /// Load overrides from a JSON file. Missing fields keep their defaults.
    pub fn load(path: &str) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Cannot read {path}: {e}"))?;
        let config: DashboardConfig = serde_json::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Cannot parse {path}: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> DashResult<()> {
        if self.record_count == 0 {
            return Err(DashboardError::invalid("record_count must be > 0"));
        }
        if self.lookback_days == 0 {
            return Err(DashboardError::invalid("lookback_days must be > 0"));
        }
        if self.default_window_days > self.lookback_days {
            return Err(DashboardError::invalid(format!(
                "default_window_days ({}) exceeds lookback_days ({})",
                self.default_window_days, self.lookback_days
            )));
        }
        let b = &self.bounds;
        if !(b.lat_min < b.lat_max && b.lon_min < b.lon_max) {
            return Err(DashboardError::invalid(format!(
                "bounding box is empty or inverted: {b:?}"
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = DashboardConfig::default();
        config.validate().unwrap();
        assert_eq!(config.record_count, 500);
        assert_eq!(config.seed, 42);
        assert_eq!(config.export_file_name, "datos_filtrados.csv");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config: DashboardConfig =
            serde_json::from_str(r#"{ "seed": 7, "record_count": 20 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.record_count, 20);
        assert_eq!(config.lookback_days, 180);
        assert_eq!(config.bounds, BoundingBox::default());
    }

    #[test]
    fn inverted_bounds_rejected() {
        let config = DashboardConfig {
            bounds: BoundingBox { lat_min: 19.5, lat_max: 19.2, ..BoundingBox::default() },
            ..DashboardConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn window_longer_than_lookback_rejected() {
        let config = DashboardConfig {
            lookback_days: 30,
            default_window_days: 60,
            ..DashboardConfig::default()
        };
        assert!(config.validate().is_err());
    }
}
