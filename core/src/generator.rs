//! Synthetic incident generation.
//!
//! Each record is drawn independently:
//!   1. date       : today minus a uniform whole number of days in [0, lookback)
//!   2. borough    : uniform over Borough::ALL
//!   3. crime type : uniform over CrimeType::ALL
//!   4. latitude   : uniform in [lat_min, lat_max)
//!   5. longitude  : uniform in [lon_min, lon_max)
//!
//! The draw order above is part of the output contract: changing it
//! changes every seeded dataset.

use chrono::{Days, NaiveDate};

use crate::{
    config::{BoundingBox, DashboardConfig},
    error::{DashResult, DashboardError},
    record::IncidentRecord,
    rng::{RngStream, SeededRng},
    types::{Borough, CrimeType},
};

/// Generate `n` incidents with the default bounding box and 180-day window.
pub fn generate(n: usize, seed: u64, today: NaiveDate) -> DashResult<Vec<IncidentRecord>> {
    Generator::from_config(&DashboardConfig::default()).generate(n, seed, today)
}

#[derive(Debug, Clone, Copy)]
pub struct Generator {
    pub bounds: BoundingBox,
    pub lookback_days: u32,
}

impl Generator {
    pub fn from_config(config: &DashboardConfig) -> Self {
        Self {
            bounds: config.bounds,
            lookback_days: config.lookback_days,
        }
    }

    pub fn generate(&self, n: usize, seed: u64, today: NaiveDate) -> DashResult<Vec<IncidentRecord>> {
        if n == 0 {
            return Err(DashboardError::invalid("record count must be > 0"));
        }
        if self.lookback_days == 0 {
            return Err(DashboardError::invalid("lookback_days must be > 0"));
        }
        let b = self.bounds;
        if !(b.lat_min < b.lat_max && b.lon_min < b.lon_max) {
            return Err(DashboardError::invalid(format!(
                "bounding box is empty or inverted: {b:?}"
            )));
        }

        let mut rng = SeededRng::new(seed, RngStream::Incidents);
        let mut records = Vec::with_capacity(n);
        for _ in 0..n {
            let days_back = rng.next_u64_below(u64::from(self.lookback_days));
            let date = today
                .checked_sub_days(Days::new(days_back))
                .ok_or_else(|| DashboardError::invalid(format!(
                    "{today} minus {days_back} days is out of calendar range"
                )))?;
            let borough = rng.choose(&Borough::ALL);
            let crime_type = rng.choose(&CrimeType::ALL);
            let latitude = rng.uniform(b.lat_min, b.lat_max);
            let longitude = rng.uniform(b.lon_min, b.lon_max);
            records.push(IncidentRecord::new(date, borough, crime_type, latitude, longitude)?);
        }

        log::info!(
            "generated {n} incidents (seed={seed}, stream={}, today={today})",
            rng.stream.name()
        );
        Ok(records)
    }
}
