//! The incident record and its validated constructor.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    error::{DashResult, DashboardError},
    types::{Borough, CrimeType, Rgba},
};

/// One simulated crime incident.
///
/// Fields are private so the coordinate check in [`IncidentRecord::new`]
/// cannot be bypassed. Color is derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IncidentRecord {
    date:       NaiveDate,
    borough:    Borough,
    crime_type: CrimeType,
    latitude:   f64,
    longitude:  f64,
}

impl IncidentRecord {
    pub fn new(
        date: NaiveDate,
        borough: Borough,
        crime_type: CrimeType,
        latitude: f64,
        longitude: f64,
    ) -> DashResult<Self> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(DashboardError::invalid(format!(
                "non-finite coordinates ({latitude}, {longitude})"
            )));
        }
        Ok(Self { date, borough, crime_type, latitude, longitude })
    }

    pub fn date(&self) -> NaiveDate           { self.date }
    pub fn borough(&self) -> Borough          { self.borough }
    pub fn crime_type(&self) -> CrimeType     { self.crime_type }
    pub fn latitude(&self) -> f64             { self.latitude }
    pub fn longitude(&self) -> f64            { self.longitude }

    /// Map color for this record's crime type.
    pub fn color(&self) -> Rgba {
        self.crime_type.color()
    }
}
