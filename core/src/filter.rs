//! Filter engine: a conjunction of three predicates over the base dataset.
//!
//! RULES:
//!   - An empty selection matches nothing. There is no "empty means all".
//!   - date_start > date_end matches nothing. Bounds are never swapped.
//!   - Output keeps the base dataset's order.

use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::{
    record::IncidentRecord,
    types::{Borough, CrimeType},
};

/// User-selected filters, owned by the host and passed in by value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    pub selected_boroughs:    BTreeSet<Borough>,
    pub selected_crime_types: BTreeSet<CrimeType>,
    /// Inclusive.
    pub date_start:           NaiveDate,
    /// Inclusive.
    pub date_end:             NaiveDate,
}

impl FilterCriteria {
    /// Everything selected, dates from `today - window_days` to `today`.
    pub fn defaults(today: NaiveDate, window_days: u32) -> Self {
        Self {
            selected_boroughs:    Borough::ALL.into_iter().collect(),
            selected_crime_types: CrimeType::ALL.into_iter().collect(),
            date_start:           today.checked_sub_days(Days::new(u64::from(window_days)))
                                       .unwrap_or(NaiveDate::MIN),
            date_end:             today,
        }
    }

    pub fn is_inverted(&self) -> bool {
        self.date_start > self.date_end
    }

    /// True iff the record passes all three predicates.
    pub fn matches(&self, record: &IncidentRecord) -> bool {
        self.selected_boroughs.contains(&record.borough())
            && self.selected_crime_types.contains(&record.crime_type())
            && self.date_start <= record.date()
            && record.date() <= self.date_end
    }
}

/// Produce the filtered view. The base slice is left untouched.
pub fn filter(records: &[IncidentRecord], criteria: &FilterCriteria) -> Vec<IncidentRecord> {
    if criteria.selected_boroughs.is_empty() || criteria.selected_crime_types.is_empty() {
        log::debug!("filter: empty selection, returning no rows");
        return Vec::new();
    }
    if criteria.is_inverted() {
        log::debug!(
            "filter: date_start {} after date_end {}, returning no rows",
            criteria.date_start,
            criteria.date_end
        );
        return Vec::new();
    }

    let view: Vec<IncidentRecord> = records
        .iter()
        .filter(|r| criteria.matches(r))
        .copied()
        .collect();
    log::debug!("filter: {} of {} rows kept", view.len(), records.len());
    view
}
