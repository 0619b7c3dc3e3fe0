//! Grouped bar series: incident counts per (borough, crime type).

use std::collections::BTreeMap;

use serde::Serialize;

use crate::{
    record::IncidentRecord,
    types::{Borough, CrimeType},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BarGroup {
    pub borough:    Borough,
    pub crime_type: CrimeType,
    pub count:      usize,
}

/// Count rows per (borough, crime type). Only non-empty groups are
/// emitted, in canonical enum order.
pub fn aggregate_bars(records: &[IncidentRecord]) -> Vec<BarGroup> {
    let mut counts: BTreeMap<(Borough, CrimeType), usize> = BTreeMap::new();
    for r in records {
        *counts.entry((r.borough(), r.crime_type())).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|((borough, crime_type), count)| BarGroup { borough, crime_type, count })
        .collect()
}

/// Chart description handed to the charting surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub x:        &'static str,
    pub y:        &'static str,
    pub color:    &'static str,
    pub bar_mode: &'static str,
    pub height:   u32,
    pub groups:   Vec<BarGroup>,
}

impl BarChart {
    pub fn project(records: &[IncidentRecord], height: u32) -> Self {
        Self {
            x:        "Alcaldía",
            y:        "Total",
            color:    "Tipo de delito",
            bar_mode: "group",
            height,
            groups:   aggregate_bars(records),
        }
    }

    pub fn total(&self) -> usize {
        self.groups.iter().map(|g| g.count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn rec(borough: Borough, crime: CrimeType) -> IncidentRecord {
        let date = NaiveDate::from_ymd_opt(2024, 2, 2).unwrap();
        IncidentRecord::new(date, borough, crime, 19.3, -99.2).unwrap()
    }

    #[test]
    fn counts_per_pair() {
        let records = vec![
            rec(Borough::Tlalpan, CrimeType::Homicide),
            rec(Borough::Coyoacan, CrimeType::Homicide),
            rec(Borough::Tlalpan, CrimeType::Homicide),
            rec(Borough::Tlalpan, CrimeType::Assault),
        ];
        let groups = aggregate_bars(&records);
        assert_eq!(
            groups,
            vec![
                BarGroup { borough: Borough::Coyoacan, crime_type: CrimeType::Homicide, count: 1 },
                BarGroup { borough: Borough::Tlalpan, crime_type: CrimeType::Homicide, count: 2 },
                BarGroup { borough: Borough::Tlalpan, crime_type: CrimeType::Assault, count: 1 },
            ]
        );
    }

    #[test]
    fn no_zero_count_groups() {
        let records = vec![rec(Borough::Cuauhtemoc, CrimeType::Kidnapping)];
        let chart = BarChart::project(&records, 400);
        assert_eq!(chart.groups.len(), 1);
        assert!(chart.groups.iter().all(|g| g.count > 0));
        assert_eq!(chart.total(), 1);
    }

    #[test]
    fn empty_view_has_no_groups() {
        assert!(aggregate_bars(&[]).is_empty());
    }
}
