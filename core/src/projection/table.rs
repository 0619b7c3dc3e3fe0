use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    projection::map::serialize_date,
    record::IncidentRecord,
    types::{Borough, CrimeType},
};

/// One row of the on-screen data table. `index` restarts at 0 for every
/// filtered view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableRow {
    pub index:      usize,
    #[serde(serialize_with = "serialize_date")]
    pub date:       NaiveDate,
    pub borough:    Borough,
    pub crime_type: CrimeType,
    pub latitude:   f64,
    pub longitude:  f64,
}

pub fn table_rows(records: &[IncidentRecord]) -> Vec<TableRow> {
    records
        .iter()
        .enumerate()
        .map(|(index, r)| TableRow {
            index,
            date:       r.date(),
            borough:    r.borough(),
            crime_type: r.crime_type(),
            latitude:   r.latitude(),
            longitude:  r.longitude(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_is_reset_and_order_kept() {
        let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
        let records = vec![
            IncidentRecord::new(d(3), Borough::Tlalpan, CrimeType::Assault, 19.4, -99.1).unwrap(),
            IncidentRecord::new(d(1), Borough::Coyoacan, CrimeType::Homicide, 19.3, -99.2).unwrap(),
        ];
        let rows = table_rows(&records);
        assert_eq!(rows.iter().map(|r| r.index).collect::<Vec<_>>(), vec![0, 1]);
        assert_eq!(rows[0].date, d(3));
        assert_eq!(rows[1].borough, Borough::Coyoacan);
    }
}
