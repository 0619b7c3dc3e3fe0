//! Point-layer projection for the incident map.

use chrono::NaiveDate;
use serde::Serialize;

use crate::{
    config::MapViewConfig,
    projection::DATE_FORMAT,
    record::IncidentRecord,
    types::{Borough, CrimeType, Rgba},
};

pub const LAYER_KIND: &str = "ScatterplotLayer";

pub const TOOLTIP_TEMPLATE: &str =
    "<b>Delito:</b> {Tipo de delito}<br/><b>Alcaldía:</b> {Alcaldía}<br/><b>Fecha:</b> {Fecha}";

/// One plotted incident.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub longitude:  f64,
    pub latitude:   f64,
    pub fill_color: Rgba,
    pub radius:     u32,
    pub crime_type: CrimeType,
    pub borough:    Borough,
    #[serde(serialize_with = "serialize_date")]
    pub date:       NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TooltipStyle {
    #[serde(rename = "backgroundColor")]
    pub background_color: &'static str,
    pub color:            &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub html:  &'static str,
    pub style: TooltipStyle,
}

impl Default for Tooltip {
    fn default() -> Self {
        Self {
            html: TOOLTIP_TEMPLATE,
            style: TooltipStyle { background_color: "steelblue", color: "white" },
        }
    }
}

impl Tooltip {
    /// Fill the template with one point's fields.
    pub fn render(&self, point: &MapPoint) -> String {
        self.html
            .replace("{Tipo de delito}", point.crime_type.label())
            .replace("{Alcaldía}", point.borough.label())
            .replace("{Fecha}", &point.date.format(DATE_FORMAT).to_string())
    }
}

/// Everything the map surface needs: camera, points, tooltip.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapLayer {
    pub kind:     &'static str,
    pub pickable: bool,
    pub view:     MapViewConfig,
    pub points:   Vec<MapPoint>,
    pub tooltip:  Tooltip,
}

impl MapLayer {
    pub fn project(records: &[IncidentRecord], radius: u32, view: MapViewConfig) -> Self {
        let points = records
            .iter()
            .map(|r| MapPoint {
                longitude:  r.longitude(),
                latitude:   r.latitude(),
                fill_color: r.color(),
                radius,
                crime_type: r.crime_type(),
                borough:    r.borough(),
                date:       r.date(),
            })
            .collect();
        Self {
            kind: LAYER_KIND,
            pickable: true,
            view,
            points,
            tooltip: Tooltip::default(),
        }
    }
}

pub(crate) fn serialize_date<S: serde::Serializer>(date: &NaiveDate, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(&date.format(DATE_FORMAT))
}
