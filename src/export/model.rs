// src/export/model.rs

use crate::models::summary::SummaryRecord;
use serde::Serialize;

/// CSV header, matching the field order of `SummaryExport`.
pub(crate) const CSV_HEADERS: [&str; 5] = [
    "kind",
    "duration_hours",
    "distance_km",
    "mean_speed_kmh",
    "calories_kcal",
];

/// Flat row written by the CSV and JSON exporters.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SummaryExport {
    pub kind: String,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl From<&SummaryRecord> for SummaryExport {
    fn from(r: &SummaryRecord) -> Self {
        Self {
            kind: r.kind_label().to_string(),
            duration_hours: r.duration_hours,
            distance_km: r.distance_km,
            mean_speed_kmh: r.mean_speed_kmh,
            calories_kcal: r.calories_kcal,
        }
    }
}
