use crate::models::workout_kind::WorkoutKind;
use serde::Serialize;

/// Derived statistics for one session. Built once by `core::logic::summarize`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryRecord {
    #[serde(serialize_with = "serialize_label")]
    pub kind: WorkoutKind,
    pub duration_hours: f64,
    pub distance_km: f64,
    pub mean_speed_kmh: f64,
    pub calories_kcal: f64,
}

impl SummaryRecord {
    pub fn kind_label(&self) -> &'static str {
        self.kind.label()
    }
}

fn serialize_label<S: serde::Serializer>(kind: &WorkoutKind, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(kind.label())
}
