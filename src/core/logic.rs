use crate::core::calculator::{calories, distance, mean_speed};
use crate::models::session::Session;
use crate::models::summary::SummaryRecord;

/// Compute every derived statistic for one session.
pub fn summarize(session: &Session) -> SummaryRecord {
    SummaryRecord {
        kind: session.kind(),
        duration_hours: session.training().duration_hours(),
        distance_km: distance(session),
        mean_speed_kmh: mean_speed(session),
        calories_kcal: calories(session),
    }
}
