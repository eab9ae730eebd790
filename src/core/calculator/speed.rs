use crate::core::calculator::{M_IN_KM, distance};
use crate::models::session::{Session, SessionDetails};

/// Mean speed in km/h.
///
/// Swimming ignores the stroke-based distance and uses the pool geometry.
pub fn mean_speed(session: &Session) -> f64 {
    let duration = session.training().duration_hours();

    match *session.details() {
        SessionDetails::Swimming {
            pool_length_m,
            pool_lap_count,
        } => pool_length_m * f64::from(pool_lap_count) / M_IN_KM / duration,
        SessionDetails::Running | SessionDetails::Walking { .. } => distance(session) / duration,
    }
}
