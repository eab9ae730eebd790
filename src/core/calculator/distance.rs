use crate::core::calculator::M_IN_KM;
use crate::models::session::Session;

/// Distance in km derived from the action count (steps or strokes).
pub fn distance(session: &Session) -> f64 {
    session.training().action_count() as f64 * session.kind().step_length_m() / M_IN_KM
}
