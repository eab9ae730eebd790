use crate::core::calculator::{M_IN_KM, MIN_IN_H, mean_speed};
use crate::models::session::{Session, SessionDetails};

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 20.0;

const WLK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WLK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;

const SWM_SPEED_SHIFT: f64 = 1.1;
const SWM_WEIGHT_MULTIPLIER: f64 = 2.0;

/// Calories burned (kcal), formula selected by workout kind.
pub fn calories(session: &Session) -> f64 {
    let training = session.training();
    let speed = mean_speed(session);
    let weight = training.weight_kg();
    let duration = training.duration_hours();

    match *session.details() {
        SessionDetails::Running => {
            (RUN_SPEED_MULTIPLIER * speed - RUN_SPEED_SHIFT) * weight / M_IN_KM
                * duration
                * MIN_IN_H
        }
        SessionDetails::Walking { height_cm } => {
            // floor division: speed² // height, not a plain quotient
            let speed_height = (speed.powi(2) / height_cm).floor();
            (WLK_WEIGHT_MULTIPLIER * weight
                + speed_height * WLK_SPEED_HEIGHT_MULTIPLIER * weight)
                * (duration * MIN_IN_H)
        }
        SessionDetails::Swimming { .. } => {
            (speed + SWM_SPEED_SHIFT) * SWM_WEIGHT_MULTIPLIER * weight
        }
    }
}
