//! Session builder: maps a kind tag and an ordered payload to a `Session`.

use crate::errors::{AppError, AppResult};
use crate::models::session::{Session, Training};
use crate::models::workout_kind::WorkoutKind;
use log::debug;

type SessionReader = fn(&[f64]) -> AppResult<Session>;

/// Tag → constructor dispatch table.
const READERS: [(WorkoutKind, SessionReader); 3] = [
    (WorkoutKind::Swimming, read_swimming),
    (WorkoutKind::Running, read_running),
    (WorkoutKind::Walking, read_walking),
];

/// Build the session matching `kind_tag` from `payload`.
///
/// Tags are matched case-insensitively. An unknown tag fails with
/// `UnknownWorkoutKind` carrying the tag exactly as given.
pub fn build_session(kind_tag: &str, payload: &[f64]) -> AppResult<Session> {
    let unknown = || AppError::UnknownWorkoutKind(kind_tag.to_string());

    let kind = WorkoutKind::from_code(kind_tag).ok_or_else(unknown)?;
    let reader = READERS
        .iter()
        .find(|(k, _)| *k == kind)
        .map(|(_, reader)| *reader)
        .ok_or_else(unknown)?;

    if payload.len() != kind.payload_arity() {
        return Err(AppError::PayloadArity {
            kind: kind.code().to_string(),
            expected: kind.payload_arity(),
            got: payload.len(),
        });
    }

    let session = reader(payload)?;
    debug!("built {} session from {:?}", kind.code(), payload);
    Ok(session)
}

fn read_training(payload: &[f64]) -> AppResult<Training> {
    let action = whole_number(payload[0], "action count")?;
    Training::new(action, payload[1], payload[2])
}

fn read_running(payload: &[f64]) -> AppResult<Session> {
    Ok(Session::running(read_training(payload)?))
}

fn read_walking(payload: &[f64]) -> AppResult<Session> {
    Session::walking(read_training(payload)?, payload[3])
}

fn read_swimming(payload: &[f64]) -> AppResult<Session> {
    let laps = whole_number(payload[4], "pool lap count")?;
    let laps = u32::try_from(laps).map_err(|_| {
        AppError::InvalidSessionInput(format!("pool lap count is too large: {laps}"))
    })?;
    Session::swimming(read_training(payload)?, payload[3], laps)
}

/// Counts arrive as f64 but must be non-negative integers.
fn whole_number(value: f64, what: &str) -> AppResult<u64> {
    if !value.is_finite() || value < 0.0 || value.fract() != 0.0 || value >= u64::MAX as f64 {
        return Err(AppError::InvalidSessionInput(format!(
            "{what} must be a non-negative whole number, got {value}"
        )));
    }
    Ok(value as u64)
}
