//! Typed workout sessions.
//!
//! A `Session` can only be obtained through the validating constructors,
//! so every instance has a positive duration, a positive weight and, for
//! walking, a positive height. The calculator relies on this and never
//! divides by zero.

use crate::errors::{AppError, AppResult};
use crate::models::workout_kind::WorkoutKind;

/// Measurements shared by every workout kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    action_count: u64,
    duration_hours: f64,
    weight_kg: f64,
}

impl Training {
    pub fn new(action_count: u64, duration_hours: f64, weight_kg: f64) -> AppResult<Self> {
        if !duration_hours.is_finite() || duration_hours <= 0.0 {
            return Err(AppError::InvalidSessionInput(format!(
                "duration must be a positive number of hours, got {duration_hours}"
            )));
        }
        if !weight_kg.is_finite() || weight_kg <= 0.0 {
            return Err(AppError::InvalidSessionInput(format!(
                "weight must be a positive number of kg, got {weight_kg}"
            )));
        }

        Ok(Self {
            action_count,
            duration_hours,
            weight_kg,
        })
    }

    pub fn action_count(&self) -> u64 {
        self.action_count
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// Kind-specific part of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionDetails {
    Running,
    Walking { height_cm: f64 },
    Swimming { pool_length_m: f64, pool_lap_count: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Session {
    training: Training,
    details: SessionDetails,
}

impl Session {
    pub fn running(training: Training) -> Self {
        Self {
            training,
            details: SessionDetails::Running,
        }
    }

    pub fn walking(training: Training, height_cm: f64) -> AppResult<Self> {
        if !height_cm.is_finite() || height_cm <= 0.0 {
            return Err(AppError::InvalidSessionInput(format!(
                "height must be a positive number of cm, got {height_cm}"
            )));
        }

        Ok(Self {
            training,
            details: SessionDetails::Walking { height_cm },
        })
    }

    pub fn swimming(training: Training, pool_length_m: f64, pool_lap_count: u32) -> AppResult<Self> {
        if !pool_length_m.is_finite() || pool_length_m < 0.0 {
            return Err(AppError::InvalidSessionInput(format!(
                "pool length must be a non-negative number of meters, got {pool_length_m}"
            )));
        }

        Ok(Self {
            training,
            details: SessionDetails::Swimming {
                pool_length_m,
                pool_lap_count,
            },
        })
    }

    pub fn kind(&self) -> WorkoutKind {
        match self.details {
            SessionDetails::Running => WorkoutKind::Running,
            SessionDetails::Walking { .. } => WorkoutKind::Walking,
            SessionDetails::Swimming { .. } => WorkoutKind::Swimming,
        }
    }

    pub fn training(&self) -> &Training {
        &self.training
    }

    pub fn details(&self) -> &SessionDetails {
        &self.details
    }
}
