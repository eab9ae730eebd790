use std::fmt;

/// Supported workout types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,  // RUN
    Walking,  // WLK
    Swimming, // SWM
}

impl WorkoutKind {
    pub const ALL: [WorkoutKind; 3] = [
        WorkoutKind::Running,
        WorkoutKind::Walking,
        WorkoutKind::Swimming,
    ];

    /// Short tag used in packages and on the command line
    pub fn code(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "RUN",
            WorkoutKind::Walking => "WLK",
            WorkoutKind::Swimming => "SWM",
        }
    }

    /// Label shown in summaries
    pub fn label(&self) -> &'static str {
        match self {
            WorkoutKind::Running => "Running",
            WorkoutKind::Walking => "SportsWalking",
            WorkoutKind::Swimming => "Swimming",
        }
    }

    /// Distance covered by one action (step or stroke), in meters
    pub fn step_length_m(&self) -> f64 {
        match self {
            WorkoutKind::Running | WorkoutKind::Walking => 0.65,
            WorkoutKind::Swimming => 1.38,
        }
    }

    /// Number of values expected in a package payload
    pub fn payload_arity(&self) -> usize {
        match self {
            WorkoutKind::Running => 3,
            WorkoutKind::Walking => 4,
            WorkoutKind::Swimming => 5,
        }
    }

    /// Payload field names, in order
    pub fn payload_fields(&self) -> &'static [&'static str] {
        match self {
            WorkoutKind::Running => &["action", "duration_h", "weight_kg"],
            WorkoutKind::Walking => &["action", "duration_h", "weight_kg", "height_cm"],
            WorkoutKind::Swimming => &[
                "action",
                "duration_h",
                "weight_kg",
                "pool_length_m",
                "pool_laps",
            ],
        }
    }

    /// Helper: convert a tag from input (lowercase or uppercase)
    pub fn from_code(code: &str) -> Option<Self> {
        let code = code.trim().to_uppercase();
        Self::ALL.into_iter().find(|k| k.code() == code)
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
