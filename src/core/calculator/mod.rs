//! Closed-form workout formulas.

pub mod calories;
pub mod distance;
pub mod speed;

pub use calories::calories;
pub use distance::distance;
pub use speed::mean_speed;

/// Meters in a kilometer
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour
pub const MIN_IN_H: f64 = 60.0;
