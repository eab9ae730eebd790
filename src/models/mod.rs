pub mod package;
pub mod session;
pub mod summary;
pub mod workout_kind;

pub use package::Package;
pub use session::{Session, SessionDetails, Training};
pub use summary::SummaryRecord;
pub use workout_kind::WorkoutKind;
