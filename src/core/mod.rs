pub mod batch;
pub mod calculator;
pub mod logic;
pub mod package;

pub use batch::{BatchOutcome, load_packages, process, sample_packages};
pub use logic::summarize;
pub use package::build_session;
