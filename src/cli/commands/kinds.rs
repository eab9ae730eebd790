use crate::models::workout_kind::WorkoutKind;
use crate::utils::formatting::{bold, meters};
use crate::utils::table::Table;

/// Handle the `kinds` command
pub fn handle() {
    let mut table = Table::new(&["TAG", "KIND", "STEP", "PAYLOAD"]);

    for kind in WorkoutKind::ALL {
        table.add_row(vec![
            kind.code().to_string(),
            kind.label().to_string(),
            meters(kind.step_length_m()),
            kind.payload_fields().join(", "),
        ]);
    }

    println!("{}", bold("Supported workout kinds"));
    print!("{}", table.render());
}
