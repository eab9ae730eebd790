//! Formatting utilities used for CLI and export outputs.

use crate::config::Language;
use crate::models::summary::SummaryRecord;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Render the one-line summary of a session (English template).
pub fn format_summary(record: &SummaryRecord) -> String {
    format_summary_in(record, Language::En)
}

/// Render the one-line summary of a session in the given language.
///
/// Every numeric field is printed with exactly 3 decimals.
pub fn format_summary_in(record: &SummaryRecord, language: Language) -> String {
    match language {
        Language::En => format!(
            "Training type: {}; Duration: {:.3} hours; Distance: {:.3} km; \
             Mean speed: {:.3} km/h; Calories burned: {:.3} kcal.",
            record.kind_label(),
            record.duration_hours,
            record.distance_km,
            record.mean_speed_kmh,
            record.calories_kcal
        ),
        Language::Ru => format!(
            "Тип тренировки: {}; Длительность: {:.3} ч.; Дистанция: {:.3} км; \
             Ср. скорость: {:.3} км/ч; Потрачено ккал: {:.3}.",
            record.kind_label(),
            record.duration_hours,
            record.distance_km,
            record.mean_speed_kmh,
            record.calories_kcal
        ),
    }
}

/// Format a step length for tables, e.g. `0.65 m`.
pub fn meters(value: f64) -> String {
    format!("{:.2} m", value)
}
