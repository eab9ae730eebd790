//! Unified application error type.
//! Every module (core, cli, config, export) returns AppError so the
//! binary can report failures in a single place.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO / serialization
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    // ---------------------------
    // Session building
    // ---------------------------
    #[error("Unknown workout kind: {0}")]
    UnknownWorkoutKind(String),

    #[error("Invalid payload for {kind}: expected {expected} values, got {got}")]
    PayloadArity {
        kind: String,
        expected: usize,
        got: usize,
    },

    #[error("Invalid session input: {0}")]
    InvalidSessionInput(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Output file already exists: {0} (use --force to overwrite)")]
    ExportExists(String),

    #[error("Export error: {0}")]
    Export(String),
}

pub type AppResult<T> = Result<T, AppError>;
