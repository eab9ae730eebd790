// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::SummaryExport;
use crate::models::summary::SummaryRecord;
use crate::ui::messages::warning;
use log::debug;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `records` to `path` in the given format.
    ///
    /// An existing file is only replaced when `force` is set. With no
    /// records the file still gets written (CSV header only, or `[]`).
    pub fn export(
        records: &[SummaryRecord],
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if records.is_empty() {
            warning("No summaries to export, writing an empty file.");
        }

        let rows: Vec<SummaryExport> = records.iter().map(SummaryExport::from).collect();
        debug!(
            "exporting {} rows as {} to {}",
            rows.len(),
            format.as_str(),
            path.display()
        );

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(())
    }
}
