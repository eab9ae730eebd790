use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::batch::{load_packages, process};
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::summary::SummaryRecord;
use crate::ui::messages::error;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        input,
        format,
        file,
        force,
    } = cmd
    {
        let packages = load_packages(&expand_tilde(input))?;

        let mut records: Vec<SummaryRecord> = Vec::with_capacity(packages.len());
        for outcome in process(&packages) {
            match outcome.result {
                Ok(record) => records.push(record),
                Err(ref e) => error(format!("{} ({}): {}", outcome.location(), outcome.kind, e)),
            }
        }

        let format = format.unwrap_or(cfg.default_export_format);
        ExportLogic::export(&records, format, &expand_tilde(file), *force)?;
    }
    Ok(())
}
