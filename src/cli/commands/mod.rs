pub mod batch;
pub mod calc;
pub mod config;
pub mod demo;
pub mod export;
pub mod init;
pub mod kinds;

use crate::config::Config;
use crate::errors::AppResult;
use crate::models::summary::SummaryRecord;
use crate::utils::formatting::format_summary_in;

/// Print one summary, either as the text line or as JSON.
pub(crate) fn print_record(record: &SummaryRecord, json: bool, cfg: &Config) -> AppResult<()> {
    if json {
        println!("{}", serde_json::to_string(record)?);
    } else {
        println!("{}", format_summary_in(record, cfg.language));
    }
    Ok(())
}
