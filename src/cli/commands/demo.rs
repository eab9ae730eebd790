use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::batch::{process, sample_packages};
use crate::errors::AppResult;
use crate::ui::messages::error;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Demo { json } = cmd {
        for outcome in process(&sample_packages()) {
            match &outcome.result {
                Ok(record) => super::print_record(record, *json, cfg)?,
                Err(e) => error(format!("{}: {}", outcome.kind, e)),
            }
        }
    }
    Ok(())
}
