use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{build_session, summarize};
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calc { kind, values, json } = cmd {
        let session = build_session(kind, values)?;
        let record = summarize(&session);
        super::print_record(&record, *json, cfg)?;
    }
    Ok(())
}
