use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::batch::{load_packages, process};
use crate::errors::AppResult;
use crate::ui::messages::{error, warning};
use crate::utils::path::expand_tilde;

/// Handle the `batch` command.
///
/// Failed packages are reported on stderr and skipped; only problems with
/// the input file itself make the command fail.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Batch { input, json } = cmd {
        let packages = load_packages(&expand_tilde(input))?;
        if packages.is_empty() {
            warning(format!("No packages found in {}", input));
            return Ok(());
        }

        let outcomes = process(&packages);
        let mut failed = 0;

        for outcome in &outcomes {
            match &outcome.result {
                Ok(record) => super::print_record(record, *json, cfg)?,
                Err(e) => {
                    failed += 1;
                    error(format!("{} ({}): {}", outcome.location(), outcome.kind, e));
                }
            }
        }

        if failed > 0 {
            warning(format!("{} of {} packages failed", failed, outcomes.len()));
        }
    }
    Ok(())
}
