use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// Writes the default configuration file unless one already exists.
/// In test mode nothing is written.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = match &cli.config {
        Some(custom) => expand_tilde(custom),
        None => Config::config_file(),
    };

    if cli.test {
        info(format!("Test mode: configuration not written ({})", path.display()));
        return Ok(());
    }

    if Config::init_at(&path)? {
        success(format!("Config file: {}", path.display()));
    } else {
        info(format!("Config file already exists: {}", path.display()));
    }

    Ok(())
}
