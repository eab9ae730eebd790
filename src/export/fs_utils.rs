// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;

/// Check that the output file can be created.
///
/// - file does not exist → Ok (parent directories are created)
/// - file exists and `force` → Ok, it will be overwritten
/// - file exists without `force` → `ExportExists`
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if path.exists() {
        if !force {
            return Err(AppError::ExportExists(path.display().to_string()));
        }
        warning(format!("Overwriting existing file '{}'.", path.display()));
        return Ok(());
    }

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
    {
        fs::create_dir_all(dir)?;
    }

    Ok(())
}
