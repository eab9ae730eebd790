//! Batch processing of packages read from a file.
//!
//! Every package is built and summarized on its own; a failing package is
//! reported in its outcome and never stops the rest of the batch.

use crate::core::logic::summarize;
use crate::core::package::build_session;
use crate::errors::{AppError, AppResult};
use crate::models::package::Package;
use crate::models::summary::SummaryRecord;
use log::{debug, info};
use std::fs;
use std::path::Path;

/// Result of processing a single package.
#[derive(Debug)]
pub struct BatchOutcome {
    /// 1-based position of the package in its source
    pub index: usize,
    /// Source line, for packages read from CSV
    pub line: Option<u64>,
    pub kind: String,
    pub result: AppResult<SummaryRecord>,
}

impl BatchOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }

    /// Human readable location, e.g. `package #2 (line 5)`.
    pub fn location(&self) -> String {
        match self.line {
            Some(line) => format!("package #{} (line {})", self.index, line),
            None => format!("package #{}", self.index),
        }
    }
}

/// Built-in demo packages.
pub fn sample_packages() -> Vec<Package> {
    vec![
        Package::new("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]),
        Package::new("RUN", &[15000.0, 1.0, 75.0]),
        Package::new("WLK", &[9000.0, 1.0, 75.0, 180.0]),
    ]
}

/// Build and summarize one package.
pub fn process_package(package: &Package) -> AppResult<SummaryRecord> {
    let session = build_session(&package.kind, &package.payload)?;
    Ok(summarize(&session))
}

/// Process every package independently, keeping their order.
pub fn process(packages: &[Package]) -> Vec<BatchOutcome> {
    let outcomes: Vec<BatchOutcome> = packages
        .iter()
        .enumerate()
        .map(|(i, package)| {
            let result = process_package(package);
            if let Err(e) = &result {
                debug!("package #{} ({}) failed: {}", i + 1, package.kind, e);
            }
            BatchOutcome {
                index: i + 1,
                line: package.line,
                kind: package.kind.clone(),
                result,
            }
        })
        .collect();

    let failed = outcomes.iter().filter(|o| !o.is_ok()).count();
    info!(
        "processed {} packages ({} failed)",
        outcomes.len(),
        failed
    );
    outcomes
}

/// Load packages from `path`.
///
/// `.json`, `.yaml` and `.yml` files hold an array of `{kind, payload}`
/// objects; anything else is read as header-less CSV rows `TAG,v1,v2,...`.
pub fn load_packages(path: &Path) -> AppResult<Vec<Package>> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    debug!("loading packages from {} (format: {})", path.display(), ext);

    match ext.as_str() {
        "json" => {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        "yaml" | "yml" => {
            let content = fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&content)?)
        }
        _ => {
            let content = fs::read_to_string(path)?;
            parse_csv_packages(&content)
        }
    }
}

/// Parse header-less CSV rows. Blank lines and `#` comments are skipped.
///
/// Every other row becomes a package, even with an empty tag, so that
/// `build_session` reports it. Packages keep their source line.
pub fn parse_csv_packages(content: &str) -> AppResult<Vec<Package>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .comment(Some(b'#'))
        .from_reader(content.as_bytes());

    let mut packages = Vec::new();

    for record in rdr.records() {
        let record = record?;
        let line = record.position().map(|p| p.line());
        let mut fields = record.iter();

        let kind = fields.next().unwrap_or_default();

        let payload = fields
            .map(|v| {
                v.parse::<f64>().map_err(|_| {
                    AppError::InvalidSessionInput(format!(
                        "line {}: '{}' is not a number",
                        line.unwrap_or_default(),
                        v
                    ))
                })
            })
            .collect::<AppResult<Vec<f64>>>()?;

        packages.push(Package {
            kind: kind.to_string(),
            payload,
            line,
        });
    }

    Ok(packages)
}
