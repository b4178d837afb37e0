//! Report discovery and loading.
//!
//! Reports live under `{root}/{model}/{dataset}.json`, optionally grouped in
//! further subdirectories. A `reports/` directory directly under the root is
//! descended into automatically, matching the layout produced by the
//! evaluation pipeline.

use glob::glob;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::report::{EvaluationReport, RawReport};

/// Result of scanning an input root for report files.
#[derive(Debug, Default)]
pub struct LoadOutcome {
    /// Successfully loaded reports, in lexicographic file order.
    pub reports: Vec<EvaluationReport>,
    /// One warning per skipped file.
    pub warnings: Vec<String>,
    /// Total JSON files seen.
    pub files_found: usize,
}

impl LoadOutcome {
    /// Number of files that failed to parse or validate.
    pub fn files_skipped(&self) -> usize {
        self.files_found - self.reports.len()
    }
}

/// Load every report found under `root`.
///
/// Files are enumerated lexicographically by path so that duplicate
/// (model, dataset) handling downstream is deterministic. Malformed files are
/// skipped and recorded as warnings; only a missing root is fatal.
pub fn load_reports(root: &Path) -> Result<LoadOutcome> {
    if !root.is_dir() {
        return Err(Error::invalid_input(format!(
            "input directory does not exist: {}",
            root.display()
        )));
    }
    let root = effective_root(root);

    let pattern = root.join("**").join("*.json");
    let pattern = pattern.to_string_lossy().into_owned();
    let mut paths: Vec<PathBuf> = glob(&pattern)
        .map_err(|e| Error::invalid_input(format!("bad pattern {}: {}", pattern, e)))?
        .filter_map(std::result::Result::ok)
        .filter(|p| p.is_file())
        .collect();
    paths.sort();

    let mut outcome = LoadOutcome {
        files_found: paths.len(),
        ..Default::default()
    };
    for path in &paths {
        match load_one(&root, path) {
            Ok(report) => outcome.reports.push(report),
            Err(e) => outcome.warnings.push(format!("{}: {}", path.display(), e)),
        }
    }
    Ok(outcome)
}

/// Descend into a `reports/` directory when the root carries one.
fn effective_root(root: &Path) -> PathBuf {
    let reports = root.join("reports");
    if reports.is_dir() {
        reports
    } else {
        root.to_path_buf()
    }
}

fn load_one(root: &Path, path: &Path) -> Result<EvaluationReport> {
    let body = fs::read_to_string(path)?;
    RawReport::parse(&body)?.validate(model_dir(root, path).as_deref())
}

/// First path component under the root, i.e. the model directory. Files
/// sitting directly in the root have none.
fn model_dir(root: &Path, path: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    if rel.components().count() < 2 {
        return None;
    }
    rel.components()
        .next()
        .map(|c| c.as_os_str().to_string_lossy().into_owned())
}
