//! Validate command - check evaluation report files.

use clap::Parser;
use glob::glob;
use std::fs;
use std::path::PathBuf;

use super::super::output::color;
use crate::report::RawReport;

/// Validate evaluation report files
#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Report files or directories to validate
    #[arg(required = true, value_name = "PATH")]
    pub paths: Vec<PathBuf>,
}

/// Run the validate command.
pub fn run(args: ValidateArgs) -> Result<(), String> {
    let mut files = Vec::new();
    for path in &args.paths {
        if path.is_dir() {
            let pattern = path.join("**").join("*.json");
            let matches = glob(&pattern.to_string_lossy())
                .map_err(|e| format!("bad pattern {}: {}", pattern.display(), e))?;
            files.extend(matches.filter_map(Result::ok).filter(|p| p.is_file()));
        } else {
            files.push(path.clone());
        }
    }
    files.sort();

    if files.is_empty() {
        return Err("no report files found".to_string());
    }

    let mut total_errors = 0;
    let mut total_warnings = 0;

    for file in &files {
        let body = match fs::read_to_string(file) {
            Ok(body) => body,
            Err(e) => {
                eprintln!("{} {}: {}", color("31", "error"), file.display(), e);
                total_errors += 1;
                continue;
            }
        };

        let raw = match RawReport::parse(&body) {
            Ok(raw) => raw,
            Err(e) => {
                eprintln!(
                    "{} {}: invalid JSON: {}",
                    color("31", "error"),
                    file.display(),
                    e
                );
                total_errors += 1;
                continue;
            }
        };

        let fallback = file
            .parent()
            .and_then(|p| p.file_name())
            .and_then(|n| n.to_str());
        match raw.validate(fallback) {
            Ok(report) => {
                if !(0.0..=1.0).contains(&report.score) {
                    eprintln!(
                        "{} {}: score {} outside [0.0, 1.0]",
                        color("33", "warn"),
                        file.display(),
                        report.score
                    );
                    total_warnings += 1;
                }
                for metric in &report.metrics {
                    for subset in metric.categories.iter().flat_map(|c| &c.subsets) {
                        if !(0.0..=1.0).contains(&subset.score) {
                            eprintln!(
                                "{} {}: subset '{}' score {} outside [0.0, 1.0]",
                                color("33", "warn"),
                                file.display(),
                                subset.name,
                                subset.score
                            );
                            total_warnings += 1;
                        }
                    }
                }
            }
            Err(e) => {
                eprintln!("{} {}: {}", color("31", "error"), file.display(), e);
                total_errors += 1;
            }
        }
    }

    println!();
    println!("Validated {} file(s)", files.len());
    if total_errors > 0 {
        println!("{} {} error(s)", color("31", "x"), total_errors);
    }
    if total_warnings > 0 {
        println!("{} {} warning(s)", color("33", "!"), total_warnings);
    }
    if total_errors == 0 && total_warnings == 0 {
        println!("{} all valid", color("32", "ok:"));
    }

    if total_errors > 0 {
        return Err(format!("{} validation error(s)", total_errors));
    }
    Ok(())
}
