//! List command - show models and datasets found under an input directory.

use clap::Parser;
use std::path::PathBuf;

use super::super::output::{color, log_warning, score_colored};
use crate::aggregate::ScoreIndex;
use crate::loader;

/// List models and datasets found under an input directory
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Directory containing evaluation reports
    #[arg(short, long, value_name = "DIR")]
    pub input: PathBuf,

    /// Emit machine-readable JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Minimal output (suppress warnings)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the list command.
pub fn run(args: ListArgs) -> Result<(), String> {
    let loaded = loader::load_reports(&args.input).map_err(|e| e.to_string())?;
    let index = ScoreIndex::from_reports(&loaded.reports);

    if args.json {
        let scores: Vec<_> = index
            .models()
            .iter()
            .map(|model| {
                let datasets: Vec<_> = index
                    .datasets()
                    .iter()
                    .map(|dataset| {
                        serde_json::json!({
                            "dataset": dataset,
                            "score": index.score(model, dataset),
                        })
                    })
                    .collect();
                serde_json::json!({"model": model, "datasets": datasets})
            })
            .collect();
        let out = serde_json::json!({
            "models": index.models(),
            "datasets": index.datasets(),
            "reports_loaded": loaded.reports.len(),
            "files_skipped": loaded.files_skipped(),
            "scores": scores,
        });
        println!(
            "{}",
            serde_json::to_string_pretty(&out).unwrap_or_default()
        );
        return Ok(());
    }

    for warning in &loaded.warnings {
        log_warning(warning, args.quiet);
    }

    println!();
    println!("{}", color("1;36", "Evaluation Reports"));
    println!();
    println!(
        "  {} model(s), {} dataset(s), {} report(s) loaded, {} skipped",
        index.models().len(),
        index.datasets().len(),
        loaded.reports.len(),
        loaded.files_skipped()
    );
    println!();

    for model in index.models() {
        println!("  {}", color("1;37", model));
        for dataset in index.datasets() {
            println!(
                "    {:<32} {}",
                index.pretty_name(dataset),
                score_colored(index.score(model, dataset))
            );
        }
        println!();
    }

    Ok(())
}
