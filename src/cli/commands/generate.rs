//! Generate command - build chart configuration files from evaluation reports.

use clap::Parser;
use std::path::PathBuf;

use super::super::output::{color, log_info, log_warning};
use super::super::parser::ChartSelection;
use crate::aggregate::ScoreIndex;
use crate::builders;
use crate::chart::ChartKind;
use crate::loader;
use crate::writer::{self, ChartJob, Manifest};

/// Generate chart configuration files from evaluation reports
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Directory containing evaluation reports
    #[arg(short, long, value_name = "DIR")]
    pub input: PathBuf,

    /// Output directory for chart configurations
    #[arg(short, long, value_name = "DIR", default_value = "chart_configs")]
    pub output: PathBuf,

    /// Type of charts to generate
    #[arg(long, default_value = "all")]
    pub chart_type: ChartSelection,

    /// Pretty-print the generated JSON
    #[arg(long)]
    pub pretty: bool,

    /// Minimal output (suppress warnings and non-essential messages)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Decide which charts a run produces for the aggregated index.
///
/// Comparison bars need at least two things to compare; radars need subset
/// data; the overview needs any report at all. Iteration follows the index's
/// first-seen orders, so the job list is deterministic.
fn plan_jobs(index: &ScoreIndex, selection: ChartSelection) -> Vec<ChartJob> {
    let mut jobs = Vec::new();

    if selection.includes(ChartKind::ModelComparison) {
        for dataset in index.datasets() {
            if index.models_for_dataset(dataset).len() > 1 {
                jobs.push(ChartJob {
                    config: builders::model_comparison(index, dataset),
                    kind: ChartKind::ModelComparison,
                    model: None,
                    dataset: Some(dataset.clone()),
                });
            }
        }
    }

    if selection.includes(ChartKind::DatasetComparison) {
        for model in index.models() {
            if index.datasets_for_model(model).len() > 1 {
                jobs.push(ChartJob {
                    config: builders::dataset_comparison(index, model),
                    kind: ChartKind::DatasetComparison,
                    model: Some(model.clone()),
                    dataset: None,
                });
            }
        }
    }

    if selection.includes(ChartKind::CategoryRadar) {
        for model in index.models() {
            for dataset in index.datasets_for_model(model) {
                let has_subsets = index
                    .category_scores(model, &dataset)
                    .iter()
                    .any(|c| !c.subsets.is_empty());
                if has_subsets {
                    jobs.push(ChartJob {
                        config: builders::category_radar(index, model, &dataset),
                        kind: ChartKind::CategoryRadar,
                        model: Some(model.clone()),
                        dataset: Some(dataset.clone()),
                    });
                }
            }
        }
    }

    if selection.includes(ChartKind::MetricComparison) {
        for model in index.models() {
            for dataset in index.datasets_for_model(model) {
                if index.metric_scores(model, &dataset).len() > 1 {
                    jobs.push(ChartJob {
                        config: builders::metric_comparison(index, model, &dataset),
                        kind: ChartKind::MetricComparison,
                        model: Some(model.clone()),
                        dataset: Some(dataset.clone()),
                    });
                }
            }
        }
    }

    if selection.includes(ChartKind::Overview) && !index.is_empty() {
        jobs.push(ChartJob {
            config: builders::overview(index),
            kind: ChartKind::Overview,
            model: None,
            dataset: None,
        });
    }

    jobs
}

/// Run the generate command.
pub fn run(args: GenerateArgs) -> Result<(), String> {
    let loaded = loader::load_reports(&args.input).map_err(|e| e.to_string())?;
    log_info(
        &format!(
            "Found {} report files under {}",
            loaded.files_found,
            args.input.display()
        ),
        args.quiet,
    );

    let index = ScoreIndex::from_reports(&loaded.reports);
    let jobs = plan_jobs(&index, args.chart_type);

    let write_outcome =
        writer::write_charts(&args.output, jobs, args.pretty).map_err(|e| e.to_string())?;
    let charts_failed = write_outcome.warnings.len();

    let mut warnings = loaded.warnings.clone();
    warnings.extend(write_outcome.warnings);

    let manifest = Manifest {
        charts_generated: write_outcome.written.len(),
        models: index.models().to_vec(),
        datasets: index.datasets().to_vec(),
        charts: write_outcome.written,
    };
    if let Err(e) = writer::write_manifest(&args.output, &manifest, args.pretty) {
        warnings.push(format!("{}: {}", writer::MANIFEST_FILE, e));
    }

    for warning in &warnings {
        log_warning(warning, args.quiet);
    }

    println!();
    println!(
        "Loaded {} of {} report files ({} skipped)",
        loaded.reports.len(),
        loaded.files_found,
        loaded.files_skipped()
    );
    println!(
        "Wrote {} charts to {} ({} failed)",
        manifest.charts_generated,
        args.output.display(),
        charts_failed
    );
    if warnings.is_empty() {
        println!("{} no warnings", color("32", "ok:"));
    } else {
        println!("{} {} warning(s)", color("33", "!"), warnings.len());
    }

    // Partial success still exits 0; only setup failures above bail out.
    Ok(())
}
