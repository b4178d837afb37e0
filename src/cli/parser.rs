//! CLI argument parsing and structure definitions.

use clap::{Parser, Subcommand, ValueEnum};

use crate::chart::ChartKind;
use crate::cli::commands;

/// Chart.js configuration generator for LLM evaluation results.
#[derive(Parser)]
#[command(name = "scorecard")]
#[command(
    author,
    version,
    about = "Aggregate LLM evaluation reports into Chart.js configuration files",
    long_about = r#"
scorecard - evaluation report visualization toolkit

Reads per-model, per-dataset evaluation result JSON files produced by an
evaluation pipeline ({root}/{model}/{dataset}.json) and turns them into
Chart.js configuration documents plus a manifest.

CHART PRODUCTS:
  • model_comparison    - models compared on one dataset (bar, per dataset)
  • dataset_comparison  - one model across all datasets (bar, per model)
  • category_radar      - subset breakdown for a model/dataset pair (radar)
  • metric_comparison   - per-metric scores for a model/dataset pair (bar)
  • overview            - every model across every dataset, merged (bar)

EXAMPLES:
  scorecard generate -i eval_result -o chart_configs
  scorecard generate -i eval_result --chart-type model-comparison --pretty
  scorecard list -i eval_result
  scorecard validate eval_result/reports
  scorecard report -i eval_result -o REPORT.md
"#
)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate chart configuration files from evaluation reports
    #[command(visible_alias = "g")]
    Generate(commands::GenerateArgs),

    /// List models and datasets found under an input directory
    #[command(visible_alias = "ls")]
    List(commands::ListArgs),

    /// Validate evaluation report files
    Validate(commands::ValidateArgs),

    /// Write a Markdown summary of evaluation results
    Report(commands::ReportArgs),
}

/// Chart products selectable on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ChartSelection {
    /// Every chart product.
    #[default]
    All,
    /// Bar charts comparing models per dataset.
    #[value(alias = "model_comparison")]
    ModelComparison,
    /// Bar charts comparing datasets per model.
    #[value(alias = "dataset_comparison")]
    DatasetComparison,
    /// Radar charts of category/subset breakdowns.
    #[value(alias = "category_radar")]
    CategoryRadar,
    /// Bar charts of per-metric scores.
    #[value(alias = "metric_comparison")]
    MetricComparison,
    /// The merged all-models overview chart.
    Overview,
}

impl ChartSelection {
    /// Whether this selection covers the given chart product.
    pub fn includes(self, kind: ChartKind) -> bool {
        match self {
            ChartSelection::All => true,
            ChartSelection::ModelComparison => kind == ChartKind::ModelComparison,
            ChartSelection::DatasetComparison => kind == ChartKind::DatasetComparison,
            ChartSelection::CategoryRadar => kind == ChartKind::CategoryRadar,
            ChartSelection::MetricComparison => kind == ChartKind::MetricComparison,
            ChartSelection::Overview => kind == ChartKind::Overview,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_selection_includes_every_kind() {
        for kind in [
            ChartKind::ModelComparison,
            ChartKind::DatasetComparison,
            ChartKind::CategoryRadar,
            ChartKind::MetricComparison,
            ChartKind::Overview,
        ] {
            assert!(ChartSelection::All.includes(kind));
        }
    }

    #[test]
    fn single_selection_excludes_other_kinds() {
        assert!(ChartSelection::CategoryRadar.includes(ChartKind::CategoryRadar));
        assert!(!ChartSelection::CategoryRadar.includes(ChartKind::Overview));
    }
}
