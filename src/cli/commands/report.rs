//! Report command - write a Markdown summary of evaluation results.

use clap::Parser;
use std::path::PathBuf;

use super::super::output::{log_info, log_warning, write_output};
use crate::aggregate::ScoreIndex;
use crate::loader;
use crate::markdown;

/// Write a Markdown summary of evaluation results
#[derive(Parser, Debug)]
pub struct ReportArgs {
    /// Directory containing evaluation reports
    #[arg(short, long, value_name = "DIR")]
    pub input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Minimal output (suppress warnings and non-essential messages)
    #[arg(short, long)]
    pub quiet: bool,
}

/// Run the report command.
pub fn run(args: ReportArgs) -> Result<(), String> {
    let loaded = loader::load_reports(&args.input).map_err(|e| e.to_string())?;
    for warning in &loaded.warnings {
        log_warning(warning, args.quiet);
    }

    let index = ScoreIndex::from_reports(&loaded.reports);
    let summary = markdown::render_summary(&index);

    write_output(&summary, args.output.as_deref())?;
    if let Some(path) = &args.output {
        log_info(&format!("Report written to {}", path.display()), args.quiet);
    }
    Ok(())
}
