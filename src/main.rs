//! scorecard - Chart.js configuration generator for LLM evaluation results.
//!
//! # Usage
//!
//! ```bash
//! # Generate every chart product from a reports directory
//! scorecard generate -i eval_result -o chart_configs
//!
//! # Only the per-dataset model comparison bars, pretty-printed
//! scorecard generate -i eval_result --chart-type model-comparison --pretty
//!
//! # Inspect what an input directory contains
//! scorecard list -i eval_result
//!
//! # Check report files before a run
//! scorecard validate eval_result/reports
//! ```

use clap::Parser;
use std::process::ExitCode;

use scorecard::cli::commands::{generate, list, report, validate};
use scorecard::cli::output::color;
use scorecard::cli::parser::{Cli, Commands};

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result: Result<(), String> = match cli.command {
        Commands::Generate(args) => generate::run(args),
        Commands::List(args) => list::run(args),
        Commands::Validate(args) => validate::run(args),
        Commands::Report(args) => report::run(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            ExitCode::FAILURE
        }
    }
}
