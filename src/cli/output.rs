//! Output formatting utilities for CLI commands.

use is_terminal::IsTerminal;
use std::io::{self, Write};

use crate::color::ScoreBand;

/// Log info message (respects quiet flag).
pub fn log_info(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{}", msg);
    }
}

/// Log a warning with a colored prefix (respects quiet flag).
pub fn log_warning(msg: &str, quiet: bool) {
    if !quiet {
        eprintln!("{} {}", color("33", "warn:"), msg);
    }
}

/// Write output to file or stdout.
pub fn write_output(content: &str, path: Option<&std::path::Path>) -> Result<(), String> {
    if let Some(path) = path {
        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write to {}: {}", path.display(), e))?;
    } else {
        print!("{}", content);
        io::stdout()
            .flush()
            .map_err(|e| format!("Failed to flush stdout: {}", e))?;
    }
    Ok(())
}

/// Colorize text with ANSI escape codes (only if stdout is a terminal).
pub fn color(code: &str, text: &str) -> String {
    if io::stdout().is_terminal() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

/// Format a score with color based on its band.
pub fn score_colored(score: Option<f64>) -> String {
    let code = match ScoreBand::classify(score) {
        ScoreBand::Good => "1;32",
        ScoreBand::Average => "1;33",
        ScoreBand::Poor => "1;31",
        ScoreBand::Missing => "90",
    };
    match score {
        Some(s) => color(code, &format!("{:.4}", s)),
        None => color(code, "   n/a"),
    }
}
