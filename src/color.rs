//! Color selection for chart series and score bands.
//!
//! Two independent policies: deterministic palette cycling for multi-series
//! charts, and threshold-based semantic coloring for single-series score bars.
//! Colors are `#RRGGBBAA` strings; fills reuse the border hue with a
//! low-opacity alpha byte.

/// Fixed series palette (base hues). Selection wraps: `PALETTE[i % len]`.
pub const PALETTE: [&str; 12] = [
    "#FF6384", // red
    "#36A2EB", // blue
    "#FFCE56", // yellow
    "#4BC0C0", // teal
    "#9966FF", // purple
    "#FF9F40", // orange
    "#C9CBCF", // gray
    "#7EB26D", // green
    "#E377C2", // pink
    "#1F77B4", // dark blue
    "#FF7F0E", // dark orange
    "#2CA02C", // dark green
];

/// Alpha byte appended to fill colors.
pub const FILL_ALPHA: &str = "33";

/// Alpha byte appended to border and hover colors.
pub const BORDER_ALPHA: &str = "FF";

/// Neutral hue for missing scores.
pub const NEUTRAL: &str = "#C9CBCF";

/// Border color for the series at `index`.
pub fn series_border(index: usize) -> String {
    format!("{}{}", PALETTE[index % PALETTE.len()], BORDER_ALPHA)
}

/// Fill color for the series at `index`.
pub fn series_fill(index: usize) -> String {
    format!("{}{}", PALETTE[index % PALETTE.len()], FILL_ALPHA)
}

/// Semantic score band. Boundaries are fixed at 0.8 and 0.6 for every chart
/// type; only the hues differ.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    /// `score >= 0.8`
    Good,
    /// `0.6 <= score < 0.8`
    Average,
    /// `score < 0.6`
    Poor,
    /// No score recorded.
    Missing,
}

impl ScoreBand {
    /// Classify a possibly-missing score.
    pub fn classify(score: Option<f64>) -> Self {
        match score {
            None => ScoreBand::Missing,
            Some(s) if s >= 0.8 => ScoreBand::Good,
            Some(s) if s >= 0.6 => ScoreBand::Average,
            Some(_) => ScoreBand::Poor,
        }
    }
}

/// Good/average/poor hue table; one per threshold-colored chart type.
#[derive(Debug, Clone, Copy)]
pub struct BandHues {
    /// Hue for `ScoreBand::Good`.
    pub good: &'static str,
    /// Hue for `ScoreBand::Average`.
    pub average: &'static str,
    /// Hue for `ScoreBand::Poor`.
    pub poor: &'static str,
}

impl BandHues {
    /// Model-comparison bars: teal / yellow / red.
    pub const MODEL_COMPARISON: Self = Self {
        good: "#4BC0C0",
        average: "#FFCE56",
        poor: "#FF6384",
    };

    /// Dataset-comparison bars: blue / yellow / red.
    pub const DATASET_COMPARISON: Self = Self {
        good: "#36A2EB",
        average: "#FFCE56",
        poor: "#FF6384",
    };

    /// Metric-comparison bars: teal / yellow / purple.
    pub const METRIC_COMPARISON: Self = Self {
        good: "#4BC0C0",
        average: "#FFCE56",
        poor: "#9966FF",
    };

    fn hue(&self, score: Option<f64>) -> &'static str {
        match ScoreBand::classify(score) {
            ScoreBand::Good => self.good,
            ScoreBand::Average => self.average,
            ScoreBand::Poor => self.poor,
            ScoreBand::Missing => NEUTRAL,
        }
    }

    /// Fill color for a score under this table.
    pub fn fill(&self, score: Option<f64>) -> String {
        format!("{}{}", self.hue(score), FILL_ALPHA)
    }

    /// Border color for a score under this table.
    pub fn border(&self, score: Option<f64>) -> String {
        format!("{}{}", self.hue(score), BORDER_ALPHA)
    }
}
