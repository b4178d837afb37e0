//! Chart configuration documents.
//!
//! The output shape mirrors what a Chart.js front end consumes: a top-level
//! `type`, `data.labels` + `data.datasets`, and an `options` object carried as
//! an opaque JSON value with fixed conventional defaults (score axes pinned to
//! 0.0–1.0).

use serde::Serialize;
use serde_json::{json, Value};

/// The chart products this tool generates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartKind {
    /// Bar chart: models compared on one dataset.
    ModelComparison,
    /// Bar chart: one model across all datasets.
    DatasetComparison,
    /// Radar chart: subset breakdown for one (model, dataset) pair.
    CategoryRadar,
    /// Bar chart: per-metric scores for one (model, dataset) pair.
    MetricComparison,
    /// Merged bar chart: every model across every dataset.
    Overview,
}

impl ChartKind {
    /// Chart.js `type` value.
    pub fn chart_type(self) -> &'static str {
        match self {
            ChartKind::CategoryRadar => "radar",
            _ => "bar",
        }
    }

    /// Slug used in output file names and the manifest.
    pub fn slug(self) -> &'static str {
        match self {
            ChartKind::ModelComparison => "model_comparison",
            ChartKind::DatasetComparison => "dataset_comparison",
            ChartKind::CategoryRadar => "category_radar",
            ChartKind::MetricComparison => "metric_comparison",
            ChartKind::Overview => "overview",
        }
    }
}

/// A color value: one color for the whole series, or one per bar/point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Single color applied to every element of the series.
    Single(String),
    /// Positionally aligned per-element colors.
    PerPoint(Vec<String>),
}

/// One named series within a chart.
///
/// `data` is always positionally aligned with the chart's labels; missing
/// values are explicit `null`s, so the array length equals the label count.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Series display label.
    pub label: String,
    /// Label-aligned values; `None` serializes as `null`.
    pub data: Vec<Option<f64>>,
    /// Fill color(s).
    pub background_color: ColorSpec,
    /// Border color(s).
    pub border_color: ColorSpec,
    /// Border width in pixels.
    pub border_width: u32,
    /// Radar-only: fill the enclosed area.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill: Option<bool>,
    /// Radar-only point fill.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_background_color: Option<String>,
    /// Radar-only point border.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_border_color: Option<String>,
    /// Hover fill (full-opacity border hue).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_background_color: Option<String>,
    /// Hover border.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hover_border_color: Option<String>,
}

impl Series {
    /// A bar series with no radar or hover extras.
    pub fn bar(
        label: impl Into<String>,
        data: Vec<Option<f64>>,
        background_color: ColorSpec,
        border_color: ColorSpec,
    ) -> Self {
        Series {
            label: label.into(),
            data,
            background_color,
            border_color,
            border_width: 2,
            fill: None,
            point_background_color: None,
            point_border_color: None,
            hover_background_color: None,
            hover_border_color: None,
        }
    }
}

/// Labels plus series.
#[derive(Debug, Clone, Serialize)]
pub struct ChartData {
    /// Axis labels.
    pub labels: Vec<String>,
    /// Series, possibly empty when the selection key had no data.
    pub datasets: Vec<Series>,
}

/// A complete chart configuration document. Written once, never mutated.
#[derive(Debug, Serialize)]
pub struct ChartConfig {
    /// Chart.js chart type (`bar` or `radar`).
    #[serde(rename = "type")]
    pub chart_type: &'static str,
    /// Labels and series.
    pub data: ChartData,
    /// Opaque options passthrough.
    pub options: Value,
}

impl ChartConfig {
    /// Serialize to JSON, pretty-printed or compact.
    pub fn to_json(&self, pretty: bool) -> crate::Result<String> {
        let out = if pretty {
            serde_json::to_string_pretty(self)
        } else {
            serde_json::to_string(self)
        };
        out.map_err(|e| crate::Error::output(format!("chart serialization failed: {}", e)))
    }
}

/// Conventional options for score bar charts: y axis pinned to [0, 1].
pub fn bar_options(title: &str) -> Value {
    json!({
        "responsive": true,
        "maintainAspectRatio": true,
        "plugins": {
            "title": {
                "display": true,
                "text": title,
                "color": "#333",
                "font": {"size": 18, "weight": "bold"}
            },
            "legend": {"position": "top"},
            "tooltip": {"enabled": true, "mode": "index", "intersect": false}
        },
        "scales": {
            "x": {"type": "category", "display": true, "grid": {"display": false}},
            "y": {
                "type": "linear",
                "display": true,
                "min": 0.0,
                "max": 1.0,
                "title": {"display": true, "text": "Score", "color": "#666", "font": {"size": 14}},
                "grid": {"display": true}
            }
        },
        "animation": {"duration": 1000, "easing": "easeOutQuart"}
    })
}

/// Conventional options for radar charts: radial scale suggested [0, 1].
pub fn radar_options(title: &str) -> Value {
    json!({
        "responsive": true,
        "maintainAspectRatio": true,
        "plugins": {
            "title": {
                "display": true,
                "text": title,
                "color": "#333",
                "font": {"size": 18, "weight": "bold"}
            },
            "legend": {"position": "top"}
        },
        "scales": {
            "r": {
                "angleLines": {"display": true},
                "suggestedMin": 0.0,
                "suggestedMax": 1.0,
                "pointLabels": {"color": "#666", "font": {"size": 12}}
            }
        },
        "animation": {"duration": 1000, "easing": "easeOutQuart"}
    })
}
