//! Chart builders.
//!
//! The bar products share one skeleton: select labels, align values
//! positionally, assign per-bar colors, wrap in the document template. The
//! radar has its own shape. Builders never fail: an unknown selection key
//! yields a structurally valid chart with an empty series list.

use std::collections::{HashMap, HashSet};

use crate::aggregate::ScoreIndex;
use crate::chart::{
    bar_options, radar_options, ChartConfig, ChartData, ChartKind, ColorSpec, Series,
};
use crate::color::{self, BandHues};

/// Shared bar skeleton: one threshold-colored series, positionally aligned
/// with the labels.
fn bar_chart(
    kind: ChartKind,
    title: &str,
    series_label: &str,
    labels: Vec<String>,
    values: Vec<Option<f64>>,
    hues: BandHues,
) -> ChartConfig {
    debug_assert_eq!(labels.len(), values.len());
    let datasets = if labels.is_empty() {
        Vec::new()
    } else {
        let (fills, borders): (Vec<String>, Vec<String>) = values
            .iter()
            .map(|v| (hues.fill(*v), hues.border(*v)))
            .unzip();
        vec![Series::bar(
            series_label,
            values,
            ColorSpec::PerPoint(fills),
            ColorSpec::PerPoint(borders),
        )]
    };
    ChartConfig {
        chart_type: kind.chart_type(),
        data: ChartData { labels, datasets },
        options: bar_options(title),
    }
}

/// Bar chart comparing every evaluated model on one dataset.
///
/// Labels are the models that have a score for the dataset, in first-seen
/// order; bars are threshold-colored.
pub fn model_comparison(index: &ScoreIndex, dataset: &str) -> ChartConfig {
    let models = index.models_for_dataset(dataset);
    let values = models.iter().map(|m| index.score(m, dataset)).collect();
    bar_chart(
        ChartKind::ModelComparison,
        &format!("Model Comparison on {}", index.pretty_name(dataset)),
        "Overall Score",
        models,
        values,
        BandHues::MODEL_COMPARISON,
    )
}

/// Bar chart of one model's scores across every dataset seen in the input.
///
/// Labels span all datasets; combinations the model was never evaluated on
/// appear as explicit `null`s colored neutral gray.
pub fn dataset_comparison(index: &ScoreIndex, model: &str) -> ChartConfig {
    let known = index.models().iter().any(|m| m == model);
    let (labels, values) = if known {
        let labels = index
            .datasets()
            .iter()
            .map(|d| index.pretty_name(d).to_string())
            .collect();
        let values = index
            .datasets()
            .iter()
            .map(|d| index.score(model, d))
            .collect();
        (labels, values)
    } else {
        (Vec::new(), Vec::new())
    };
    bar_chart(
        ChartKind::DatasetComparison,
        &format!("{} Performance Across Datasets", model),
        "Overall Score",
        labels,
        values,
        BandHues::DATASET_COMPARISON,
    )
}

/// Bar chart of per-metric scores for one (model, dataset) pair, in file
/// order, threshold-colored.
pub fn metric_comparison(index: &ScoreIndex, model: &str, dataset: &str) -> ChartConfig {
    let metrics = index.metric_scores(model, dataset);
    let labels = metrics.iter().map(|(name, _)| name.clone()).collect();
    let values = metrics.iter().map(|(_, score)| Some(*score)).collect();
    bar_chart(
        ChartKind::MetricComparison,
        &format!(
            "{} on {} - Metric Comparison",
            model,
            index.pretty_name(dataset)
        ),
        "Metric Scores",
        labels,
        values,
        BandHues::METRIC_COMPARISON,
    )
}

/// Radar chart of subset scores for one (model, dataset) pair.
///
/// Each subset is its own vertex; the union of vertices keeps first-seen
/// order across metrics. Vertex labels are qualified as `category:subset`
/// when more than one non-default category is present or a subset name
/// repeats across categories.
pub fn category_radar(index: &ScoreIndex, model: &str, dataset: &str) -> ChartConfig {
    let categories = index.category_scores(model, dataset);

    let non_default = categories.iter().filter(|c| !c.is_default).count();
    let mut name_counts: HashMap<&str, usize> = HashMap::new();
    for category in categories {
        for (name, _) in &category.subsets {
            *name_counts.entry(name.as_str()).or_insert(0) += 1;
        }
    }
    let qualify = non_default > 1 || name_counts.values().any(|&n| n > 1);

    let mut labels = Vec::new();
    let mut values = Vec::new();
    let mut seen = HashSet::new();
    for category in categories {
        for (name, score) in &category.subsets {
            let label = if qualify && !category.is_default {
                format!("{}:{}", category.label, name)
            } else {
                name.clone()
            };
            if seen.insert(label.clone()) {
                labels.push(label);
                values.push(Some(*score));
            }
        }
    }

    let datasets = if labels.is_empty() {
        Vec::new()
    } else {
        let border = color::series_border(0);
        vec![Series {
            label: model.to_string(),
            data: values,
            background_color: ColorSpec::Single(color::series_fill(0)),
            border_color: ColorSpec::Single(border.clone()),
            border_width: 2,
            fill: Some(true),
            point_background_color: Some(border),
            point_border_color: Some("#fff".to_string()),
            hover_background_color: None,
            hover_border_color: None,
        }]
    };

    ChartConfig {
        chart_type: ChartKind::CategoryRadar.chart_type(),
        data: ChartData { labels, datasets },
        options: radar_options(&format!(
            "{} on {} - Category Breakdown",
            model,
            index.pretty_name(dataset)
        )),
    }
}

/// Merged bar chart: one series per model across every dataset.
///
/// Series colors cycle through the palette by model index; missing
/// (model, dataset) combinations are explicit `null`s.
pub fn overview(index: &ScoreIndex) -> ChartConfig {
    let labels = index
        .datasets()
        .iter()
        .map(|d| index.pretty_name(d).to_string())
        .collect();
    let datasets = index
        .models()
        .iter()
        .enumerate()
        .map(|(i, model)| {
            let data = index
                .datasets()
                .iter()
                .map(|d| index.score(model, d))
                .collect();
            let border = color::series_border(i);
            Series {
                label: model.clone(),
                data,
                background_color: ColorSpec::Single(color::series_fill(i)),
                border_color: ColorSpec::Single(border.clone()),
                border_width: 2,
                fill: None,
                point_background_color: None,
                point_border_color: None,
                hover_background_color: Some(border.clone()),
                hover_border_color: Some(border),
            }
        })
        .collect();
    ChartConfig {
        chart_type: ChartKind::Overview.chart_type(),
        data: ChartData { labels, datasets },
        options: bar_options("Model Performance Across Datasets"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::PALETTE;
    use crate::report::RawReport;

    fn index_of(reports: &[(&str, &str, f64)]) -> ScoreIndex {
        let reports: Vec<_> = reports
            .iter()
            .map(|(m, d, s)| {
                RawReport::parse(&format!(
                    r#"{{"model_name": "{m}", "dataset_name": "{d}", "score": {s}}}"#
                ))
                .unwrap()
                .validate(None)
                .unwrap()
            })
            .collect();
        ScoreIndex::from_reports(&reports)
    }

    #[test]
    fn model_comparison_end_to_end_example() {
        let index = index_of(&[("modelA", "datasetX", 0.90), ("modelB", "datasetX", 0.55)]);
        let chart = model_comparison(&index, "datasetX");

        assert_eq!(chart.chart_type, "bar");
        assert_eq!(chart.data.labels, ["modelA", "modelB"]);
        assert_eq!(chart.data.datasets.len(), 1);
        assert_eq!(chart.data.datasets[0].data, [Some(0.90), Some(0.55)]);
        // modelB sits in the poor band, modelA in the good band.
        match &chart.data.datasets[0].border_color {
            ColorSpec::PerPoint(colors) => {
                assert_eq!(colors[0], "#4BC0C0FF");
                assert_eq!(colors[1], "#FF6384FF");
            }
            other => panic!("expected per-bar colors, got {:?}", other),
        }
    }

    #[test]
    fn unknown_dataset_yields_empty_but_valid_chart() {
        let index = index_of(&[("m1", "d1", 0.7)]);
        let chart = model_comparison(&index, "no_such_dataset");
        assert_eq!(chart.chart_type, "bar");
        assert!(chart.data.labels.is_empty());
        assert!(chart.data.datasets.is_empty());
        assert!(chart.to_json(false).is_ok());
    }

    #[test]
    fn dataset_comparison_aligns_nulls_with_labels() {
        let index = index_of(&[("m1", "d1", 0.85), ("m2", "d2", 0.4)]);
        let chart = dataset_comparison(&index, "m1");
        assert_eq!(chart.data.labels.len(), 2);
        assert_eq!(chart.data.datasets[0].data, [Some(0.85), None]);
        match &chart.data.datasets[0].border_color {
            ColorSpec::PerPoint(colors) => assert_eq!(colors[1], "#C9CBCFFF"),
            other => panic!("expected per-bar colors, got {:?}", other),
        }
    }

    #[test]
    fn dataset_comparison_for_unknown_model_is_empty() {
        let index = index_of(&[("m1", "d1", 0.85)]);
        let chart = dataset_comparison(&index, "ghost");
        assert!(chart.data.labels.is_empty());
        assert!(chart.data.datasets.is_empty());
    }

    #[test]
    fn overview_emits_one_series_per_model_with_palette_cycling() {
        let mut reports = Vec::new();
        for i in 0..PALETTE.len() + 1 {
            reports.push((format!("m{:02}", i), "d1".to_string(), 0.5));
        }
        let owned: Vec<(&str, &str, f64)> = reports
            .iter()
            .map(|(m, d, s)| (m.as_str(), d.as_str(), *s))
            .collect();
        let index = index_of(&owned);

        let chart = overview(&index);
        assert_eq!(chart.data.datasets.len(), PALETTE.len() + 1);
        assert_eq!(
            chart.data.datasets[0].border_color,
            chart.data.datasets[PALETTE.len()].border_color
        );
        assert_ne!(
            chart.data.datasets[0].border_color,
            chart.data.datasets[1].border_color
        );
    }

    #[test]
    fn metric_comparison_keeps_file_order() {
        let json = r#"{
            "model_name": "m", "dataset_name": "d", "score": 0.7,
            "metrics": [
                {"name": "zulu", "score": 0.9},
                {"name": "alpha", "score": 0.3}
            ]
        }"#;
        let report = RawReport::parse(json).unwrap().validate(None).unwrap();
        let index = ScoreIndex::from_reports(std::slice::from_ref(&report));

        let chart = metric_comparison(&index, "m", "d");
        assert_eq!(chart.data.labels, ["zulu", "alpha"]);
        match &chart.data.datasets[0].border_color {
            ColorSpec::PerPoint(colors) => {
                assert_eq!(colors[0], "#4BC0C0FF");
                assert_eq!(colors[1], "#9966FFFF");
            }
            other => panic!("expected per-bar colors, got {:?}", other),
        }
    }

    #[test]
    fn radar_uses_bare_subset_names_for_single_default_category() {
        let json = r#"{
            "model_name": "m", "dataset_name": "d", "score": 0.7,
            "metrics": [{"name": "acc", "score": 0.7, "categories": [
                {"name": ["default"], "subsets": [
                    {"name": "en", "score": 0.8},
                    {"name": "zh", "score": 0.6}
                ]}
            ]}]
        }"#;
        let report = RawReport::parse(json).unwrap().validate(None).unwrap();
        let index = ScoreIndex::from_reports(std::slice::from_ref(&report));

        let chart = category_radar(&index, "m", "d");
        assert_eq!(chart.chart_type, "radar");
        assert_eq!(chart.data.labels, ["en", "zh"]);
        assert_eq!(chart.data.datasets[0].fill, Some(true));
    }

    #[test]
    fn radar_qualifies_labels_when_subset_names_repeat() {
        let json = r#"{
            "model_name": "m", "dataset_name": "d", "score": 0.7,
            "metrics": [{"name": "acc", "score": 0.7, "categories": [
                {"name": ["math"], "subsets": [{"name": "easy", "score": 0.9}]},
                {"name": ["code"], "subsets": [{"name": "easy", "score": 0.5}]}
            ]}]
        }"#;
        let report = RawReport::parse(json).unwrap().validate(None).unwrap();
        let index = ScoreIndex::from_reports(std::slice::from_ref(&report));

        let chart = category_radar(&index, "m", "d");
        assert_eq!(chart.data.labels, ["math:easy", "code:easy"]);
        assert_eq!(chart.data.datasets[0].data, [Some(0.9), Some(0.5)]);
    }

    #[test]
    fn radar_without_subsets_is_empty_but_valid() {
        let index = index_of(&[("m", "d", 0.7)]);
        let chart = category_radar(&index, "m", "d");
        assert_eq!(chart.chart_type, "radar");
        assert!(chart.data.labels.is_empty());
        assert!(chart.data.datasets.is_empty());
    }
}
