//! In-memory score index built from loaded reports.
//!
//! Rebuilt from scratch every run; exposed read-only to the chart builders.
//! Label ordering is first-seen insertion order, which is stable because the
//! loader enumerates files lexicographically.

use std::collections::HashMap;

use crate::report::EvaluationReport;

/// Per-category subset scores for one (model, dataset) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryScores {
    /// Flattened category label.
    pub label: String,
    /// Whether this is the unnamed/default grouping.
    pub is_default: bool,
    /// Subset scores in file order.
    pub subsets: Vec<(String, f64)>,
}

/// Aggregated index over all loaded reports.
///
/// Duplicate (model, dataset) pairs are resolved last-loaded-wins; the order
/// vectors record each key once, at first sight.
#[derive(Debug, Default)]
pub struct ScoreIndex {
    models: Vec<String>,
    datasets: Vec<String>,
    pretty: HashMap<String, String>,
    overall: HashMap<(String, String), f64>,
    metrics: HashMap<(String, String), Vec<(String, f64)>>,
    categories: HashMap<(String, String), Vec<CategoryScores>>,
}

impl ScoreIndex {
    /// Build the index from reports in load order.
    pub fn from_reports(reports: &[EvaluationReport]) -> Self {
        let mut index = Self::default();
        for report in reports {
            index.insert(report);
        }
        index
    }

    fn insert(&mut self, report: &EvaluationReport) {
        if !self.models.contains(&report.model_name) {
            self.models.push(report.model_name.clone());
        }
        if !self.datasets.contains(&report.dataset_name) {
            self.datasets.push(report.dataset_name.clone());
        }
        self.pretty.insert(
            report.dataset_name.clone(),
            report.dataset_pretty_name.clone(),
        );

        let key = (report.model_name.clone(), report.dataset_name.clone());
        self.overall.insert(key.clone(), report.score);
        self.metrics.insert(
            key.clone(),
            report
                .metrics
                .iter()
                .map(|m| (m.name.clone(), m.score))
                .collect(),
        );
        self.categories.insert(
            key,
            report
                .metrics
                .iter()
                .flat_map(|m| &m.categories)
                .map(|c| CategoryScores {
                    label: c.label(),
                    is_default: c.is_default(),
                    subsets: c.subsets.iter().map(|s| (s.name.clone(), s.score)).collect(),
                })
                .collect(),
        );
    }

    /// All models, first-seen order.
    pub fn models(&self) -> &[String] {
        &self.models
    }

    /// All datasets, first-seen order.
    pub fn datasets(&self) -> &[String] {
        &self.datasets
    }

    /// Display name for a dataset.
    pub fn pretty_name<'a>(&'a self, dataset: &'a str) -> &'a str {
        self.pretty.get(dataset).map(String::as_str).unwrap_or(dataset)
    }

    /// Overall score for a (model, dataset) pair, if evaluated.
    pub fn score(&self, model: &str, dataset: &str) -> Option<f64> {
        self.overall
            .get(&(model.to_string(), dataset.to_string()))
            .copied()
    }

    /// Models that have a score for `dataset`, first-seen order.
    pub fn models_for_dataset(&self, dataset: &str) -> Vec<String> {
        self.models
            .iter()
            .filter(|m| self.score(m, dataset).is_some())
            .cloned()
            .collect()
    }

    /// Datasets that have a score for `model`, first-seen order.
    pub fn datasets_for_model(&self, model: &str) -> Vec<String> {
        self.datasets
            .iter()
            .filter(|d| self.score(model, d).is_some())
            .cloned()
            .collect()
    }

    /// Metric scores for a (model, dataset) pair in file order.
    pub fn metric_scores(&self, model: &str, dataset: &str) -> &[(String, f64)] {
        self.metrics
            .get(&(model.to_string(), dataset.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Category/subset scores for a (model, dataset) pair.
    pub fn category_scores(&self, model: &str, dataset: &str) -> &[CategoryScores] {
        self.categories
            .get(&(model.to_string(), dataset.to_string()))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True when no report was indexed.
    pub fn is_empty(&self) -> bool {
        self.overall.is_empty()
    }
}
