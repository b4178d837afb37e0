//! Evaluation report data model.
//!
//! One report file describes one (model, dataset) pair. Files are parsed into
//! the lenient [`RawReport`] mirror first, then validated into the strict
//! [`EvaluationReport`], so a missing required field is a typed branch rather
//! than a runtime key lookup.

use serde::de::{self, Deserializer, SeqAccess, Visitor};
use serde::Deserialize;
use std::fmt;

use crate::error::{Error, Result};

/// Separator used when a multi-element category name is flattened to a label.
pub const CATEGORY_SEPARATOR: &str = "/";

/// One model's evaluation outcome on one dataset. Immutable once loaded.
#[derive(Debug, Clone, PartialEq)]
pub struct EvaluationReport {
    /// Model identifier (report field, or the model directory as fallback).
    pub model_name: String,
    /// Dataset identifier; always the file's own field, never the path.
    pub dataset_name: String,
    /// Display name for the dataset; defaults to `dataset_name`.
    pub dataset_pretty_name: String,
    /// Overall score. Expected in [0.0, 1.0] but not enforced.
    pub score: f64,
    /// Named metric scores in file order.
    pub metrics: Vec<Metric>,
}

impl EvaluationReport {
    /// Whether any metric carries subset-level scores.
    pub fn has_subsets(&self) -> bool {
        self.metrics
            .iter()
            .flat_map(|m| &m.categories)
            .any(|c| !c.subsets.is_empty())
    }
}

/// A named metric with an aggregate score and optional category breakdown.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Metric {
    /// Metric name.
    pub name: String,
    /// Aggregate metric score.
    pub score: f64,
    /// Category breakdown, possibly empty.
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// A grouping of subset scores within a metric.
///
/// The `name` field arrives in report JSON as either a plain string or a list
/// of labels; a single-element list means the default grouping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    /// Category labels.
    #[serde(deserialize_with = "string_or_seq", default)]
    pub name: Vec<String>,
    /// Per-subset scores in file order.
    #[serde(default)]
    pub subsets: Vec<Subset>,
}

impl Category {
    /// Flat label for this category.
    pub fn label(&self) -> String {
        self.name.join(CATEGORY_SEPARATOR)
    }

    /// Whether this category is the unnamed/default grouping.
    pub fn is_default(&self) -> bool {
        match self.name.as_slice() {
            [] => true,
            [only] => only.is_empty() || only == "default",
            _ => false,
        }
    }
}

/// A single sub-score within a category.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Subset {
    /// Subset name.
    pub name: String,
    /// Subset score.
    pub score: f64,
}

/// Lenient serde mirror of a report file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawReport {
    /// Model identifier, when the file carries one.
    #[serde(default)]
    pub model_name: Option<String>,
    /// Dataset identifier.
    #[serde(default)]
    pub dataset_name: Option<String>,
    /// Display name for the dataset.
    #[serde(default)]
    pub dataset_pretty_name: Option<String>,
    /// Overall score.
    #[serde(default)]
    pub score: Option<f64>,
    /// Named metric scores.
    #[serde(default)]
    pub metrics: Vec<Metric>,
}

impl RawReport {
    /// Parse a report file body.
    pub fn parse(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(Error::from)
    }

    /// Validate into a strict report.
    ///
    /// `fallback_model` is the model directory the file was found under; it is
    /// used when the file itself names no model.
    pub fn validate(self, fallback_model: Option<&str>) -> Result<EvaluationReport> {
        let model_name = match self.model_name {
            Some(m) if !m.is_empty() => m,
            _ => fallback_model
                .filter(|m| !m.is_empty())
                .map(str::to_string)
                .ok_or_else(|| Error::report("missing required field 'model_name'"))?,
        };
        let dataset_name = self
            .dataset_name
            .filter(|d| !d.is_empty())
            .ok_or_else(|| Error::report("missing required field 'dataset_name'"))?;
        let score = self
            .score
            .ok_or_else(|| Error::report("missing required field 'score'"))?;
        let dataset_pretty_name = self
            .dataset_pretty_name
            .unwrap_or_else(|| dataset_name.clone());

        Ok(EvaluationReport {
            model_name,
            dataset_name,
            dataset_pretty_name,
            score,
            metrics: self.metrics,
        })
    }
}

/// Accept `"name": "topic"` and `"name": ["topic", "subtopic"]` alike.
fn string_or_seq<'de, D>(deserializer: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct StringOrSeq;

    impl<'de> Visitor<'de> for StringOrSeq {
        type Value = Vec<String>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or a list of strings")
        }

        fn visit_str<E>(self, v: &str) -> std::result::Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(vec![v.to_string()])
        }

        fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
        where
            A: SeqAccess<'de>,
        {
            let mut labels = Vec::new();
            while let Some(label) = seq.next_element::<String>()? {
                labels.push(label);
            }
            Ok(labels)
        }
    }

    deserializer.deserialize_any(StringOrSeq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_report() {
        let json = r#"{
            "model_name": "deepseek-reasoner",
            "dataset_name": "math_500",
            "dataset_pretty_name": "MATH-500",
            "score": 0.934,
            "metrics": [
                {
                    "name": "accuracy",
                    "score": 0.934,
                    "categories": [
                        {
                            "name": ["algebra"],
                            "subsets": [{"name": "level_1", "score": 0.98}]
                        }
                    ]
                }
            ]
        }"#;
        let report = RawReport::parse(json).unwrap().validate(None).unwrap();
        assert_eq!(report.model_name, "deepseek-reasoner");
        assert_eq!(report.dataset_name, "math_500");
        assert_eq!(report.dataset_pretty_name, "MATH-500");
        assert!(report.has_subsets());
        assert_eq!(report.metrics[0].categories[0].label(), "algebra");
    }

    #[test]
    fn category_name_accepts_plain_string() {
        let json = r#"{"name": "default", "subsets": []}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.name, vec!["default"]);
        assert!(category.is_default());
    }

    #[test]
    fn multi_element_category_label_joins_with_separator() {
        let json = r#"{"name": ["code", "python"], "subsets": []}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.label(), "code/python");
        assert!(!category.is_default());
    }

    #[test]
    fn missing_score_is_rejected() {
        let json = r#"{"model_name": "m", "dataset_name": "d"}"#;
        let err = RawReport::parse(json).unwrap().validate(None).unwrap_err();
        assert!(err.to_string().contains("score"));
    }

    #[test]
    fn missing_dataset_name_is_rejected() {
        let json = r#"{"model_name": "m", "score": 0.5}"#;
        assert!(RawReport::parse(json).unwrap().validate(None).is_err());
    }

    #[test]
    fn model_name_falls_back_to_directory() {
        let json = r#"{"dataset_name": "d", "score": 0.5}"#;
        let report = RawReport::parse(json)
            .unwrap()
            .validate(Some("gpt-4o"))
            .unwrap();
        assert_eq!(report.model_name, "gpt-4o");
    }

    #[test]
    fn pretty_name_defaults_to_dataset_name() {
        let json = r#"{"model_name": "m", "dataset_name": "ifeval", "score": 0.5}"#;
        let report = RawReport::parse(json).unwrap().validate(None).unwrap();
        assert_eq!(report.dataset_pretty_name, "ifeval");
    }
}
