//! Markdown summary report.
//!
//! A plain score matrix plus per-model breakdowns, rendered from the same
//! aggregated index the chart builders consume. Interactive chart embedding
//! stays with the HTML viewer shell, which this tool does not produce.

use crate::aggregate::ScoreIndex;

fn format_score(score: Option<f64>) -> String {
    match score {
        Some(s) => format!("{:.4}", s),
        None => "n/a".to_string(),
    }
}

/// Render a Markdown summary of the aggregated scores.
pub fn render_summary(index: &ScoreIndex) -> String {
    let mut out = String::new();
    out.push_str("# Evaluation Results\n\n");
    out.push_str(&format!(
        "**Models:** {}  \n**Datasets:** {}\n\n",
        index.models().len(),
        index.datasets().len()
    ));

    if index.is_empty() {
        out.push_str("No evaluation reports were found.\n");
        return out;
    }

    // Score matrix: one row per model, one column per dataset.
    out.push_str("## Scores\n\n");
    out.push_str("| Model |");
    for dataset in index.datasets() {
        out.push_str(&format!(" {} |", index.pretty_name(dataset)));
    }
    out.push('\n');
    out.push_str("|---|");
    for _ in index.datasets() {
        out.push_str("---|");
    }
    out.push('\n');
    for model in index.models() {
        out.push_str(&format!("| {} |", model));
        for dataset in index.datasets() {
            out.push_str(&format!(" {} |", format_score(index.score(model, dataset))));
        }
        out.push('\n');
    }
    out.push('\n');

    // Strongest model per dataset.
    out.push_str("## Best per dataset\n\n");
    for dataset in index.datasets() {
        let best = index
            .models_for_dataset(dataset)
            .into_iter()
            .filter_map(|m| index.score(&m, dataset).map(|s| (m, s)))
            .max_by(|a, b| a.1.total_cmp(&b.1));
        if let Some((model, score)) = best {
            out.push_str(&format!(
                "- {}: **{}** ({:.4})\n",
                index.pretty_name(dataset),
                model,
                score
            ));
        }
    }
    out.push('\n');

    // Per-model metric breakdowns, where reports carried metrics.
    for model in index.models() {
        let mut section = String::new();
        for dataset in index.datasets_for_model(model) {
            let metrics = index.metric_scores(model, &dataset);
            if metrics.is_empty() {
                continue;
            }
            section.push_str(&format!("### {}\n\n", index.pretty_name(&dataset)));
            section.push_str("| Metric | Score |\n|---|---|\n");
            for (name, score) in metrics {
                section.push_str(&format!("| {} | {:.4} |\n", name, score));
            }
            section.push('\n');
        }
        if !section.is_empty() {
            out.push_str(&format!("## {}\n\n", model));
            out.push_str(&section);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::RawReport;

    fn report(json: &str) -> crate::report::EvaluationReport {
        RawReport::parse(json).unwrap().validate(None).unwrap()
    }

    #[test]
    fn matrix_marks_missing_pairs() {
        let reports = vec![
            report(r#"{"model_name": "m1", "dataset_name": "d1", "score": 0.9}"#),
            report(r#"{"model_name": "m2", "dataset_name": "d2", "score": 0.4}"#),
        ];
        let index = ScoreIndex::from_reports(&reports);
        let md = render_summary(&index);
        assert!(md.contains("| m1 | 0.9000 | n/a |"));
        assert!(md.contains("| m2 | n/a | 0.4000 |"));
    }

    #[test]
    fn best_model_is_named_per_dataset() {
        let reports = vec![
            report(r#"{"model_name": "m1", "dataset_name": "d1", "score": 0.7}"#),
            report(r#"{"model_name": "m2", "dataset_name": "d1", "score": 0.9}"#),
        ];
        let index = ScoreIndex::from_reports(&reports);
        let md = render_summary(&index);
        assert!(md.contains("- d1: **m2** (0.9000)"));
    }

    #[test]
    fn metric_sections_only_for_models_with_metrics() {
        let reports = vec![report(
            r#"{
                "model_name": "m1", "dataset_name": "d1", "score": 0.7,
                "metrics": [{"name": "strict", "score": 0.71}]
            }"#,
        )];
        let index = ScoreIndex::from_reports(&reports);
        let md = render_summary(&index);
        assert!(md.contains("## m1"));
        assert!(md.contains("| strict | 0.7100 |"));
    }

    #[test]
    fn empty_index_renders_placeholder() {
        let index = ScoreIndex::from_reports(&[]);
        let md = render_summary(&index);
        assert!(md.contains("No evaluation reports"));
    }
}
