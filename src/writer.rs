//! Chart file output and the run manifest.
//!
//! Chart writes are independent: a single failed write becomes a warning and
//! drops that chart from the manifest, never aborting the rest of the run.
//! Only an output directory that cannot be created at all is fatal.

use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::chart::{ChartConfig, ChartKind};
use crate::error::{Error, Result};

/// Manifest file written alongside the charts.
pub const MANIFEST_FILE: &str = "index.json";

/// Replace every character outside `[A-Za-z0-9_.-]` with `_`.
pub fn sanitize_identifier(id: &str) -> String {
    id.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// One chart ready to be written, together with its identifying keys.
#[derive(Debug)]
pub struct ChartJob {
    /// The document to serialize.
    pub config: ChartConfig,
    /// Which product this is.
    pub kind: ChartKind,
    /// Model key, when the chart is keyed by model.
    pub model: Option<String>,
    /// Dataset key, when the chart is keyed by dataset.
    pub dataset: Option<String>,
}

impl ChartJob {
    /// Output file name from the fixed per-chart-type template.
    pub fn file_name(&self) -> String {
        let slug = self.kind.slug();
        match (&self.model, &self.dataset) {
            (Some(m), Some(d)) => format!(
                "{}_{}_{}.json",
                slug,
                sanitize_identifier(m),
                sanitize_identifier(d)
            ),
            (Some(m), None) => format!("{}_{}.json", slug, sanitize_identifier(m)),
            (None, Some(d)) => format!("{}_{}.json", slug, sanitize_identifier(d)),
            (None, None) => format!("{}.json", slug),
        }
    }
}

/// One generated file as recorded in the manifest.
#[derive(Debug, Clone, Serialize)]
pub struct ManifestEntry {
    /// File name relative to the output directory.
    pub file: String,
    /// Chart product slug.
    pub chart_type: &'static str,
    /// Model key, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    /// Dataset key, when applicable.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dataset: Option<String>,
}

/// Index of everything a run generated, for downstream consumers.
#[derive(Debug, Serialize)]
pub struct Manifest {
    /// Number of chart files written.
    pub charts_generated: usize,
    /// All models seen, first-seen order.
    pub models: Vec<String>,
    /// All datasets seen, first-seen order.
    pub datasets: Vec<String>,
    /// One entry per written chart.
    pub charts: Vec<ManifestEntry>,
}

/// Result of writing a batch of charts.
#[derive(Debug, Default)]
pub struct WriteOutcome {
    /// Entries for every successfully written chart.
    pub written: Vec<ManifestEntry>,
    /// One warning per failed write.
    pub warnings: Vec<String>,
}

/// Write every chart into `out_dir`.
///
/// The directory is created if needed; failure to create it is fatal.
pub fn write_charts(out_dir: &Path, jobs: Vec<ChartJob>, pretty: bool) -> Result<WriteOutcome> {
    fs::create_dir_all(out_dir).map_err(|e| {
        Error::output(format!(
            "cannot create output directory {}: {}",
            out_dir.display(),
            e
        ))
    })?;

    let mut outcome = WriteOutcome::default();
    for job in jobs {
        let file_name = job.file_name();
        let path = out_dir.join(&file_name);
        let result = job
            .config
            .to_json(pretty)
            .and_then(|body| fs::write(&path, body).map_err(Error::from));
        match result {
            Ok(()) => outcome.written.push(ManifestEntry {
                file: file_name,
                chart_type: job.kind.slug(),
                model: job.model,
                dataset: job.dataset,
            }),
            Err(e) => outcome.warnings.push(format!("{}: {}", file_name, e)),
        }
    }
    Ok(outcome)
}

/// Write the manifest next to the charts.
pub fn write_manifest(out_dir: &Path, manifest: &Manifest, pretty: bool) -> Result<()> {
    let body = if pretty {
        serde_json::to_string_pretty(manifest)
    } else {
        serde_json::to_string(manifest)
    }
    .map_err(|e| Error::output(format!("manifest serialization failed: {}", e)))?;
    fs::write(out_dir.join(MANIFEST_FILE), body).map_err(Error::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{bar_options, ChartData};

    fn job(kind: ChartKind, model: Option<&str>, dataset: Option<&str>) -> ChartJob {
        ChartJob {
            config: ChartConfig {
                chart_type: kind.chart_type(),
                data: ChartData {
                    labels: vec![],
                    datasets: vec![],
                },
                options: bar_options("t"),
            },
            kind,
            model: model.map(str::to_string),
            dataset: dataset.map(str::to_string),
        }
    }

    #[test]
    fn sanitize_replaces_unsafe_characters() {
        assert_eq!(sanitize_identifier("gpt-4o_mini.v2"), "gpt-4o_mini.v2");
        assert_eq!(sanitize_identifier("swe bench/verified"), "swe_bench_verified");
        assert_eq!(sanitize_identifier("模型"), "__");
    }

    #[test]
    fn file_names_follow_per_type_templates() {
        assert_eq!(
            job(ChartKind::ModelComparison, None, Some("math 500")).file_name(),
            "model_comparison_math_500.json"
        );
        assert_eq!(
            job(ChartKind::DatasetComparison, Some("m/1"), None).file_name(),
            "dataset_comparison_m_1.json"
        );
        assert_eq!(
            job(ChartKind::CategoryRadar, Some("m"), Some("d")).file_name(),
            "category_radar_m_d.json"
        );
        assert_eq!(job(ChartKind::Overview, None, None).file_name(), "overview.json");
    }

    #[test]
    fn failed_write_is_a_warning_not_an_abort() {
        let dir = tempfile::tempdir().unwrap();
        // Occupy the first chart's target path with a directory so its write
        // fails while the second chart still goes through.
        std::fs::create_dir_all(dir.path().join("model_comparison_blocked.json")).unwrap();

        let jobs = vec![
            job(ChartKind::ModelComparison, None, Some("blocked")),
            job(ChartKind::ModelComparison, None, Some("fine")),
        ];
        let outcome = write_charts(dir.path(), jobs, false).unwrap();

        assert_eq!(outcome.written.len(), 1);
        assert_eq!(outcome.written[0].file, "model_comparison_fine.json");
        assert_eq!(outcome.warnings.len(), 1);
        assert!(outcome.warnings[0].contains("model_comparison_blocked.json"));
    }

    #[test]
    fn manifest_lists_written_charts() {
        let dir = tempfile::tempdir().unwrap();
        let outcome = write_charts(
            dir.path(),
            vec![job(ChartKind::Overview, None, None)],
            false,
        )
        .unwrap();
        let manifest = Manifest {
            charts_generated: outcome.written.len(),
            models: vec!["m1".into()],
            datasets: vec!["d1".into()],
            charts: outcome.written,
        };
        write_manifest(dir.path(), &manifest, true).unwrap();

        let body = std::fs::read_to_string(dir.path().join(MANIFEST_FILE)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(value["charts_generated"], 1);
        assert_eq!(value["charts"][0]["file"], "overview.json");
        assert_eq!(value["charts"][0]["chart_type"], "overview");
    }
}
