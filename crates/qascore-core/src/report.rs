//! Run report: JSON artifact and console summary.

use std::fmt::Write as _;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::f1::ItemScore;
use crate::metrics_api::MetricResult;

pub const REPORT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunReport {
    pub schema_version: u32,
    pub metric: String,
    pub score: f64,
    pub count: usize,
    pub min_score: Option<f64>,
    pub passed: bool,
    pub items: Vec<ItemScore>,
}

impl RunReport {
    pub fn new(
        metric: &str,
        result: &MetricResult,
        min_score: Option<f64>,
        items: Vec<ItemScore>,
    ) -> Self {
        Self {
            schema_version: REPORT_SCHEMA_VERSION,
            metric: metric.to_string(),
            score: result.score,
            count: items.len(),
            min_score,
            passed: result.passed,
            items,
        }
    }

    pub fn write_json(&self, path: &Path) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        tracing::info!(path = %path.display(), "wrote report");
        Ok(())
    }

    /// Human readable summary; per-item lines only when `verbose`.
    pub fn render_text(&self, verbose: bool) -> String {
        let mut out = String::new();
        if verbose {
            for item in &self.items {
                let _ = writeln!(
                    out,
                    "  #{:<4} f1={:.4} p={:.4} r={:.4} ({}/{} gold, {} predicted)",
                    item.index,
                    item.stats.f1,
                    item.stats.precision,
                    item.stats.recall,
                    item.stats.num_same,
                    item.stats.gold_tokens,
                    item.stats.predicted_tokens,
                );
            }
        }
        let _ = write!(
            out,
            "{}: {:.4} over {} pairs",
            self.metric, self.score, self.count
        );
        if let Some(min) = self.min_score {
            let verdict = if self.passed { "PASS" } else { "FAIL" };
            let _ = write!(out, " (min_score {:.4}) {}", min, verdict);
        }
        out.push('\n');
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::f1::score_dataset;

    fn report(gold: &[&str], predicted: &[&str], min_score: Option<f64>) -> RunReport {
        let scores = score_dataset(gold, predicted).unwrap();
        let result = match min_score {
            Some(min) if scores.score < min => MetricResult::fail(scores.score, "below"),
            _ => MetricResult::pass(scores.score),
        };
        RunReport::new("token_f1", &result, min_score, scores.items)
    }

    #[test]
    fn text_summary() {
        let failing = report(&["cat", "dog"], &["cat", "bird"], Some(0.75));
        assert_eq!(
            failing.render_text(false),
            "token_f1: 0.5000 over 2 pairs (min_score 0.7500) FAIL\n"
        );
        let verbose = failing.render_text(true);
        assert_eq!(verbose.lines().count(), 3);
        assert!(verbose.starts_with("  #0    f1=1.0000"));

        let passing = report(&["cat"], &["cat"], None);
        assert_eq!(passing.render_text(false), "token_f1: 1.0000 over 1 pairs\n");
    }

    #[test]
    fn json_shape() {
        let v = serde_json::to_value(report(&["a cat"], &["cat"], None)).unwrap();
        assert_eq!(v["schema_version"], 1);
        assert_eq!(v["metric"], "token_f1");
        assert_eq!(v["count"], 1);
        assert_eq!(v["passed"], true);
        assert!(v["min_score"].is_null());
        assert_eq!(v["items"][0]["index"], 0);
        assert_eq!(v["items"][0]["f1"], 1.0);
        assert_eq!(v["items"][0]["num_same"], 1);
    }

    #[test]
    fn writes_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        report(&["cat", "dog"], &["cat", "bird"], Some(0.5))
            .write_json(&path)
            .unwrap();
        let back: RunReport =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(back.score, 0.5);
        assert_eq!(back.items.len(), 2);
        assert!(back.passed);
    }
}
