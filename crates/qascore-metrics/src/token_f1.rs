use async_trait::async_trait;
use qascore_core::f1::{score_dataset, ScoreReport};
use qascore_core::metrics_api::{Metric, MetricResult};

/// Mean token-level F1 over a dataset, optionally gated by `min_score`.
#[derive(Debug, Clone, Default)]
pub struct TokenF1Metric {
    pub min_score: Option<f64>,
}

impl TokenF1Metric {
    pub fn with_min_score(min_score: f64) -> Self {
        Self {
            min_score: Some(min_score),
        }
    }

    /// Verdict for an already scored dataset.
    pub fn judge(&self, scores: &ScoreReport) -> MetricResult {
        let score = scores.score;
        let mut details = serde_json::json!({
            "count": scores.count,
            "min_score": self.min_score,
        });

        match self.min_score {
            Some(min) if score < min => {
                tracing::info!(score, min_score = min, "token_f1 below threshold");
                let msg = format!("token_f1 {:.4} below min_score {:.4}", score, min);
                details["message"] = serde_json::json!(msg);
                MetricResult::fail(score, &msg).with_details(details)
            }
            _ => MetricResult::pass(score).with_details(details),
        }
    }
}

#[async_trait]
impl Metric for TokenF1Metric {
    fn name(&self) -> &'static str {
        "token_f1"
    }

    async fn evaluate(
        &self,
        gold: &[String],
        predicted: &[String],
    ) -> anyhow::Result<MetricResult> {
        let scores = score_dataset(gold, predicted)?;
        Ok(self.judge(&scores))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judge_uses_the_given_scores() {
        let scores = score_dataset(&["cat", "dog"], &["cat", "bird"]).unwrap();

        let res = TokenF1Metric::default().judge(&scores);
        assert!(res.passed);
        assert_eq!(res.score, scores.score);
        assert_eq!(res.details["count"], 2);

        let res = TokenF1Metric::with_min_score(0.6).judge(&scores);
        assert!(!res.passed);
        assert_eq!(res.details["count"], 2);
        assert_eq!(res.details["min_score"], 0.6);
        assert_eq!(
            res.details["message"],
            "token_f1 0.5000 below min_score 0.6000"
        );
    }
}
