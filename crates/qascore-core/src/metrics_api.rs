use async_trait::async_trait;

#[derive(Debug, Clone, PartialEq)]
pub struct MetricResult {
    pub score: f64,
    pub passed: bool,
    pub details: serde_json::Value,
}

impl MetricResult {
    pub fn pass(score: f64) -> Self {
        Self {
            score,
            passed: true,
            details: serde_json::json!({}),
        }
    }
    pub fn fail(score: f64, msg: &str) -> Self {
        Self {
            score,
            passed: false,
            details: serde_json::json!({"message": msg}),
        }
    }
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = details;
        self
    }
}

/// Dataset-level objective, as consumed by an evaluation or prompt-search driver.
#[async_trait]
pub trait Metric: Send + Sync {
    fn name(&self) -> &'static str;
    async fn evaluate(&self, gold: &[String], predicted: &[String])
        -> anyhow::Result<MetricResult>;
}
