use std::sync::Arc;

use qascore_core::metrics_api::Metric;

mod token_f1;

pub use token_f1::TokenF1Metric;

pub fn default_metrics() -> Vec<Arc<dyn Metric>> {
    vec![Arc::new(TokenF1Metric::default())]
}
