//! Token-level F1 scoring for free-text question answering.
//!
//! [`normalize`] canonicalizes answers, [`f1`] scores pairs and datasets. The rest
//! is the glue an evaluation driver needs: dataset loading, config, the
//! [`metrics_api::Metric`] seam and run reports.

pub mod config;
pub mod dataset;
pub mod errors;
pub mod f1;
pub mod metrics_api;
pub mod normalize;
pub mod report;

pub use errors::ScoreError;
pub use f1::{aggregate_score, pair_score, pair_stats, score_dataset};
pub use normalize::{normalize, tokenize};
