use std::path::PathBuf;

use thiserror::Error;

/// Errors from dataset-level scoring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// Gold and predicted sequences are not aligned.
    #[error("input mismatch: {gold} gold answers but {predicted} predicted answers")]
    InputMismatch { gold: usize, predicted: usize },

    /// Nothing to average over.
    #[error("empty dataset: at least one gold/predicted pair is required")]
    EmptyDataset,
}

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("dataset file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read dataset {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {} at line {line}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("{} line {line}: missing field '{field}'", .path.display())]
    MissingField {
        path: PathBuf,
        line: usize,
        field: &'static str,
    },
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("failed to read config {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}
