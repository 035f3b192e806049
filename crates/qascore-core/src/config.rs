use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::dataset::DatasetSource;
use crate::errors::ConfigError;

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;

/// On-disk evaluation config (`qascore.yaml`). JSON files parse as well.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EvalConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    /// JSONL file of gold/predicted records.
    #[serde(default)]
    pub dataset: Option<PathBuf>,
    /// Gold answers column, paired with `predicted`.
    #[serde(default)]
    pub gold: Option<PathBuf>,
    #[serde(default)]
    pub predicted: Option<PathBuf>,
    #[serde(default)]
    pub min_score: Option<f64>,
    /// Where to write the JSON report.
    #[serde(default)]
    pub output: Option<PathBuf>,
}

fn default_version() -> u32 {
    SUPPORTED_CONFIG_VERSION
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            version: SUPPORTED_CONFIG_VERSION,
            dataset: None,
            gold: None,
            predicted: None,
            min_score: None,
            output: None,
        }
    }
}

impl EvalConfig {
    /// Checks the settings and returns the dataset source they resolve to.
    pub fn validate(&self) -> Result<DatasetSource, ConfigError> {
        if self.version != SUPPORTED_CONFIG_VERSION {
            return Err(ConfigError::Invalid(format!(
                "unsupported config version {} (supported: {})",
                self.version, SUPPORTED_CONFIG_VERSION
            )));
        }
        if let Some(min) = self.min_score {
            if !(0.0..=1.0).contains(&min) {
                return Err(ConfigError::Invalid(format!(
                    "min_score must be within [0, 1], got {}",
                    min
                )));
            }
        }
        self.source()
    }

    /// Resolves the dataset fields into a single source.
    pub fn source(&self) -> Result<DatasetSource, ConfigError> {
        match (&self.dataset, &self.gold, &self.predicted) {
            (Some(path), None, None) => Ok(DatasetSource::Jsonl(path.clone())),
            (None, Some(gold), Some(predicted)) => Ok(DatasetSource::PairFiles {
                gold: gold.clone(),
                predicted: predicted.clone(),
            }),
            (None, None, None) => Err(ConfigError::Invalid(
                "no dataset: set 'dataset' or both 'gold' and 'predicted'".into(),
            )),
            (Some(_), _, _) => Err(ConfigError::Invalid(
                "'dataset' cannot be combined with 'gold'/'predicted'".into(),
            )),
            (None, _, _) => Err(ConfigError::Invalid(
                "'gold' and 'predicted' must be set together".into(),
            )),
        }
    }

    fn resolve_paths(&mut self, base: &Path) {
        for p in [&mut self.dataset, &mut self.gold, &mut self.predicted, &mut self.output]
            .into_iter()
            .flatten()
        {
            if p.is_relative() {
                *p = base.join(&*p);
            }
        }
    }
}

/// Reads and parses a config file without validating it, so callers can layer
/// overrides first. Relative paths inside the file resolve against its directory.
pub fn read_config(path: &Path) -> Result<EvalConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let mut cfg: EvalConfig = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if let Some(dir) = path.parent() {
        cfg.resolve_paths(dir);
    }
    tracing::debug!(config = %path.display(), "read config");
    Ok(cfg)
}

/// Reads, parses and validates a config file.
pub fn load_config(path: &Path) -> Result<EvalConfig, ConfigError> {
    let cfg = read_config(path)?;
    cfg.validate()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn write_config(body: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("qascore.yaml");
        std::fs::write(&path, body).unwrap();
        (dir, path)
    }

    #[test]
    fn loads_yaml_and_resolves_relative_paths() {
        let (dir, path) = write_config("version: 1\ndataset: data.jsonl\nmin_score: 0.6\n");
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.dataset, Some(dir.path().join("data.jsonl")));
        assert_eq!(cfg.min_score, Some(0.6));
        assert_eq!(
            cfg.source().unwrap(),
            DatasetSource::Jsonl(dir.path().join("data.jsonl"))
        );
    }

    #[test]
    fn accepts_json_and_absolute_paths() {
        let (_dir, path) =
            write_config(r#"{"gold": "/abs/gold.json", "predicted": "/abs/pred.json"}"#);
        let cfg = load_config(&path).unwrap();
        assert_eq!(cfg.version, 1);
        assert_eq!(
            cfg.source().unwrap(),
            DatasetSource::PairFiles {
                gold: PathBuf::from("/abs/gold.json"),
                predicted: PathBuf::from("/abs/pred.json"),
            }
        );
    }

    #[test]
    fn missing_file() {
        let err = load_config(Path::new("/nope/qascore.yaml")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
    }

    #[test]
    fn rejects_unknown_keys() {
        let (_dir, path) = write_config("dataset: d.jsonl\nthreshold: 0.5\n");
        assert!(matches!(
            load_config(&path).unwrap_err(),
            ConfigError::Parse { .. }
        ));
    }

    #[test]
    fn read_config_defers_validation() {
        let (_dir, path) = write_config("min_score: 0.4\n");
        let cfg = read_config(&path).unwrap();
        assert_eq!(cfg.min_score, Some(0.4));
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn validate_returns_the_dataset_source() {
        let cfg = EvalConfig {
            gold: Some(PathBuf::from("g.json")),
            predicted: Some(PathBuf::from("p.json")),
            min_score: Some(0.5),
            ..EvalConfig::default()
        };
        assert_eq!(
            cfg.validate().unwrap(),
            DatasetSource::PairFiles {
                gold: PathBuf::from("g.json"),
                predicted: PathBuf::from("p.json"),
            }
        );
    }

    #[test]
    fn rejects_invalid_settings() {
        for body in [
            "version: 2\ndataset: d.jsonl\n",
            "dataset: d.jsonl\nmin_score: 1.5\n",
            "min_score: 0.5\n",
            "gold: g.json\n",
            "dataset: d.jsonl\ngold: g.json\npredicted: p.json\n",
        ] {
            let (_dir, path) = write_config(body);
            let err = load_config(&path).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)), "{body}: {err}");
        }
    }
}
