//! Aligned gold/predicted answer data.
//!
//! Loaders turn files into plain answer strings; they never reconcile lengths.
//! Alignment is checked by the scorer so a mismatch is reported, not truncated.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::DatasetError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    pub gold: String,
    pub predicted: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn gold_outputs(&self) -> Vec<String> {
        self.records.iter().map(|r| r.gold.clone()).collect()
    }

    pub fn predicted_outputs(&self) -> Vec<String> {
        self.records.iter().map(|r| r.predicted.clone()).collect()
    }

    pub fn into_answers(self) -> AlignedAnswers {
        let (gold, predicted) = self
            .records
            .into_iter()
            .map(|r| (r.gold, r.predicted))
            .unzip();
        AlignedAnswers { gold, predicted }
    }
}

/// Two answer columns that are expected, but not guaranteed, to line up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignedAnswers {
    pub gold: Vec<String>,
    pub predicted: Vec<String>,
}

/// Plain-text form of a JSON answer value.
///
/// Strings pass through, `null` is blank, scalars use their display form and a
/// wrapped model result (`{"value": ...}`) yields its inner value. Other arrays and
/// objects become compact JSON.
pub fn answer_text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Object(map) => match map.get("value") {
            Some(inner) => answer_text(inner),
            None => v.to_string(),
        },
        Value::Array(_) => v.to_string(),
    }
}

fn read_file(path: &Path) -> Result<String, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::NotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| DatasetError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn parse_line(path: &Path, line: usize, raw: &str) -> Result<Value, DatasetError> {
    serde_json::from_str(raw).map_err(|source| DatasetError::Parse {
        path: path.to_path_buf(),
        line,
        source,
    })
}

fn first_field<'a>(obj: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|k| obj.get(*k))
}

/// Loads one `{"gold": .., "predicted": ..}` object per line.
///
/// `output`/`expected` are accepted for the gold answer and `prediction` for the
/// predicted one. Blank lines are skipped; line numbers in errors are 1-based.
pub fn load_jsonl(path: &Path) -> Result<Dataset, DatasetError> {
    let raw = read_file(path)?;
    let mut records = Vec::new();

    for (idx, line) in raw.lines().enumerate() {
        let line_no = idx + 1;
        if line.trim().is_empty() {
            continue;
        }
        let v = parse_line(path, line_no, line)?;
        let missing = |field: &'static str| DatasetError::MissingField {
            path: path.to_path_buf(),
            line: line_no,
            field,
        };

        let gold =
            first_field(&v, &["gold", "output", "expected"]).ok_or_else(|| missing("gold"))?;
        let predicted = first_field(&v, &["predicted", "prediction"])
            .ok_or_else(|| missing("predicted"))?;

        records.push(Record {
            id: v.get("id").map(answer_text),
            input: v.get("input").map(answer_text),
            gold: answer_text(gold),
            predicted: answer_text(predicted),
        });
    }

    tracing::info!(path = %path.display(), records = records.len(), "loaded dataset");
    Ok(Dataset { records })
}

/// Loads a column of answers from a JSON array or a JSONL file.
///
/// A file that parses as a single JSON array is the column itself. Anything else
/// is read line by line, so JSONL values may be arrays too.
pub fn load_answers(path: &Path) -> Result<Vec<String>, DatasetError> {
    let raw = read_file(path)?;

    if let Ok(Value::Array(items)) = serde_json::from_str::<Value>(&raw) {
        return Ok(items.iter().map(answer_text).collect());
    }

    raw.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_line(path, idx + 1, line).map(|v| answer_text(&v)))
        .collect()
}

/// Loads gold and predicted answers from two separate files.
pub fn load_pair_files(gold: &Path, predicted: &Path) -> Result<AlignedAnswers, DatasetError> {
    let answers = AlignedAnswers {
        gold: load_answers(gold)?,
        predicted: load_answers(predicted)?,
    };
    if answers.gold.len() != answers.predicted.len() {
        tracing::warn!(
            gold = answers.gold.len(),
            predicted = answers.predicted.len(),
            "answer files have different lengths"
        );
    }
    Ok(answers)
}

/// Where answers come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    Jsonl(PathBuf),
    PairFiles { gold: PathBuf, predicted: PathBuf },
}

impl DatasetSource {
    pub fn load(&self) -> Result<AlignedAnswers, DatasetError> {
        match self {
            Self::Jsonl(path) => load_jsonl(path).map(Dataset::into_answers),
            Self::PairFiles { gold, predicted } => load_pair_files(gold, predicted),
        }
    }
}
