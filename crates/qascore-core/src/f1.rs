//! Token-level F1 between gold and predicted answers.
//!
//! Both answers are tokenized with [`crate::normalize::tokenize`] and compared as
//! multisets. Blank answers are handled before the overlap formula: two blanks are a
//! perfect match, a single blank is a total miss.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::ScoreError;
use crate::normalize::tokenize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PairStats {
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    /// Size of the multiset intersection.
    pub num_same: usize,
    pub gold_tokens: usize,
    pub predicted_tokens: usize,
}

impl PairStats {
    fn uniform(score: f64, num_same: usize, gold_tokens: usize, predicted_tokens: usize) -> Self {
        Self {
            precision: score,
            recall: score,
            f1: score,
            num_same,
            gold_tokens,
            predicted_tokens,
        }
    }
}

/// Precision, recall and F1 for one gold/predicted pair.
pub fn pair_stats(gold: &str, predicted: &str) -> PairStats {
    let gold_toks = tokenize(gold);
    let pred_toks = tokenize(predicted);
    let num_same = overlap(&gold_toks, &pred_toks);

    if gold_toks.is_empty() || pred_toks.is_empty() {
        let score = if gold_toks == pred_toks { 1.0 } else { 0.0 };
        return PairStats::uniform(score, num_same, gold_toks.len(), pred_toks.len());
    }
    if num_same == 0 {
        return PairStats::uniform(0.0, 0, gold_toks.len(), pred_toks.len());
    }

    let precision = num_same as f64 / pred_toks.len() as f64;
    let recall = num_same as f64 / gold_toks.len() as f64;
    PairStats {
        precision,
        recall,
        f1: (2.0 * precision * recall) / (precision + recall),
        num_same,
        gold_tokens: gold_toks.len(),
        predicted_tokens: pred_toks.len(),
    }
}

/// F1 score in `[0.0, 1.0]` for one gold/predicted pair.
pub fn pair_score(gold: &str, predicted: &str) -> f64 {
    pair_stats(gold, predicted).f1
}

/// Sum of per-token minimum counts.
fn overlap(gold: &[String], predicted: &[String]) -> usize {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for tok in gold {
        *counts.entry(tok.as_str()).or_insert(0) += 1;
    }
    let mut same = 0;
    for tok in predicted {
        if let Some(n) = counts.get_mut(tok.as_str()) {
            if *n > 0 {
                *n -= 1;
                same += 1;
            }
        }
    }
    same
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemScore {
    pub index: usize,
    #[serde(flatten)]
    pub stats: PairStats,
}

/// Per-item breakdown plus the mean F1, items in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub score: f64,
    pub count: usize,
    pub items: Vec<ItemScore>,
}

pub fn score_dataset<G, P>(gold: &[G], predicted: &[P]) -> Result<ScoreReport, ScoreError>
where
    G: AsRef<str>,
    P: AsRef<str>,
{
    if gold.len() != predicted.len() {
        return Err(ScoreError::InputMismatch {
            gold: gold.len(),
            predicted: predicted.len(),
        });
    }
    if gold.is_empty() {
        return Err(ScoreError::EmptyDataset);
    }

    let items: Vec<ItemScore> = gold
        .iter()
        .zip(predicted)
        .enumerate()
        .map(|(index, (g, p))| ItemScore {
            index,
            stats: pair_stats(g.as_ref(), p.as_ref()),
        })
        .collect();

    let total: f64 = items.iter().map(|i| i.stats.f1).sum();
    let score = total / items.len() as f64;
    tracing::debug!(count = items.len(), score, "scored dataset");
    if score == 0.0 {
        tracing::warn!(count = items.len(), "no pair has any token overlap");
    }

    Ok(ScoreReport {
        score,
        count: items.len(),
        items,
    })
}

/// Mean pairwise F1 over two aligned answer sequences.
///
/// Fails with [`ScoreError::InputMismatch`] when the lengths differ and
/// [`ScoreError::EmptyDataset`] when both are empty.
pub fn aggregate_score<G, P>(gold: &[G], predicted: &[P]) -> Result<f64, ScoreError>
where
    G: AsRef<str>,
    P: AsRef<str>,
{
    score_dataset(gold, predicted).map(|r| r.score)
}
