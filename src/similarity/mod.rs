pub mod lcs;
pub mod preprocess;

pub use lcs::{lcs, MAX_TABLE_CELLS};
pub use preprocess::preprocess;

use serde::Serialize;
use crate::errors::PlagcheckError;

/// Outcome of comparing two normalized texts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub lcs_len: usize,
    pub lcs_str: String,
    /// Percentage in `[0, 100]`.
    pub score: f64,
}

impl Comparison {
    /// Score with two decimals and a percent sign, e.g. `45.45%`.
    pub fn score_display(&self) -> String {
        format!("{:.2}%", self.score)
    }
}

/// LCS of `a` and `b` plus its share of their average length.
///
/// The score is `0` when both inputs are empty.
pub fn similarity_score(a: &str, b: &str) -> Result<Comparison, PlagcheckError> {
    let (lcs_len, lcs_str) = lcs(a, b)?;
    let avg_len = (a.chars().count() + b.chars().count()) as f64 / 2.0;
    let score = if avg_len > 0.0 {
        lcs_len as f64 / avg_len * 100.0
    } else {
        0.0
    };

    Ok(Comparison { lcs_len, lcs_str, score })
}

/// Normalize both raw inputs, then score them.
pub fn compare(text1: &str, text2: &str) -> Result<Comparison, PlagcheckError> {
    similarity_score(&preprocess(text1), &preprocess(text2))
}
