//! Cosine-similarity ranking of input vectors against reference vectors.

use crate::MatchError;

/// One scored reference entry for a given input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RankedEntry {
    pub index: usize,
    pub score: f32,
}

/// Score every input vector against every reference vector and return, per
/// input, all reference indices sorted by descending similarity. Ties keep
/// ascending index order (the sort is stable), so output is deterministic.
/// Truncation to top-N is the caller's responsibility.
pub fn rank(
    inputs: &[Vec<f32>],
    references: &[Vec<f32>],
) -> Result<Vec<Vec<RankedEntry>>, MatchError> {
    if inputs.is_empty() || references.is_empty() {
        return Err(MatchError::EmptyInput);
    }
    let dim = inputs[0].len();
    for vector in inputs.iter().chain(references.iter()) {
        if vector.len() != dim {
            return Err(MatchError::DimensionMismatch {
                expected: dim,
                found: vector.len(),
            });
        }
    }

    let mut ranked = Vec::with_capacity(inputs.len());
    for input in inputs {
        let mut row: Vec<RankedEntry> = references
            .iter()
            .enumerate()
            .map(|(index, reference)| RankedEntry {
                index,
                score: cosine(input, reference),
            })
            .collect();
        row.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked.push(row);
    }
    Ok(ranked)
}

/// Cosine similarity in [-1, 1]. Zero-norm vectors score 0 against everything.
pub fn cosine(a: &[f32], b: &[f32]) -> f32 {
    let mut dot = 0.0_f32;
    let mut norm_a = 0.0_f32;
    let mut norm_b = 0.0_f32;
    for (x, y) in a.iter().zip(b.iter()) {
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }
    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    dot / denom
}
