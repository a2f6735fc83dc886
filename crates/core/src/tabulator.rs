//! Turns ranked indices into the report handed back to the caller.

use crate::catalog::{CatalogShape, ClassificationCatalog};
use crate::ranker::RankedEntry;
use crate::MatchError;
use serde::Serialize;

/// One guess for one input. `code` is populated only for code-bearing
/// classifications; there is a single row shape either way.
#[derive(Debug, Clone, Serialize)]
pub struct MatchRow {
    pub input: String,
    pub order: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub sector: String,
    pub similarity: f32,
}

/// Rows ordered by (input order, ascending rank) — best guess first per input.
#[derive(Debug, Clone, Serialize)]
pub struct ResultTable {
    pub coded: bool,
    pub rows: Vec<MatchRow>,
}

/// Resolve the top `top_n` ranked entries per input against the catalog.
/// `ranked` must hold one full row per input, as produced by `ranker::rank`.
pub fn tabulate(
    inputs: &[String],
    ranked: &[Vec<RankedEntry>],
    catalog: &ClassificationCatalog,
    top_n: usize,
) -> Result<ResultTable, MatchError> {
    if top_n == 0 || top_n > catalog.len() {
        return Err(MatchError::InsufficientReferenceEntries {
            requested: top_n,
            available: catalog.len(),
        });
    }

    let mut rows = Vec::with_capacity(inputs.len() * top_n);
    for (input, guesses) in inputs.iter().zip(ranked.iter()) {
        for (rank, guess) in guesses.iter().take(top_n).enumerate() {
            let entry =
                catalog
                    .entry(guess.index)
                    .ok_or(MatchError::InsufficientReferenceEntries {
                        requested: top_n,
                        available: catalog.len(),
                    })?;
            rows.push(MatchRow {
                input: input.clone(),
                order: rank + 1,
                code: entry.code.clone(),
                sector: entry.label.clone(),
                similarity: guess.score,
            });
        }
    }

    Ok(ResultTable {
        coded: catalog.shape() == CatalogShape::Coded,
        rows,
    })
}
