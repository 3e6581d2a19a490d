//! Per-fold metrics and the aggregate report.
//!
//! The serialized key names (including `"10-Fold iteration:"` with its
//! trailing colon) are kept byte-for-byte compatible with reports produced
//! by the earlier evaluation script, so existing consumers keep working.

use serde::{Deserialize, Serialize};

/// F1 as the harmonic mean of precision and recall.
///
/// When both are zero the harmonic mean is undefined; the harness reports
/// 0.0 for that fold instead of failing the run.
#[must_use]
pub fn f1_score(precision: f64, recall: f64) -> f64 {
    if precision + recall == 0.0 {
        0.0
    } else {
        2.0 * (precision * recall) / (precision + recall)
    }
}

/// Metrics from evaluating one fold's held-out split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldResult {
    /// Fold number, 1-based.
    #[serde(rename = "10-Fold iteration:")]
    pub fold: usize,
    #[serde(rename = "F1")]
    pub f1: f64,
    #[serde(rename = "Recall")]
    pub recall: f64,
    #[serde(rename = "Precision")]
    pub precision: f64,
}

impl FoldResult {
    /// Record a fold's precision/recall and derive its F1.
    #[must_use]
    pub fn new(fold: usize, precision: f64, recall: f64) -> Self {
        Self {
            fold,
            f1: f1_score(precision, recall),
            recall,
            precision,
        }
    }
}

/// Arithmetic means across all folds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeanMetrics {
    #[serde(rename = "F1")]
    pub f1: f64,
    #[serde(rename = "Recall")]
    pub recall: f64,
    #[serde(rename = "Precision")]
    pub precision: f64,
}

/// The full cross-validation report: means plus ordered per-fold details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateReport {
    #[serde(rename = "Results")]
    pub results: MeanMetrics,
    #[serde(rename = "Details")]
    pub details: Vec<FoldResult>,
}

impl AggregateReport {
    /// Aggregate fold results into arithmetic means.
    ///
    /// The harness always supplies exactly k results; an empty slice would
    /// yield NaN means and is not a supported input.
    #[must_use]
    pub fn from_folds(details: Vec<FoldResult>) -> Self {
        let k = details.len() as f64;
        let results = MeanMetrics {
            f1: details.iter().map(|f| f.f1).sum::<f64>() / k,
            recall: details.iter().map(|f| f.recall).sum::<f64>() / k,
            precision: details.iter().map(|f| f.precision).sum::<f64>() / k,
        };
        Self { results, details }
    }
}
