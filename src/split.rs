//! Seeded k-way dataset partitioning.
//!
//! Record indices are shuffled once with a seeded `StdRng`, then sliced into
//! k contiguous chunks that are as equal as k divides n allows (the first
//! `n % k` folds take one extra index). The same (n, k, seed) triple always
//! produces the same partition.

use crate::error::{Result, ValidarError};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// One cross-validation fold: a disjoint train/test index partition.
#[derive(Debug, Clone)]
pub struct Fold {
    /// Fold number, 1-based, assigned in generation order.
    pub number: usize,
    /// Indices of records to train on.
    pub train: Vec<usize>,
    /// Indices of records held out for evaluation.
    pub test: Vec<usize>,
}

/// Partition `0..n` into `k` folds using a shuffle seeded by `seed`.
///
/// Index lists come back sorted, so materialized subsets keep the dataset's
/// original record order.
pub fn k_fold(n: usize, k: usize, seed: u64) -> Result<Vec<Fold>> {
    if k < 2 {
        return Err(ValidarError::InvalidFolds { folds: k });
    }
    if n < k {
        return Err(ValidarError::DatasetTooSmall { lines: n, folds: k });
    }

    let mut indices: Vec<usize> = (0..n).collect();
    let mut rng = StdRng::seed_from_u64(seed);
    indices.shuffle(&mut rng);

    let base = n / k;
    let remainder = n % k;

    let mut folds = Vec::with_capacity(k);
    let mut start = 0;
    for number in 1..=k {
        // First n % k folds absorb the leftover records.
        let size = base + usize::from(number <= remainder);
        let mut test: Vec<usize> = indices[start..start + size].to_vec();
        let mut train: Vec<usize> = indices[..start]
            .iter()
            .chain(indices[start + size..].iter())
            .copied()
            .collect();
        test.sort_unstable();
        train.sort_unstable();
        folds.push(Fold { number, train, test });
        start += size;
    }
    Ok(folds)
}
