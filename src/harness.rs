//! Cross-validation orchestration.
//!
//! `run` drives the whole pass: load the dataset, generate the folds,
//! materialize each fold's train/test subsets into two scratch files, call
//! the classifier backend, collect per-fold metrics, and write the aggregate
//! report. Folds execute strictly in order because the two scratch paths are
//! reused and fully overwritten each iteration; parallel folds would need
//! per-fold paths.
//!
//! The first failure anywhere aborts the run with no partial report. The
//! scratch files are removed on every exit path via an RAII guard.

use crate::classifier::Classifier;
use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::dataset::Dataset;
use crate::error::{Result, ValidarError};
use crate::metrics::{AggregateReport, FoldResult};
use crate::split::k_fold;
use std::fs;
use std::path::{Path, PathBuf};

const TRAIN_FILE: &str = "tmp_train.txt";
const TEST_FILE: &str = "tmp_test.txt";

/// Configuration for one cross-validation run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Labeled dataset, one record per line.
    pub dataset: PathBuf,
    /// Where the JSON report is written.
    pub output: PathBuf,
    /// Number of folds k.
    pub folds: usize,
    /// Shuffle seed for reproducible partitions.
    pub seed: u64,
    /// Directory holding the per-fold scratch files.
    pub scratch_dir: PathBuf,
}

impl RunConfig {
    /// Create a config with the conventional defaults: 10 folds, seed 1,
    /// scratch files under `tmp/`.
    #[must_use]
    pub fn new(dataset: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            dataset: dataset.into(),
            output: output.into(),
            folds: 10,
            seed: 1,
            scratch_dir: PathBuf::from("tmp"),
        }
    }

    /// Set the number of folds.
    #[must_use]
    pub fn folds(mut self, folds: usize) -> Self {
        self.folds = folds;
        self
    }

    /// Set the shuffle seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the scratch directory.
    #[must_use]
    pub fn scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    /// Path of the reused training scratch file.
    #[must_use]
    pub fn train_path(&self) -> PathBuf {
        self.scratch_dir.join(TRAIN_FILE)
    }

    /// Path of the reused test scratch file.
    #[must_use]
    pub fn test_path(&self) -> PathBuf {
        self.scratch_dir.join(TEST_FILE)
    }
}

/// Removes the scratch files when dropped, success or failure.
struct ScratchGuard {
    paths: Vec<PathBuf>,
}

impl ScratchGuard {
    fn new(paths: Vec<PathBuf>) -> Self {
        Self { paths }
    }
}

impl Drop for ScratchGuard {
    fn drop(&mut self) {
        for path in &self.paths {
            if path.exists() {
                let _ = fs::remove_file(path);
            }
        }
    }
}

/// Run k-fold cross-validation with the given classifier backend.
///
/// Returns the aggregate report after writing it (pretty-printed JSON) to
/// `config.output` and echoing it to stdout.
pub fn run<C: Classifier>(
    classifier: &C,
    config: &RunConfig,
    level: LogLevel,
) -> Result<AggregateReport> {
    log(
        level,
        LogLevel::Normal,
        &format!("Loading dataset {}", config.dataset.display()),
    );
    let dataset = Dataset::load(&config.dataset)?;
    let folds = k_fold(dataset.len(), config.folds, config.seed)?;
    log(
        level,
        LogLevel::Normal,
        &format!(
            "{} records, {}-fold validation, seed {}",
            dataset.len(),
            config.folds,
            config.seed
        ),
    );

    fs::create_dir_all(&config.scratch_dir).map_err(|e| {
        ValidarError::io(
            format!("creating scratch dir {}", config.scratch_dir.display()),
            e,
        )
    })?;
    let train_path = config.train_path();
    let test_path = config.test_path();
    let _guard = ScratchGuard::new(vec![train_path.clone(), test_path.clone()]);

    let mut details = Vec::with_capacity(config.folds);
    for fold in &folds {
        log(
            level,
            LogLevel::Normal,
            &format!(
                "Fold {}/{}: {} train records, {} test records",
                fold.number,
                config.folds,
                fold.train.len(),
                fold.test.len()
            ),
        );
        dataset.write_subset(&fold.train, &train_path)?;
        dataset.write_subset(&fold.test, &test_path)?;

        let model = classifier
            .train(&train_path)
            .map_err(|source| ValidarError::Classifier { fold: fold.number, source })?;
        let tested = classifier
            .test(&model, &test_path)
            .map_err(|source| ValidarError::Classifier { fold: fold.number, source })?;

        let result = FoldResult::new(fold.number, tested.precision, tested.recall);
        log(
            level,
            LogLevel::Normal,
            &format!(
                "  P={:.4} R={:.4} F1={:.4} ({} examples)",
                result.precision, result.recall, result.f1, tested.examples
            ),
        );
        details.push(result);
    }

    let report = AggregateReport::from_folds(details);
    write_report(&report, &config.output, level)?;
    Ok(report)
}

fn write_report(report: &AggregateReport, output: &Path, level: LogLevel) -> Result<()> {
    let dump = serde_json::to_string_pretty(report)
        .map_err(|e| ValidarError::Serialization { message: e.to_string() })?;
    log(level, LogLevel::Normal, &dump);
    fs::write(output, &dump)
        .map_err(|e| ValidarError::io(format!("writing report {}", output.display()), e))?;
    log(
        level,
        LogLevel::Normal,
        &format!("Report written to {}", output.display()),
    );
    Ok(())
}
