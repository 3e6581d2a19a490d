//! End-to-end harness tests with a stub classifier
//!
//! Exercises the full run: dataset load, fold materialization, classifier
//! calls, report aggregation and writing, and the cleanup guarantee.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use validar::classifier::{Classifier, ClassifierError, ClassifierResult, TestReport};
use validar::cli::LogLevel;
use validar::{run, AggregateReport, RunConfig, ValidarError};

/// Deterministic stand-in for a real classifier backend.
///
/// Records the train/test file contents it sees and replies with scripted
/// metrics; optionally fails at a chosen fold.
struct StubClassifier {
    reply: TestReport,
    fail_on_call: Option<usize>,
    seen_train_files: RefCell<Vec<String>>,
    seen_test_files: RefCell<Vec<String>>,
}

impl StubClassifier {
    fn new(precision: f64, recall: f64) -> Self {
        Self {
            reply: TestReport { examples: 1, precision, recall },
            fail_on_call: None,
            seen_train_files: RefCell::new(Vec::new()),
            seen_test_files: RefCell::new(Vec::new()),
        }
    }

    fn failing_on(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }
}

impl Classifier for StubClassifier {
    type Model = ();

    fn train(&self, training_file: &Path) -> ClassifierResult<()> {
        let contents = fs::read_to_string(training_file).expect("train file readable");
        self.seen_train_files.borrow_mut().push(contents);
        let call = self.seen_train_files.borrow().len();
        if self.fail_on_call == Some(call) {
            return Err(ClassifierError::Training("stub failure".to_string()));
        }
        Ok(())
    }

    fn test(&self, _model: &(), test_file: &Path) -> ClassifierResult<TestReport> {
        let contents = fs::read_to_string(test_file).expect("test file readable");
        self.seen_test_files.borrow_mut().push(contents);
        Ok(self.reply)
    }
}

fn write_dataset(dir: &Path, lines: usize) -> PathBuf {
    let path = dir.join("dataset.txt");
    let body: String = (0..lines)
        .map(|i| format!("__label__{} record number {i}\n", i % 2))
        .collect();
    fs::write(&path, body).unwrap();
    path
}

fn config_in(dir: &Path, dataset: PathBuf) -> RunConfig {
    RunConfig::new(dataset, dir.join("report.json")).scratch_dir(dir.join("scratch"))
}

#[test]
fn test_ten_records_ten_folds_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), write_dataset(dir.path(), 10));
    let stub = StubClassifier::new(0.8, 0.6);

    let report = run(&stub, &config, LogLevel::Quiet).unwrap();

    assert_eq!(report.details.len(), 10);
    for (i, fold) in report.details.iter().enumerate() {
        assert_eq!(fold.fold, i + 1);
        assert!((fold.precision - 0.8).abs() < 1e-12);
        assert!((fold.recall - 0.6).abs() < 1e-12);
    }
    // Each fold held out exactly one of the ten records.
    for seen in stub.seen_test_files.borrow().iter() {
        assert_eq!(seen.lines().count(), 1);
    }
    for seen in stub.seen_train_files.borrow().iter() {
        assert_eq!(seen.lines().count(), 9);
    }
}

#[test]
fn test_report_written_with_legacy_keys() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), write_dataset(dir.path(), 20));
    let stub = StubClassifier::new(0.5, 0.5);

    run(&stub, &config, LogLevel::Quiet).unwrap();

    let body = fs::read_to_string(dir.path().join("report.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    let results = value.get("Results").expect("Results key");
    assert!(results.get("F1").is_some());
    assert!(results.get("Recall").is_some());
    assert!(results.get("Precision").is_some());

    let details = value.get("Details").unwrap().as_array().unwrap();
    assert_eq!(details.len(), 10);
    assert_eq!(details[0].get("10-Fold iteration:").unwrap(), 1);

    // The written report round-trips through the typed model.
    let parsed: AggregateReport = serde_json::from_str(&body).unwrap();
    assert_eq!(parsed.details.len(), 10);
}

#[test]
fn test_mean_f1_matches_fold_mean() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), write_dataset(dir.path(), 30)).folds(5);
    let stub = StubClassifier::new(0.9, 0.3);

    let report = run(&stub, &config, LogLevel::Quiet).unwrap();

    let expected = report.details.iter().map(|f| f.f1).sum::<f64>() / 5.0;
    assert!((report.results.f1 - expected).abs() < 1e-12);
}

#[test]
fn test_zero_precision_and_recall_does_not_abort() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), write_dataset(dir.path(), 10));
    let stub = StubClassifier::new(0.0, 0.0);

    let report = run(&stub, &config, LogLevel::Quiet).unwrap();

    assert_eq!(report.results.f1, 0.0);
    assert!(report.details.iter().all(|f| f.f1 == 0.0));
}

#[test]
fn test_scratch_files_removed_after_success() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), write_dataset(dir.path(), 10));

    run(&StubClassifier::new(0.7, 0.7), &config, LogLevel::Quiet).unwrap();

    assert!(!config.train_path().exists());
    assert!(!config.test_path().exists());
}

#[test]
fn test_failure_aborts_run_cleans_up_and_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), write_dataset(dir.path(), 10));
    let stub = StubClassifier::new(0.7, 0.7).failing_on(4);

    let err = run(&stub, &config, LogLevel::Quiet).unwrap_err();

    match err {
        ValidarError::Classifier { fold, .. } => assert_eq!(fold, 4),
        other => panic!("expected classifier error, got {other}"),
    }
    assert!(!config.train_path().exists());
    assert!(!config.test_path().exists());
    assert!(!dir.path().join("report.json").exists());
}

#[test]
fn test_missing_dataset_is_dataset_error() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), dir.path().join("absent.txt"));

    let err = run(&StubClassifier::new(0.5, 0.5), &config, LogLevel::Quiet).unwrap_err();
    assert!(matches!(err, ValidarError::Dataset { .. }));
    assert!(!config.train_path().exists());
}

#[test]
fn test_dataset_smaller_than_k_is_rejected_before_any_training() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), write_dataset(dir.path(), 4));
    let stub = StubClassifier::new(0.5, 0.5);

    let err = run(&stub, &config, LogLevel::Quiet).unwrap_err();
    assert!(matches!(
        err,
        ValidarError::DatasetTooSmall { lines: 4, folds: 10 }
    ));
    assert!(stub.seen_train_files.borrow().is_empty());
}

#[test]
fn test_single_fold_count_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path(), write_dataset(dir.path(), 10)).folds(1);

    let err = run(&StubClassifier::new(0.5, 0.5), &config, LogLevel::Quiet).unwrap_err();
    assert!(matches!(err, ValidarError::InvalidFolds { folds: 1 }));
}

#[test]
fn test_same_seed_sees_identical_splits() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(dir.path(), 25);

    let first = StubClassifier::new(0.5, 0.5);
    let second = StubClassifier::new(0.5, 0.5);
    let config_a = config_in(dir.path(), dataset.clone()).seed(7);
    let config_b = config_in(dir.path(), dataset).seed(7);

    run(&first, &config_a, LogLevel::Quiet).unwrap();
    run(&second, &config_b, LogLevel::Quiet).unwrap();

    assert_eq!(
        *first.seen_test_files.borrow(),
        *second.seen_test_files.borrow()
    );
}
