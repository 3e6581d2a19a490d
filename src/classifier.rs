//! The classifier capability the harness depends on.
//!
//! The harness never looks inside a classifier. It relies on a two-call
//! contract: train a model from a file of labeled lines, then evaluate that
//! model against a second file, yielding example count, precision, and
//! recall. Any backend honoring this trait plugs in without touching the
//! fold loop.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use thiserror::Error;

/// Errors raised by a classifier backend.
#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("training failed: {0}")]
    Training(String),

    #[error("evaluation failed: {0}")]
    Evaluation(String),

    #[error("backend unavailable: {0}\n  → Install fastText or point --fasttext-bin at the binary")]
    Unavailable(String),
}

/// Result type for classifier backend calls.
pub type ClassifierResult<T> = std::result::Result<T, ClassifierError>;

/// Metrics reported by evaluating a model on a held-out file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TestReport {
    /// Number of examples evaluated.
    pub examples: usize,
    /// Precision at 1.
    pub precision: f64,
    /// Recall at 1.
    pub recall: f64,
}

/// A supervised text classifier the harness can train and evaluate.
pub trait Classifier {
    /// Handle to a trained model, passed back for evaluation.
    type Model;

    /// Train a model from a file of labeled lines.
    fn train(&self, training_file: &Path) -> ClassifierResult<Self::Model>;

    /// Evaluate a trained model against a file of labeled lines.
    fn test(&self, model: &Self::Model, test_file: &Path) -> ClassifierResult<TestReport>;
}

/// Backend that shells out to a `fasttext` binary.
///
/// Training runs `fasttext supervised -input <train> -output <prefix>`;
/// evaluation runs `fasttext test <prefix>.bin <test>` and parses the
/// `N / P@1 / R@1` table it prints.
#[derive(Debug, Clone)]
pub struct FastTextCli {
    binary: PathBuf,
    model_prefix: PathBuf,
}

/// A model trained by [`FastTextCli`]: the path to its `.bin` file.
///
/// The file is transient; dropping the handle removes it so a run leaves
/// nothing behind in the scratch directory.
#[derive(Debug)]
pub struct FastTextModel {
    path: PathBuf,
}

impl FastTextModel {
    /// Location of the serialized model on disk.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for FastTextModel {
    fn drop(&mut self) {
        if self.path.exists() {
            let _ = fs::remove_file(&self.path);
        }
    }
}

impl FastTextCli {
    /// Create a backend invoking `binary`, writing models under
    /// `model_prefix` (fastText appends `.bin` itself).
    #[must_use]
    pub fn new(binary: impl Into<PathBuf>, model_prefix: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
            model_prefix: model_prefix.into(),
        }
    }

    fn run(&self, args: &[&str], phase: &str) -> ClassifierResult<String> {
        let output = Command::new(&self.binary).args(args).output().map_err(|e| {
            ClassifierError::Unavailable(format!("{}: {e}", self.binary.display()))
        })?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            let message = format!("{phase} exited with {}: {}", output.status, stderr.trim());
            return Err(match phase {
                "training" => ClassifierError::Training(message),
                _ => ClassifierError::Evaluation(message),
            });
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

impl Classifier for FastTextCli {
    type Model = FastTextModel;

    fn train(&self, training_file: &Path) -> ClassifierResult<Self::Model> {
        let input = training_file.display().to_string();
        let prefix = self.model_prefix.display().to_string();
        self.run(
            &["supervised", "-input", &input, "-output", &prefix],
            "training",
        )?;
        Ok(FastTextModel {
            path: self.model_prefix.with_extension("bin"),
        })
    }

    fn test(&self, model: &Self::Model, test_file: &Path) -> ClassifierResult<TestReport> {
        let model_path = model.path.display().to_string();
        let test_path = test_file.display().to_string();
        let stdout = self.run(&["test", &model_path, &test_path], "evaluation")?;
        parse_test_output(&stdout)
    }
}

/// Parse fastText's `test` output:
///
/// ```text
/// N	3000
/// P@1	0.825
/// R@1	0.825
/// ```
fn parse_test_output(stdout: &str) -> ClassifierResult<TestReport> {
    let mut examples = None;
    let mut precision = None;
    let mut recall = None;

    for line in stdout.lines() {
        let mut parts = line.split_whitespace();
        let (Some(key), Some(value)) = (parts.next(), parts.next()) else {
            continue;
        };
        match key {
            "N" => examples = value.parse::<usize>().ok(),
            "P@1" => precision = value.parse::<f64>().ok(),
            "R@1" => recall = value.parse::<f64>().ok(),
            _ => {}
        }
    }

    match (examples, precision, recall) {
        (Some(examples), Some(precision), Some(recall)) => Ok(TestReport {
            examples,
            precision,
            recall,
        }),
        _ => Err(ClassifierError::Evaluation(format!(
            "could not parse N/P@1/R@1 from fasttext output: {stdout:?}"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_standard_test_output() {
        let report = parse_test_output("N\t3000\nP@1\t0.825\nR@1\t0.791\n").unwrap();
        assert_eq!(report.examples, 3000);
        assert!((report.precision - 0.825).abs() < 1e-12);
        assert!((report.recall - 0.791).abs() < 1e-12);
    }

    #[test]
    fn test_parse_ignores_extra_lines() {
        let stdout = "Read 0M words\nN\t10\nP@1\t1\nR@1\t1\n";
        let report = parse_test_output(stdout).unwrap();
        assert_eq!(report.examples, 10);
        assert_eq!(report.precision, 1.0);
    }

    #[test]
    fn test_parse_missing_fields_is_evaluation_error() {
        let err = parse_test_output("N\t10\n").unwrap_err();
        assert!(matches!(err, ClassifierError::Evaluation(_)));
    }

    #[test]
    fn test_missing_binary_is_unavailable() {
        let backend = FastTextCli::new("/nonexistent/fasttext", "/tmp/model");
        let err = backend.train(Path::new("train.txt")).unwrap_err();
        assert!(matches!(err, ClassifierError::Unavailable(_)));
    }

    #[test]
    fn test_model_path_gets_bin_extension() {
        let backend = FastTextCli::new("true", "/tmp/scratch/model");
        // `true` exits 0 with no output; only the returned path matters here.
        let model = backend.train(Path::new("train.txt")).unwrap();
        assert_eq!(model.path(), Path::new("/tmp/scratch/model.bin"));
    }
}
