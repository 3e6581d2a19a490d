//! Error types with actionable diagnostics.
//!
//! All errors include contextual information to help users resolve issues
//! without needing to consult external documentation.

use crate::classifier::ClassifierError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for validar operations.
pub type Result<T> = std::result::Result<T, ValidarError>;

/// Errors that can occur while running a cross-validation pass.
#[derive(Debug, Error)]
pub enum ValidarError {
    /// Dataset file unreadable or malformed.
    #[error("Dataset error: {message}\n  → Check that {path} exists and is readable UTF-8 text, one labeled record per line")]
    Dataset { path: PathBuf, message: String },

    /// Dataset has fewer records than folds.
    #[error("Dataset too small: {lines} lines, but {folds}-fold validation needs at least {folds}\n  → Use a larger dataset or reduce --folds")]
    DatasetTooSmall { lines: usize, folds: usize },

    /// Fold count below the minimum of 2.
    #[error("Invalid fold count: {folds}\n  → Cross-validation requires at least 2 folds")]
    InvalidFolds { folds: usize },

    /// The external classifier backend failed during a fold.
    #[error("Classifier error in fold {fold}: {source}")]
    Classifier {
        fold: usize,
        #[source]
        source: ClassifierError,
    },

    /// Report serialization failed.
    #[error("Serialization error: {message}")]
    Serialization { message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl ValidarError {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }
}
