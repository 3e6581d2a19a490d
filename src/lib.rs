//! validar: k-fold cross-validation harness for supervised text classifiers.
//!
//! Loads a labeled line-oriented dataset, partitions it k ways with a seeded
//! shuffle, trains a classifier on each fold's complement, evaluates
//! precision/recall on the held-out fold, derives F1, and writes an aggregate
//! JSON report.
//!
//! The classifier itself is an external capability behind the
//! [`classifier::Classifier`] trait; the bundled backend shells out to a
//! fastText binary, and any implementation of the trait slots in unchanged.

pub mod classifier;
pub mod cli;
pub mod dataset;
pub mod error;
pub mod harness;
pub mod metrics;
pub mod split;

pub use classifier::{Classifier, ClassifierError, FastTextCli, TestReport};
pub use error::{Result, ValidarError};
pub use harness::{run, RunConfig};
pub use metrics::{AggregateReport, FoldResult};
