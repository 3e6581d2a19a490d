//! CLI module for validar
//!
//! Argument parsing, output control, and the command handler.

mod commands;
pub mod logging;

pub use commands::run_command;
pub use logging::LogLevel;

use clap::Parser;
use std::path::PathBuf;

/// Validar: k-fold cross-validation for supervised text classifiers
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "validar")]
#[command(version)]
#[command(
    about = "Measures classifier quality with k-fold cross-validation and writes a JSON report"
)]
pub struct Cli {
    /// Labeled dataset, one record per line (fastText format)
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,

    /// Path for the aggregate JSON report
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Number of folds
    #[arg(short = 'k', long, default_value_t = 10)]
    pub folds: usize,

    /// Shuffle seed for reproducible splits
    #[arg(long, default_value_t = 1)]
    pub seed: u64,

    /// Directory for the per-fold scratch files
    #[arg(long, default_value = "tmp", value_name = "DIR")]
    pub scratch_dir: PathBuf,

    /// fastText binary to invoke for training and testing
    #[arg(long, default_value = "fasttext", value_name = "PATH")]
    pub fasttext_bin: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long)]
    pub quiet: bool,
}
