//! Validar CLI
//!
//! Command-line entry point for the cross-validation harness.
//!
//! # Usage
//!
//! ```bash
//! # 10-fold cross-validation with the defaults (seed 1, scratch under tmp/)
//! validar dataset.txt report.json
//!
//! # 5 folds, custom seed, explicit fastText binary
//! validar dataset.txt report.json -k 5 --seed 42 --fasttext-bin /usr/local/bin/fasttext
//! ```

use clap::Parser;
use std::process::ExitCode;
use validar::cli::{run_command, Cli};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
