//! CLI command implementation

use crate::classifier::FastTextCli;
use crate::cli::{Cli, LogLevel};
use crate::error::Result;
use crate::harness::{run, RunConfig};

/// Execute a cross-validation run from parsed CLI arguments.
pub fn run_command(cli: Cli) -> Result<()> {
    let level = LogLevel::from_flags(cli.verbose, cli.quiet);
    let config = RunConfig::new(cli.dataset, cli.output)
        .folds(cli.folds)
        .seed(cli.seed)
        .scratch_dir(cli.scratch_dir);
    // Model files land next to the scratch files; the model handle removes
    // its .bin when it drops at the end of each fold.
    let classifier = FastTextCli::new(cli.fasttext_bin, config.scratch_dir.join("model"));
    run(&classifier, &config, level)?;
    Ok(())
}
