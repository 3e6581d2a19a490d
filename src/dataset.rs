//! Line-oriented dataset loading.
//!
//! A dataset is an ordered, immutable sequence of labeled text records, one
//! per line. The harness never interprets a record's contents; the label
//! encoding (e.g. fastText's `__label__x text`) is the classifier backend's
//! concern.

use crate::error::{Result, ValidarError};
use std::fs;
use std::io::{BufWriter, Write};
use std::path::Path;

/// An in-memory dataset, loaded once and never mutated.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<String>,
}

impl Dataset {
    /// Load every line of `path` into memory.
    ///
    /// Lines are stored without their trailing newline. Fails with a
    /// `Dataset` error when the file is missing, unreadable, or not UTF-8.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| ValidarError::Dataset {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let records = contents.lines().map(str::to_string).collect();
        Ok(Self { records })
    }

    /// Build a dataset directly from records (tests, programmatic use).
    #[must_use]
    pub fn from_records(records: Vec<String>) -> Self {
        Self { records }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records, in file order.
    #[must_use]
    pub fn records(&self) -> &[String] {
        &self.records
    }

    /// Write the records selected by `indices` to `path`, one per line.
    ///
    /// Truncates any previous contents, so a scratch path can be reused
    /// fold after fold without residue.
    pub fn write_subset(&self, indices: &[usize], path: &Path) -> Result<()> {
        let file = fs::File::create(path)
            .map_err(|e| ValidarError::io(format!("creating {}", path.display()), e))?;
        let mut writer = BufWriter::new(file);
        for &i in indices {
            writeln!(writer, "{}", self.records[i])
                .map_err(|e| ValidarError::io(format!("writing {}", path.display()), e))?;
        }
        writer
            .flush()
            .map_err(|e| ValidarError::io(format!("flushing {}", path.display()), e))
    }
}
