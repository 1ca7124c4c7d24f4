//! Per-run and per-column outcome of an encoding pass.

use crate::error::{EncodeError, Result};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnStatus {
    Encoded,
    /// Optional column absent from the input.
    Skipped,
}

#[derive(Debug, Clone, Serialize)]
pub struct ColumnOutcome {
    pub column: String,
    pub status: ColumnStatus,
    pub rows: usize,
    /// Cells whose label matched no known label and are now missing.
    pub unmapped: usize,
    /// Offending labels with their occurrence counts.
    pub unmapped_labels: BTreeMap<String, usize>,
}

impl ColumnOutcome {
    pub fn skipped(column: &str) -> Self {
        Self {
            column: column.to_owned(),
            status: ColumnStatus::Skipped,
            rows: 0,
            unmapped: 0,
            unmapped_labels: BTreeMap::new(),
        }
    }

    pub fn is_clean(&self) -> bool {
        self.unmapped == 0
    }
}

/// Report generated after an encoding run.
#[derive(Debug, Clone, Serialize)]
pub struct EncodingReport {
    pub generated_at: DateTime<Local>,
    pub input: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub rows: usize,
    pub columns: usize,
    pub outcomes: Vec<ColumnOutcome>,
}

impl EncodingReport {
    pub fn new(rows: usize, columns: usize, outcomes: Vec<ColumnOutcome>) -> Self {
        Self {
            generated_at: Local::now(),
            input: None,
            output: None,
            rows,
            columns,
            outcomes,
        }
    }

    pub fn encoded(&self) -> impl Iterator<Item = &ColumnOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == ColumnStatus::Encoded)
    }

    pub fn skipped(&self) -> impl Iterator<Item = &ColumnOutcome> {
        self.outcomes
            .iter()
            .filter(|o| o.status == ColumnStatus::Skipped)
    }

    pub fn total_unmapped(&self) -> usize {
        self.outcomes.iter().map(|o| o.unmapped).sum()
    }

    pub fn outcome(&self, column: &str) -> Option<&ColumnOutcome> {
        self.outcomes.iter().find(|o| o.column == column)
    }

    pub fn summary(&self) -> String {
        format!(
            "Encoded {} columns over {} rows ({} skipped, {} unmapped cells)",
            self.encoded().count(),
            self.rows,
            self.skipped().count(),
            self.total_unmapped()
        )
    }

    /// Writes the report as pretty JSON.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError::Io`] if the file cannot be written.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content).map_err(|source| EncodeError::io(path, source))
    }
}
