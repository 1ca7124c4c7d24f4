//! Categorical → integer encoding of the heart-health survey table.
//!
//! # Overview
//!
//! A run is three steps on one in-memory [`DataFrame`]:
//!
//! 1. [`load_table`] reads the cleaned CSV export.
//! 2. [`encode_table`] applies [`heart_rules`] column by column, in place.
//! 3. [`save_table`] writes the result with the same row and column order.
//!
//! Each rule reads and writes only its own column, so the order of rules
//! does not change the result.
//!
//! # Presence policy
//!
//! The six yes/no clinical indicators are optional: when absent they are
//! skipped. Every other mapped column, `Sex` included, is required and its
//! absence aborts the run with [`crate::error::EncodeError::MissingColumn`].
//!
//! # Unrecognised labels
//!
//! A label that is not in a column's table becomes a missing cell (an empty
//! field in the output). The run continues, the labels are logged at `warn`
//! level and counted in the [`EncodingReport`].
//!
//! # Example
//!
//! ```no_run
//! use heartcode::encoder::run_encode;
//! use std::path::Path;
//!
//! let report = run_encode(
//!     Path::new("cleaned_heart_data.csv"),
//!     Path::new("transformed_heart_data_to_numerical.csv"),
//! )?;
//! println!("{}", report.summary());
//! # Ok::<(), heartcode::error::EncodeError>(())
//! ```

pub mod inspect;
pub mod io;
pub mod mapping;
pub mod report;
pub mod rules;

pub use inspect::distinct_labels;
pub use io::{load_table, save_table};
pub use mapping::{apply_binary_mapping, apply_enum_mapping, apply_rule, encode_table, has_column};
pub use report::{ColumnOutcome, ColumnStatus, EncodingReport};
pub use rules::{Code, ColumnRule, Presence, heart_rules, rule_for};

use crate::error::Result;
use polars::prelude::DataFrame;
use std::path::Path;

/// Default input file name of the cleaning step's export.
pub const DEFAULT_INPUT: &str = "cleaned_heart_data.csv";
/// Default output file name.
pub const DEFAULT_OUTPUT: &str = "transformed_heart_data_to_numerical.csv";

/// Loads `input`, encodes it with [`heart_rules`] and writes `output`.
///
/// # Errors
///
/// Any [`crate::error::EncodeError`] from loading, encoding or saving. Nothing is written
/// if loading or encoding fails.
pub fn run_encode(input: &Path, output: &Path) -> Result<EncodingReport> {
    let mut df: DataFrame = load_table(input)?;
    let mut report = encode_table(&mut df, &heart_rules())?;
    save_table(&mut df, output)?;

    report.input = Some(input.to_path_buf());
    report.output = Some(output.to_path_buf());
    tracing::info!("{}", report.summary());
    Ok(report)
}
