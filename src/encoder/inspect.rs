use crate::error::{EncodeError, Result};
use polars::prelude::*;
use std::collections::HashSet;

/// Distinct values of `column` in first-seen order; `None` is a missing cell.
///
/// Useful for checking a new export's vocabulary against the rule table
/// before encoding it.
///
/// # Errors
///
/// Returns [`EncodeError::MissingColumn`] if `column` is absent.
pub fn distinct_labels(df: &DataFrame, column: &str) -> Result<Vec<Option<String>>> {
    let values = df
        .column(column)
        .map_err(|_| EncodeError::MissingColumn(column.to_owned()))?
        .as_materialized_series()
        .cast(&DataType::String)?;

    let mut seen = HashSet::new();
    let mut labels = Vec::new();
    for cell in values.str()? {
        if seen.insert(cell) {
            labels.push(cell.map(str::to_owned));
        }
    }
    Ok(labels)
}
