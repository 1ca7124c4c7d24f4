use super::report::{ColumnOutcome, ColumnStatus, EncodingReport};
use super::rules::{Code, ColumnRule, Presence};
use crate::error::{EncodeError, Result};
use polars::prelude::*;
use std::collections::{BTreeMap, HashMap};

pub fn has_column(df: &DataFrame, column: &str) -> bool {
    df.get_column_index(column).is_some()
}

/// Replaces every cell of `column` with the code of its label.
///
/// Cells that match no label, and cells that were already missing, become
/// null. The column is cast to text first, so a column that was already
/// numeric comes out entirely null rather than failing.
fn map_column(df: &mut DataFrame, column: &str, labels: &[(&str, Code)]) -> Result<ColumnOutcome> {
    let values = df
        .column(column)
        .map_err(|_| EncodeError::MissingColumn(column.to_owned()))?
        .as_materialized_series()
        .cast(&DataType::String)?;
    let values = values.str()?;

    let lookup: HashMap<&str, Code> = labels.iter().copied().collect();
    let mut unmapped_labels: BTreeMap<String, usize> = BTreeMap::new();

    let codes: Int32Chunked = values
        .into_iter()
        .map(|cell| {
            let label = cell?;
            let code = lookup.get(label).copied();
            if code.is_none() {
                *unmapped_labels.entry(label.to_owned()).or_default() += 1;
            }
            code
        })
        .collect();
    let rows = codes.len();

    df.replace(column, codes.with_name(column.into()).into_series())?;

    let unmapped: usize = unmapped_labels.values().sum();
    if unmapped > 0 {
        tracing::warn!(
            "{column}: {unmapped} of {rows} cells had unrecognised labels and are now missing: {unmapped_labels:?}"
        );
    }
    tracing::info!("Encoded {column} ({rows} rows)");

    Ok(ColumnOutcome {
        column: column.to_owned(),
        status: ColumnStatus::Encoded,
        rows,
        unmapped,
        unmapped_labels,
    })
}

/// Maps `true_label` to 1 and `false_label` to 0 in `column`.
///
/// An absent column is skipped, not an error.
///
/// # Errors
///
/// Returns [`EncodeError::Format`] if polars cannot rebuild the column.
pub fn apply_binary_mapping(
    df: &mut DataFrame,
    column: &str,
    true_label: &str,
    false_label: &str,
) -> Result<ColumnOutcome> {
    if !has_column(df, column) {
        tracing::debug!("Skipping {column}: not present in input");
        return Ok(ColumnOutcome::skipped(column));
    }
    map_column(df, column, &[(true_label, 1), (false_label, 0)])
}

/// Maps each known label in `column` to its code.
///
/// # Errors
///
/// Returns [`EncodeError::MissingColumn`] if `column` is absent.
pub fn apply_enum_mapping(
    df: &mut DataFrame,
    column: &str,
    labels: &[(&str, Code)],
) -> Result<ColumnOutcome> {
    map_column(df, column, labels)
}

/// Applies one rule, honouring its presence policy.
///
/// Optional yes/no rules go through [`apply_binary_mapping`]; everything
/// else, `Sex` included, goes through [`apply_enum_mapping`].
///
/// # Errors
///
/// Returns [`EncodeError::MissingColumn`] for an absent required column.
pub fn apply_rule(df: &mut DataFrame, rule: &ColumnRule) -> Result<ColumnOutcome> {
    if rule.presence == Presence::Optional
        && let Some((true_label, false_label)) = rule.binary_labels()
    {
        return apply_binary_mapping(df, rule.column, true_label, false_label);
    }
    if rule.presence == Presence::Optional && !has_column(df, rule.column) {
        tracing::debug!("Skipping {}: optional column not present", rule.column);
        return Ok(ColumnOutcome::skipped(rule.column));
    }
    apply_enum_mapping(df, rule.column, rule.labels)
}

/// Applies `rules` in order to `df`, in place.
///
/// The first missing required column aborts the pass; columns encoded
/// before it stay encoded in `df`.
///
/// # Errors
///
/// Returns [`EncodeError::MissingColumn`] if a required column is absent.
pub fn encode_table(df: &mut DataFrame, rules: &[ColumnRule]) -> Result<EncodingReport> {
    let mut outcomes = Vec::with_capacity(rules.len());
    for rule in rules {
        outcomes.push(apply_rule(df, rule)?);
    }
    Ok(EncodingReport::new(df.height(), df.width(), outcomes))
}
