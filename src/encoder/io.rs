use crate::error::{EncodeError, Result};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// OS-level failures while reading stay I/O errors; the rest are parse failures.
fn read_error(path: &Path, err: PolarsError) -> EncodeError {
    match err {
        PolarsError::IO { error, .. } => {
            EncodeError::io(path, std::io::Error::new(error.kind(), error.to_string()))
        }
        PolarsError::Context { error, .. } => read_error(path, *error),
        other => EncodeError::Format(format!("{}: {other}", path.display())),
    }
}

/// Reads a comma-separated file with a header row.
///
/// Schema inference is disabled, so every column comes back as text and
/// columns without a rule are written out exactly as they were read. Empty
/// fields are read as missing.
///
/// # Errors
///
/// - [`EncodeError::Io`] if the file cannot be opened or read.
/// - [`EncodeError::Format`] if the content is not valid CSV.
pub fn load_table(path: &Path) -> Result<DataFrame> {
    let file = File::open(path).map_err(|source| EncodeError::io(path, source))?;

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(file)
        .finish()
        .map_err(|e| read_error(path, e))?;

    tracing::info!(
        "Loaded {} ({} rows, {} columns)",
        path.display(),
        df.height(),
        df.width()
    );
    Ok(df)
}

/// Writes `df` as CSV with a header row and no index column.
///
/// Missing cells are written as empty fields.
///
/// # Errors
///
/// Returns [`EncodeError::Io`] if the file cannot be created or written.
pub fn save_table(df: &mut DataFrame, path: &Path) -> Result<()> {
    let mut file = File::create(path).map_err(|source| EncodeError::io(path, source))?;

    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(df)
        .map_err(|e| EncodeError::io(path, std::io::Error::other(e)))?;
    file.sync_all()
        .map_err(|source| EncodeError::io(path, source))?;

    tracing::info!("Saved {} ({} rows)", path.display(), df.height());
    Ok(())
}
