//! Low-level Parquet reading: extract the spine's date column.

use std::path::Path;

use arrow::array::{AsArray, RecordBatch};
use arrow::datatypes::Date32Type;
use chrono::NaiveDate;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::IoError;

/// Reads all record batches from a Parquet file.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] if the file does not exist, or
/// [`IoError::Parquet`] if the file cannot be opened or read.
fn read_batches(path: &Path) -> Result<Vec<RecordBatch>, IoError> {
    if !path.exists() {
        return Err(IoError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = std::fs::File::open(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;

    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let reader = builder.build()?;

    reader
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| IoError::Parquet {
            reason: e.to_string(),
        })
}

/// Reads the `date_day` column of a materialized spine.
///
/// Used by verification: the remaining columns are pure functions of
/// `date_day`, so the date column alone carries the ordering, contiguity,
/// and row-count contract.
///
/// # Errors
///
/// Returns [`IoError::FileNotFound`] or [`IoError::Parquet`] for file-level
/// failures, or [`IoError::BadColumn`] if `date_day` is absent or not a
/// Date32 column.
pub fn read_date_column(path: &Path) -> Result<Vec<NaiveDate>, IoError> {
    let batches = read_batches(path)?;

    let mut dates = Vec::new();
    for batch in &batches {
        let index =
            batch
                .schema()
                .index_of("date_day")
                .map_err(|_| IoError::BadColumn {
                    name: "date_day".to_string(),
                    reason: "not present in schema".to_string(),
                })?;
        let column = batch
            .column(index)
            .as_primitive_opt::<Date32Type>()
            .ok_or_else(|| IoError::BadColumn {
                name: "date_day".to_string(),
                reason: format!("expected Date32, got {}", batch.column(index).data_type()),
            })?;
        dates.extend(column.values().iter().map(|&d| Date32Type::to_naive_date(d)));
    }
    Ok(dates)
}
