//! Low-level Parquet column building for the spine schema.

use std::path::Path;
use std::sync::Arc;

use arrow::array::{ArrayRef, Date32Array, Int32Array, RecordBatch, StringArray, UInt8Array, UInt16Array};
use arrow::datatypes::{DataType, Date32Type, Field, Schema};
use chrono::NaiveDate;
use parquet::arrow::ArrowWriter;
use parquet::file::properties::WriterProperties;

use timespine_calendar::SpineRow;

use crate::error::IoError;

/// Builds the Arrow schema for the spine table.
///
/// Column names and order are contractual: downstream consumers reference
/// the materialized table by these names.
pub(crate) fn build_schema() -> Schema {
    let date = |name: &str| Field::new(name, DataType::Date32, false);
    let u8_ = |name: &str| Field::new(name, DataType::UInt8, false);
    let text = |name: &str| Field::new(name, DataType::Utf8, false);

    Schema::new(vec![
        date("date_day"),
        date("prior_date_day"),
        date("next_date_day"),
        date("prior_year_date_day"),
        date("prior_year_over_year_date_day"),
        u8_("day_of_week"),
        u8_("day_of_week_iso"),
        text("day_of_week_name"),
        text("day_of_week_name_short"),
        u8_("day_of_month"),
        Field::new("day_of_year", DataType::UInt16, false),
        date("week_start_date"),
        date("week_end_date"),
        date("prior_year_week_start_date"),
        date("prior_year_week_end_date"),
        u8_("week_of_year"),
        date("iso_week_start_date"),
        date("iso_week_end_date"),
        u8_("iso_week_of_year"),
        u8_("prior_year_week_of_year"),
        u8_("month_of_year"),
        text("month_name"),
        text("month_name_short"),
        date("month_start_date"),
        date("month_end_date"),
        date("prior_year_month_start_date"),
        date("prior_year_month_end_date"),
        u8_("quarter_of_year"),
        date("quarter_start_date"),
        date("quarter_end_date"),
        Field::new("year_number", DataType::Int32, false),
        date("year_start_date"),
        date("year_end_date"),
    ])
}

fn date_col(rows: &[SpineRow], f: impl Fn(&SpineRow) -> NaiveDate) -> ArrayRef {
    let days: Vec<i32> = rows
        .iter()
        .map(|r| Date32Type::from_naive_date(f(r)))
        .collect();
    Arc::new(Date32Array::from(days))
}

fn u8_col(rows: &[SpineRow], f: impl Fn(&SpineRow) -> u8) -> ArrayRef {
    Arc::new(UInt8Array::from(rows.iter().map(f).collect::<Vec<_>>()))
}

fn text_col(rows: &[SpineRow], f: impl Fn(&SpineRow) -> &'static str) -> ArrayRef {
    Arc::new(StringArray::from(rows.iter().map(f).collect::<Vec<_>>()))
}

/// Converts a slice of spine rows into an Arrow [`RecordBatch`] matching
/// [`build_schema`].
pub(crate) fn rows_to_record_batch(
    rows: &[SpineRow],
    schema: &Schema,
) -> Result<RecordBatch, IoError> {
    let day_of_year: Vec<u16> = rows.iter().map(|r| r.day_of_year).collect();
    let year_number: Vec<i32> = rows.iter().map(|r| r.year_number).collect();

    let columns: Vec<ArrayRef> = vec![
        date_col(rows, |r| r.date_day),
        date_col(rows, |r| r.prior_date_day),
        date_col(rows, |r| r.next_date_day),
        date_col(rows, |r| r.prior_year_date_day),
        date_col(rows, |r| r.prior_year_over_year_date_day),
        u8_col(rows, |r| r.day_of_week),
        u8_col(rows, |r| r.day_of_week_iso),
        text_col(rows, |r| r.day_of_week_name),
        text_col(rows, |r| r.day_of_week_name_short),
        u8_col(rows, |r| r.day_of_month),
        Arc::new(UInt16Array::from(day_of_year)),
        date_col(rows, |r| r.week_start_date),
        date_col(rows, |r| r.week_end_date),
        date_col(rows, |r| r.prior_year_week_start_date),
        date_col(rows, |r| r.prior_year_week_end_date),
        u8_col(rows, |r| r.week_of_year),
        date_col(rows, |r| r.iso_week_start_date),
        date_col(rows, |r| r.iso_week_end_date),
        u8_col(rows, |r| r.iso_week_of_year),
        u8_col(rows, |r| r.prior_year_week_of_year),
        u8_col(rows, |r| r.month_of_year),
        text_col(rows, |r| r.month_name),
        text_col(rows, |r| r.month_name_short),
        date_col(rows, |r| r.month_start_date),
        date_col(rows, |r| r.month_end_date),
        date_col(rows, |r| r.prior_year_month_start_date),
        date_col(rows, |r| r.prior_year_month_end_date),
        u8_col(rows, |r| r.quarter_of_year),
        date_col(rows, |r| r.quarter_start_date),
        date_col(rows, |r| r.quarter_end_date),
        Arc::new(Int32Array::from(year_number)),
        date_col(rows, |r| r.year_start_date),
        date_col(rows, |r| r.year_end_date),
    ];

    RecordBatch::try_new(Arc::new(schema.clone()), columns).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })
}

/// Writes a sequence of [`RecordBatch`]es to a Parquet file at `path`,
/// replacing any existing file as a unit.
///
/// # Errors
///
/// Returns [`IoError::Parquet`] if file creation, batch writing, or file
/// finalisation fails.
pub(crate) fn write_batches(
    path: &Path,
    batches: &[RecordBatch],
    schema: &Schema,
    props: WriterProperties,
) -> Result<(), IoError> {
    let file = std::fs::File::create(path).map_err(|e| IoError::Parquet {
        reason: e.to_string(),
    })?;
    let mut writer = ArrowWriter::try_new(file, Arc::new(schema.clone()), Some(props))?;

    for batch in batches {
        writer.write(batch)?;
    }

    writer.close()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use timespine_calendar::WeekStart;

    fn sample_rows(n: usize) -> Vec<SpineRow> {
        let mut date = NaiveDate::from_ymd_opt(2024, 2, 27).unwrap();
        let mut rows = Vec::with_capacity(n);
        for _ in 0..n {
            rows.push(SpineRow::derive(date, WeekStart::IsoMonday).unwrap());
            date = date.succ_opt().unwrap();
        }
        rows
    }

    #[test]
    fn schema_has_contractual_columns() {
        let schema = build_schema();
        assert_eq!(schema.fields().len(), 33);
        assert_eq!(schema.field(0).name(), "date_day");
        assert_eq!(schema.field(0).data_type(), &DataType::Date32);
        assert_eq!(schema.field(10).name(), "day_of_year");
        assert_eq!(schema.field(32).name(), "year_end_date");
        // No nullable columns: every field is total over valid dates.
        assert!(schema.fields().iter().all(|f| !f.is_nullable()));
    }

    #[test]
    fn record_batch_shape() {
        let rows = sample_rows(4);
        let schema = build_schema();
        let batch = rows_to_record_batch(&rows, &schema).unwrap();
        assert_eq!(batch.num_rows(), 4);
        assert_eq!(batch.num_columns(), 33);
    }

    #[test]
    fn record_batch_empty_rows() {
        let schema = build_schema();
        let batch = rows_to_record_batch(&[], &schema).unwrap();
        assert_eq!(batch.num_rows(), 0);
        assert_eq!(batch.num_columns(), 33);
    }

    #[test]
    fn date32_round_trips_through_arrow() {
        let rows = sample_rows(3);
        let schema = build_schema();
        let batch = rows_to_record_batch(&rows, &schema).unwrap();
        let col = batch
            .column(0)
            .as_any()
            .downcast_ref::<Date32Array>()
            .unwrap();
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(Date32Type::to_naive_date(col.value(i)), row.date_day);
        }
    }
}
