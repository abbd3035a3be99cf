//! # timespine-io
//!
//! Materialize the date spine to Parquet and read it back for verification.
//! The output table fully replaces any prior version on each run; column
//! names follow the spine row schema so downstream consumers can reference
//! the table as `metricflow_time_spine`.

mod error;
mod parquet_read;
mod parquet_write;
mod writer;

pub use error::IoError;
pub use parquet_read::read_date_column;
pub use writer::{Compression, WriterConfig, write_parquet};
