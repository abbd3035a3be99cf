//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;

use timespine_calendar::{SpineConfig, WeekStart};
use timespine_io::{Compression, WriterConfig};

use crate::config::{IoToml, SpineToml};

/// Parses a `YYYY-MM-DD` date string.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid date {s:?} (expected YYYY-MM-DD)"))
}

/// Parses a week-start convention name string into the corresponding enum variant.
pub fn parse_week_start(s: &str) -> Result<WeekStart> {
    match s.to_lowercase().as_str() {
        "iso-monday" | "iso_monday" | "monday" => Ok(WeekStart::IsoMonday),
        "sunday" => Ok(WeekStart::Sunday),
        other => bail!("unknown week start convention: {other:?}"),
    }
}

/// Parses a compression algorithm name string into the corresponding enum variant.
pub fn parse_compression(s: &str) -> Result<Compression> {
    match s.to_lowercase().as_str() {
        "none" => Ok(Compression::None),
        "snappy" => Ok(Compression::Snappy),
        "zstd" => Ok(Compression::Zstd),
        other => bail!("unknown compression: {other:?}"),
    }
}

/// Builds a [`SpineConfig`] from the TOML spine configuration.
pub fn build_spine_config(spine: &SpineToml) -> Result<SpineConfig> {
    let start = parse_date(&spine.start_date).context("bad [spine].start_date")?;
    let end = parse_date(&spine.end_date).context("bad [spine].end_date")?;
    let week_start = parse_week_start(&spine.week_start).context("bad [spine].week_start")?;
    Ok(SpineConfig::default()
        .with_start_date(start)
        .with_end_date(end)
        .with_week_start(week_start))
}

/// Builds a [`WriterConfig`] from the TOML I/O configuration.
pub fn build_writer_config(io: &IoToml) -> Result<WriterConfig> {
    let compression = parse_compression(&io.compression)?;
    Ok(WriterConfig::default()
        .with_compression(compression)
        .with_row_group_size(io.row_group_size))
}
