use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level Timespine configuration.
#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct TimespineConfig {
    /// Spine date range and week convention.
    #[serde(default)]
    pub spine: SpineToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,
}

/// `[spine]` section: the date range and week convention.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpineToml {
    #[serde(default = "default_start_date")]
    pub start_date: String,
    #[serde(default = "default_end_date")]
    pub end_date: String,
    #[serde(default = "default_week_start")]
    pub week_start: String,
}

impl Default for SpineToml {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            end_date: default_end_date(),
            week_start: default_week_start(),
        }
    }
}

fn default_start_date() -> String {
    "2020-01-01".to_string()
}
fn default_end_date() -> String {
    "2030-12-31".to_string()
}
fn default_week_start() -> String {
    "iso-monday".to_string()
}

/// `[io]` section: output path and Parquet writer settings.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_output")]
    pub output: PathBuf,
    #[serde(default = "default_compression")]
    pub compression: String,
    #[serde(default = "default_row_group_size")]
    pub row_group_size: usize,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            output: default_output(),
            compression: default_compression(),
            row_group_size: default_row_group_size(),
        }
    }
}

fn default_output() -> PathBuf {
    PathBuf::from("metricflow_time_spine.parquet")
}
fn default_compression() -> String {
    "snappy".to_string()
}
fn default_row_group_size() -> usize {
    1_000_000
}

/// Loads the TOML configuration from `path`.
///
/// A missing file is not an error: every setting has a default, so the
/// built-in configuration is returned instead.
pub fn load(path: &Path) -> Result<TimespineConfig> {
    if !path.exists() {
        debug!(path = %path.display(), "config file not found, using defaults");
        return Ok(TimespineConfig::default());
    }
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse config: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let config = TimespineConfig::default();
        assert_eq!(config.spine.start_date, "2020-01-01");
        assert_eq!(config.spine.end_date, "2030-12-31");
        assert_eq!(config.spine.week_start, "iso-monday");
        assert_eq!(
            config.io.output,
            PathBuf::from("metricflow_time_spine.parquet")
        );
        assert_eq!(config.io.compression, "snappy");
        assert_eq!(config.io.row_group_size, 1_000_000);
    }

    #[test]
    fn parse_partial_toml() {
        let config: TimespineConfig = toml::from_str(
            r#"
            [spine]
            start_date = "2024-01-01"

            [io]
            compression = "zstd"
            "#,
        )
        .unwrap();
        assert_eq!(config.spine.start_date, "2024-01-01");
        assert_eq!(config.spine.end_date, "2030-12-31");
        assert_eq!(config.io.compression, "zstd");
        assert_eq!(config.io.row_group_size, 1_000_000);
    }

    #[test]
    fn parse_empty_toml() {
        let config: TimespineConfig = toml::from_str("").unwrap();
        assert_eq!(config.spine.week_start, "iso-monday");
    }

    #[test]
    fn unknown_field_rejected() {
        let result: Result<TimespineConfig, _> = toml::from_str(
            r#"
            [spine]
            strat_date = "2024-01-01"
            "#,
        );
        assert!(result.is_err());
    }
}
