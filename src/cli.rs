use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Timespine calendar date-spine generator.
#[derive(Parser)]
#[command(
    name = "timespine",
    version,
    about = "Calendar date-spine generator for time-series analytics"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Build the date spine and materialize it to Parquet.
    Generate(GenerateArgs),
    /// Check a materialized spine against the configured date range.
    Verify(VerifyArgs),
}

/// Arguments for the `generate` subcommand.
#[derive(clap::Args)]
pub struct GenerateArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "timespine.toml")]
    pub config: PathBuf,

    /// Override output Parquet path from config.
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Override spine start date (YYYY-MM-DD) from config.
    #[arg(long)]
    pub start_date: Option<String>,

    /// Override spine end date (YYYY-MM-DD) from config.
    #[arg(long)]
    pub end_date: Option<String>,
}

/// Arguments for the `verify` subcommand.
#[derive(clap::Args)]
pub struct VerifyArgs {
    /// Path to TOML configuration file.
    #[arg(short, long, default_value = "timespine.toml")]
    pub config: PathBuf,

    /// Path to the materialized spine Parquet file.
    #[arg(short, long)]
    pub input: PathBuf,
}
