//! Generate command: build the date spine and materialize it to Parquet.

use anyhow::{Context, Result};
use tracing::info;

use timespine_calendar::build_spine;
use timespine_io::write_parquet;

use crate::cli::GenerateArgs;
use crate::config;
use crate::convert;

/// Run the spine generation pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    // 1. Load config and apply CLI overrides
    let mut toml_config = config::load(&args.config)?;
    if let Some(s) = args.start_date {
        toml_config.spine.start_date = s;
    }
    if let Some(e) = args.end_date {
        toml_config.spine.end_date = e;
    }
    let output = args.output.unwrap_or_else(|| toml_config.io.output.clone());

    // 2. Build crate configs from TOML
    let spine_config = convert::build_spine_config(&toml_config.spine)?;
    let writer_config = convert::build_writer_config(&toml_config.io)?;

    // 3. Build the spine in memory
    info!(
        start = %spine_config.start_date(),
        end = %spine_config.end_date(),
        "building date spine"
    );
    let rows = build_spine(&spine_config).context("spine generation failed")?;
    info!(n_rows = rows.len(), "date spine built");

    // 4. Materialize (full replace)
    write_parquet(&output, &rows, &writer_config)
        .with_context(|| format!("failed to write Parquet: {}", output.display()))?;
    info!(path = %output.display(), "spine written");

    Ok(())
}
