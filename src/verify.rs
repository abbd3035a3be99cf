//! Verify command: check a materialized spine against the configured range.

use anyhow::{Context, Result, bail};
use chrono::Duration;
use tracing::info;

use timespine_io::read_date_column;

use crate::cli::VerifyArgs;
use crate::config;
use crate::convert;

/// Run the spine verification checks.
///
/// Reads back the `date_day` column of a materialized spine and checks the
/// properties that survive materialization: exact row count for the
/// configured range, ascending order, and day-by-day contiguity.
pub fn run(args: VerifyArgs) -> Result<()> {
    let toml_config = config::load(&args.config)?;
    let spine_config = convert::build_spine_config(&toml_config.spine)?;
    let expected = spine_config.validate()?;

    let dates = read_date_column(&args.input)
        .with_context(|| format!("failed to read spine: {}", args.input.display()))?;

    if dates.len() as i64 != expected {
        bail!(
            "row count mismatch: expected {expected} rows for {}..{}, found {}",
            spine_config.start_date(),
            spine_config.end_date(),
            dates.len()
        );
    }

    if let (Some(&first), Some(&last)) = (dates.first(), dates.last()) {
        if first != spine_config.start_date() {
            bail!(
                "first row is {first}, expected {}",
                spine_config.start_date()
            );
        }
        if last != spine_config.end_date() {
            bail!("last row is {last}, expected {}", spine_config.end_date());
        }
    }

    for pair in dates.windows(2) {
        if pair[1] != pair[0] + Duration::days(1) {
            bail!("spine is not contiguous: {} is followed by {}", pair[0], pair[1]);
        }
    }

    info!(n_rows = dates.len(), path = %args.input.display(), "spine verified");
    println!(
        "ok: {} rows, {}..{}, contiguous",
        dates.len(),
        spine_config.start_date(),
        spine_config.end_date()
    );
    Ok(())
}
