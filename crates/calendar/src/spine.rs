//! Full spine assembly: validate, enumerate, derive.

use crate::config::SpineConfig;
use crate::error::SpineError;
use crate::row::SpineRow;
use crate::sequence::date_sequence;

/// Builds the complete date spine for `config`.
///
/// Validation runs before any row is generated, so a capacity violation
/// produces no partial output. The result is ordered ascending by
/// `date_day`, one row per calendar day, and is a pure function of the
/// configuration: regenerating with the same config yields identical rows.
///
/// # Errors
///
/// Returns [`SpineError::CapacityExceeded`] if the configured range is
/// larger than the spine capacity, or [`SpineError::DateOutOfRange`] if a
/// derived date would leave the representable calendar range.
pub fn build_spine(config: &SpineConfig) -> Result<Vec<SpineRow>, SpineError> {
    let n_days = config.validate()?;
    let mut rows = Vec::with_capacity(n_days as usize);
    for date in date_sequence(config.start_date(), config.end_date()) {
        rows.push(SpineRow::derive(date, config.week_start())?);
    }
    Ok(rows)
}
