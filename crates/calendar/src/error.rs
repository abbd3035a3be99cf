//! Error types for the timespine-calendar crate.

/// Error type for all fallible operations in the timespine-calendar crate.
///
/// Covers configuration validation (a requested range larger than the
/// spine's fixed capacity) and calendar arithmetic that would leave the
/// representable date range.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SpineError {
    /// Returned when the configured date range holds more days than the
    /// spine can enumerate.
    #[error("date range of {requested} days exceeds spine capacity of {capacity}")]
    CapacityExceeded {
        /// Number of days in the requested range.
        requested: i64,
        /// Maximum number of days the spine can hold.
        capacity: i64,
    },

    /// Returned when date arithmetic leaves the representable calendar range.
    #[error("calendar arithmetic out of range near year {year}")]
    DateOutOfRange {
        /// Year in which the arithmetic failed.
        year: i32,
    },
}
