//! # timespine-calendar
//!
//! Pure date arithmetic for building a calendar date spine: one row per
//! calendar day over a configured range, each row enriched with derived
//! week, month, quarter, and year attributes.
//!
//! ## Architecture
//!
//! ```mermaid
//! graph LR
//!     A["SpineConfig"] -->|".validate()"| B["row count"]
//!     A -->|"build_spine()"| C["Vec of SpineRow"]
//!     D["date_sequence()"] -->|"one NaiveDate per day"| C
//!     E["SpineRow::derive()"] -->|"calendar attributes"| C
//!     F["WeekStart"] -->|"week boundaries / numbering"| E
//! ```
//!
//! ## Quick Start
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use timespine_calendar::{SpineConfig, build_spine};
//!
//! let config = SpineConfig::default()
//!     .with_start_date(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
//!     .with_end_date(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap());
//!
//! let rows = build_spine(&config).unwrap();
//! assert_eq!(rows.len(), 366); // 2024 is a leap year
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `config` | Date range configuration and capacity validation |
//! | `week` | Week-start conventions and week numbering |
//! | `sequence` | Contiguous date sequence generation |
//! | `row` | Per-day calendar attribute derivation |
//! | `spine` | Full spine assembly |
//! | `error` | Error types |

mod config;
mod error;
mod row;
mod sequence;
mod spine;
mod week;

pub use config::{SPINE_CAPACITY_DAYS, SpineConfig};
pub use error::SpineError;
pub use row::SpineRow;
pub use sequence::{date_sequence, days_in_range};
pub use spine::build_spine;
pub use week::WeekStart;
