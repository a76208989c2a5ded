//! Schema harmonization and value parsing for the input sources.
//!
//! Dataset versions disagree on header spelling (`TIME_PERIOD` vs `year`,
//! `OBS_VALUE` vs a named indicator). The normalizer maps every known alias
//! to one canonical column name and parses cell text into typed values.

pub mod columns;
pub mod harmonize;
pub mod parse;

// Re-export the main harmonization types and functions for easier access
pub use harmonize::{ColumnAlias, harmonize_batch, harmonize_names, normalize_header};
pub use parse::{parse_value, parse_year};
