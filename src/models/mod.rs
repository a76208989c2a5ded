//! Domain models for the mortality report
//!
//! Typed rows for each input source, the joined and scored country-year
//! records, and the per-country and per-year summaries.

pub mod record;
pub mod source_rows;
pub mod summary;
pub mod traits;

// Re-export commonly used types
pub use record::{CountryYearRecord, ScoredRecord};
pub use source_rows::{DeprivationRow, MetadataRow, PopulationRow};
pub use summary::{CountrySummary, YearSummary};
pub use traits::ArrowTable;
