//! Child mortality proxy report
//!
//! Loads child population, child deprivation and country indicator tables,
//! derives a bounded mortality proxy per country-year, aggregates it per
//! country and per year, and exports the resulting tables.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod report;
pub mod schema;
pub mod source;
pub mod utils;

// Core types
pub use algorithm::mortality::{MortalityReport, ReportBuilder};
pub use config::ReportConfig;
pub use error::{ReportError, Result};

// Models
pub use models::{CountrySummary, CountryYearRecord, ScoredRecord, YearSummary};

// Sources
pub use source::{SourceLoader, SourceTables, load_all_sources, source_from_name};

// Outputs
pub use report::write_report;

// Arrow types
pub use arrow::record_batch::RecordBatch;
