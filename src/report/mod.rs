//! Report outputs
//!
//! Exports the scored records, the country summary and the year trend as CSV
//! (optionally Parquet) plus a JSON manifest of the run.

pub mod export;
pub mod manifest;

pub use export::{COUNTRY_TABLE, ExportFormat, RECORDS_TABLE, TREND_TABLE, report_tables, write_report};
pub use manifest::{MANIFEST_FILE, ReportManifest};
