//! Utility modules for the report pipeline
//!
//! - `arrow`: column lookup and typed value extraction from record batches
//! - `io`: CSV and Parquet reading/writing
//! - `logging`: log helpers, progress spinners and console summaries

pub mod arrow;
pub mod io;
pub mod logging;

pub use io::DEFAULT_BATCH_SIZE;
