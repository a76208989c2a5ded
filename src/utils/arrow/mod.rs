//! Arrow data handling utilities
//!
//! Loaded tables are kept as all-Utf8 record batches; these helpers find
//! columns and turn individual cells into typed values.

pub mod array_utils;
pub mod extractors;

// Re-export commonly used functions for convenience
pub use array_utils::{cast_batch_to_utf8, rename_columns};
pub use extractors::{extract_f64, extract_string, extract_year};
