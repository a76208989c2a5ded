//! IO utilities for file operations
//!
//! Reading and writing the tabular formats the report understands.

pub mod csv;
pub mod parquet;

/// Default batch size for reading tabular files
pub const DEFAULT_BATCH_SIZE: usize = 16384;

// Re-export commonly used functions for convenience
pub use csv::{read_csv, write_csv};
pub use parquet::{read_parquet, write_parquet};
