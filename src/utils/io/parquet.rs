//! Parquet file operations
//!
//! Sources may be shipped as Parquet instead of CSV, and the exported tables
//! can optionally be mirrored to Parquet.

use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::record_batch::RecordBatch;
use parquet::arrow::ArrowWriter;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use super::DEFAULT_BATCH_SIZE;
use crate::error::Result;
use crate::error::util::{safe_create_file, safe_open_file};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Read a parquet file into Arrow record batches
///
/// # Arguments
/// * `path` - Path to the Parquet file
///
/// # Returns
/// A vector of `RecordBatch` objects with the file's own column types; a file
/// without rows gives one empty batch
pub fn read_parquet(path: &Path) -> Result<Vec<RecordBatch>> {
    log_operation_start("Reading parquet file", path);
    let start = Instant::now();

    let file = safe_open_file(path, "reading parquet input")?;
    let builder = ParquetRecordBatchReaderBuilder::try_new(file)?;
    let schema = Arc::clone(builder.schema());
    let reader = builder.with_batch_size(DEFAULT_BATCH_SIZE).build()?;

    let mut batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    if batches.is_empty() {
        batches.push(RecordBatch::new_empty(schema));
    }

    log_operation_complete(
        "read",
        path,
        batches.iter().map(RecordBatch::num_rows).sum(),
        Some(start.elapsed()),
    );
    Ok(batches)
}

/// Write a record batch to a parquet file
pub fn write_parquet(path: &Path, batch: &RecordBatch) -> Result<()> {
    let file = safe_create_file(path, "writing parquet output")?;
    let mut writer = ArrowWriter::try_new(file, batch.schema(), None)?;
    writer.write(batch)?;
    writer.close()?;
    log_operation_complete("wrote", path, batch.num_rows(), None);
    Ok(())
}
