//! CSV file operations
//!
//! Input CSV files are read with a header row and every column typed as
//! `Utf8`; value parsing happens later in the normalizer so that one bad cell
//! never fails a whole file.

use std::io::Seek;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use arrow::csv::reader::Format;
use arrow::csv::{ReaderBuilder, WriterBuilder};
use arrow::record_batch::RecordBatch;
use arrow_schema::{DataType, Field, Schema};

use super::DEFAULT_BATCH_SIZE;
use crate::error::util::{safe_create_file, safe_open_file};
use crate::error::{ReportError, Result};
use crate::utils::logging::{log_operation_complete, log_operation_start};

/// Read a delimited text file with a header row into `Utf8` record batches
///
/// # Arguments
/// * `path` - Path to the CSV file
///
/// # Returns
/// A vector of `RecordBatch` objects, all sharing one all-`Utf8` schema;
/// never empty, a file without data rows gives one empty batch
pub fn read_csv(path: &Path) -> Result<Vec<RecordBatch>> {
    log_operation_start("Reading CSV file", path);
    let start = Instant::now();

    let mut file = safe_open_file(path, "reading CSV input")?;
    let format = Format::default().with_header(true);
    let (inferred, _) = format.infer_schema(&mut file, Some(1))?;
    file.rewind()
        .map_err(|e| ReportError::io("Failed to rewind CSV file", path, e))?;

    let schema = Schema::new(
        inferred
            .fields()
            .iter()
            .map(|f| Field::new(f.name(), DataType::Utf8, true))
            .collect::<Vec<_>>(),
    );

    let schema = Arc::new(schema);
    let reader = ReaderBuilder::new(Arc::clone(&schema))
        .with_header(true)
        .with_batch_size(DEFAULT_BATCH_SIZE)
        .build(file)?;

    let mut batches = reader.collect::<std::result::Result<Vec<_>, _>>()?;
    // A header-only file still yields its columns
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

/// Write a record batch as CSV with a header row
pub fn write_csv(path: &Path, batch: &RecordBatch) -> Result<()> {
    let file = safe_create_file(path, "writing CSV output")?;
    let mut writer = WriterBuilder::new().with_header(true).build(file);
    writer.write(batch)?;
    log_operation_complete("wrote", path, batch.num_rows(), None);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use arrow::array::{Array, StringArray};
    use std::fs;

    #[test]
    fn test_read_csv_all_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("input.csv");
        fs::write(
            &path,
            "country,TIME_PERIOD,OBS_VALUE\nChad,2015,12.5\n\"Congo, Rep.\",x,\n",
        )
        .unwrap();

        let batches = read_csv(&path).unwrap();
        assert_eq!(batches.iter().map(RecordBatch::num_rows).sum::<usize>(), 2);

        let batch = &batches[0];
        for field in batch.schema().fields() {
            assert_eq!(field.data_type(), &DataType::Utf8);
        }
        let countries = batch
            .column_by_name("country")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(countries.value(1), "Congo, Rep.");
        let years = batch
            .column_by_name("TIME_PERIOD")
            .unwrap()
            .as_any()
            .downcast_ref::<StringArray>()
            .unwrap();
        assert_eq!(years.value(1), "x");
    }

    #[test]
    fn test_header_only_csv_keeps_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");
        fs::write(&path, "country,year\n").unwrap();

        let batches = read_csv(&path).unwrap();
        assert_eq!(batches.len(), 1);
        assert_eq!(batches[0].num_rows(), 0);
        assert!(batches[0].schema().index_of("year").is_ok());
    }

    #[test]
    fn test_read_csv_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_csv(&dir.path().join("absent.csv")).is_err());
    }
}
