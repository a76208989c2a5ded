//! Field extraction utilities for Arrow record batches
//!
//! Every loaded column is `Utf8`; these functions read one cell and parse it
//! into the type the pipeline needs. Absent columns, nulls, blanks and
//! unparseable text all come back as `None`.

use arrow::array::{Array, StringArray};
use arrow::record_batch::RecordBatch;

use crate::schema::{parse_value, parse_year};

fn string_cell<'a>(batch: &'a RecordBatch, row: usize, column_name: &str) -> Option<&'a str> {
    let array = batch
        .column_by_name(column_name)?
        .as_any()
        .downcast_ref::<StringArray>()?;

    if row < array.len() && !array.is_null(row) {
        let value = array.value(row).trim();
        if !value.is_empty() {
            return Some(value);
        }
    }
    None
}

/// Extract a trimmed, non-empty string value
///
/// # Arguments
///
/// * `batch` - The record batch to extract from
/// * `row` - The row index
/// * `column_name` - The name of the column
#[must_use]
pub fn extract_string(batch: &RecordBatch, row: usize, column_name: &str) -> Option<String> {
    string_cell(batch, row, column_name).map(str::to_string)
}

/// Extract a year, `None` when the cell is not a whole number
#[must_use]
pub fn extract_year(batch: &RecordBatch, row: usize, column_name: &str) -> Option<i32> {
    string_cell(batch, row, column_name).and_then(parse_year)
}

/// Extract a finite floating point value
#[must_use]
pub fn extract_f64(batch: &RecordBatch, row: usize, column_name: &str) -> Option<f64> {
    string_cell(batch, row, column_name).and_then(parse_value)
}
