//! Utilities for working with Arrow arrays.
//!
//! Both CSV and Parquet inputs are normalized to record batches whose columns
//! are all `Utf8`, so the rest of the pipeline parses cell text itself.

use std::sync::Arc;

use arrow::array::ArrayRef;
use arrow::compute::kernels::cast::cast;
use arrow::record_batch::RecordBatch;
use arrow_schema::{DataType, Field, Schema};

use crate::error::Result;

/// Cast every column of a batch to `Utf8`
///
/// Column names and nullability are kept; values keep their textual form, so
/// a Parquet `Int64` year and a CSV `"2015"` look the same downstream.
pub fn cast_batch_to_utf8(batch: &RecordBatch) -> Result<RecordBatch> {
    let schema = batch.schema();
    if schema.fields().iter().all(|f| f.data_type() == &DataType::Utf8) {
        return Ok(batch.clone());
    }

    let fields: Vec<Field> = schema
        .fields()
        .iter()
        .map(|f| Field::new(f.name(), DataType::Utf8, true))
        .collect();

    let columns = batch
        .columns()
        .iter()
        .map(|column| {
            if column.data_type() == &DataType::Utf8 {
                Ok(Arc::clone(column))
            } else {
                cast(column, &DataType::Utf8)
            }
        })
        .collect::<std::result::Result<Vec<ArrayRef>, _>>()?;

    Ok(RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?)
}

/// Rename the columns of a batch without touching the data
///
/// `rename` is called with every column name and returns the new name.
pub fn rename_columns<F>(batch: &RecordBatch, rename: F) -> Result<RecordBatch>
where
    F: Fn(&str) -> String,
{
    let schema = batch.schema();
    let fields: Vec<Field> = schema
        .fields()
        .iter()
        .map(|f| f.as_ref().clone().with_name(rename(f.name())))
        .collect();

    Ok(RecordBatch::try_new(
        Arc::new(Schema::new(fields)),
        batch.columns().to_vec(),
    )?)
}
