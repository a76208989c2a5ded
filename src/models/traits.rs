//! Arrow conversion for report tables

use arrow::datatypes::FieldRef;
use arrow::record_batch::RecordBatch;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_arrow::schema::{SchemaLike, TracingOptions};

use crate::error::Result;

/// A row type that can be exported as an Arrow table
///
/// The Arrow schema is traced from the type itself, so an empty table still
/// carries every column.
pub trait ArrowTable: Serialize + DeserializeOwned + Sized {
    /// Arrow fields of the table, in struct field order
    fn fields() -> Result<Vec<FieldRef>> {
        Ok(Vec::<FieldRef>::from_type::<Self>(
            TracingOptions::default().allow_null_fields(true),
        )?)
    }

    /// Convert rows to a `RecordBatch`
    fn to_record_batch(rows: &[Self]) -> Result<RecordBatch> {
        let fields = Self::fields()?;
        Ok(serde_arrow::to_record_batch(&fields, &rows)?)
    }

    /// Convert a `RecordBatch` back to rows
    fn from_record_batch(batch: &RecordBatch) -> Result<Vec<Self>> {
        Ok(serde_arrow::from_record_batch(batch)?)
    }
}
