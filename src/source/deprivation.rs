//! Child-deprivation indicator source
//!
//! Rows of every sex category are loaded; the Total-sex filter is applied by
//! the joiner.

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;

use super::{
    COUNTRY_ALIAS, ExtractionStats, ISO3_ALIAS, OBS_VALUE_ALIASES, SEX_ALIAS, SourceLoader,
    YEAR_ALIAS,
};
use crate::models::DeprivationRow;
use crate::schema::ColumnAlias;
use crate::schema::columns::{CHILD_DEPRIVATION, COUNTRY, ISO3, SEX, YEAR};
use crate::utils::arrow::{extract_f64, extract_string, extract_year};

const ALIASES: &[ColumnAlias] = &[
    COUNTRY_ALIAS,
    ISO3_ALIAS,
    YEAR_ALIAS,
    SEX_ALIAS,
    ColumnAlias::new(CHILD_DEPRIVATION, OBS_VALUE_ALIASES),
];

/// Get the canonical Arrow schema for deprivation data
#[must_use]
pub fn deprivation_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(COUNTRY, DataType::Utf8, false),
        Field::new(ISO3, DataType::Utf8, true),
        Field::new(YEAR, DataType::Utf8, false),
        Field::new(SEX, DataType::Utf8, false),
        Field::new(CHILD_DEPRIVATION, DataType::Utf8, false),
    ]))
}

/// Loader for the child-deprivation indicator
#[derive(Debug, Clone)]
pub struct DeprivationSource {
    schema: SchemaRef,
}

impl DeprivationSource {
    /// Logical name and file stem of the source
    pub const NAME: &'static str = "child_deprivation";

    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: deprivation_schema(),
        }
    }

    /// Convert harmonized batches into typed rows
    #[must_use]
    pub fn extract_rows(&self, batches: &[RecordBatch]) -> Vec<DeprivationRow> {
        let mut stats = ExtractionStats::default();
        let mut rows = Vec::new();

        for batch in batches {
            for row in 0..batch.num_rows() {
                stats.rows += 1;
                let Some(country) = extract_string(batch, row, COUNTRY) else {
                    stats.missing_country += 1;
                    continue;
                };
                let year = extract_year(batch, row, YEAR);
                let child_deprivation = extract_f64(batch, row, CHILD_DEPRIVATION);
                stats.unknown_year += usize::from(year.is_none());
                stats.unset_value += usize::from(child_deprivation.is_none());

                rows.push(DeprivationRow {
                    country,
                    iso3: extract_string(batch, row, ISO3),
                    year,
                    sex: extract_string(batch, row, SEX),
                    child_deprivation,
                });
            }
        }

        stats.log(Self::NAME);
        rows
    }
}

impl Default for DeprivationSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceLoader for DeprivationSource {
    fn get_source_name(&self) -> &'static str {
        Self::NAME
    }

    fn get_schema(&self) -> SchemaRef {
        self.schema.clone()
    }

    fn get_column_aliases(&self) -> &'static [ColumnAlias] {
        ALIASES
    }
}
