//! Country metadata source
//!
//! Wide table of country indicators; only life expectancy and crude birth
//! rate are used. Both indicator columns are optional: a dataset version
//! without them yields unset values rather than a failed run.

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;

use super::{COUNTRY_ALIAS, ExtractionStats, ISO3_ALIAS, SourceLoader, YEAR_ALIAS};
use crate::models::MetadataRow;
use crate::schema::ColumnAlias;
use crate::schema::columns::{COUNTRY, CRUDE_BIRTH_RATE, ISO3, LIFE_EXPECTANCY, YEAR};
use crate::utils::arrow::{extract_f64, extract_string, extract_year};

const ALIASES: &[ColumnAlias] = &[
    COUNTRY_ALIAS,
    ISO3_ALIAS,
    YEAR_ALIAS,
    ColumnAlias::new(
        LIFE_EXPECTANCY,
        &["life expectancy at birth, total (years)", "life_expectancy_at_birth"],
    ),
    ColumnAlias::new(
        CRUDE_BIRTH_RATE,
        &["birth rate, crude (per 1,000 people)", "birth_rate_crude"],
    ),
];

/// Get the canonical Arrow schema for country metadata
#[must_use]
pub fn metadata_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(COUNTRY, DataType::Utf8, false),
        Field::new(ISO3, DataType::Utf8, true),
        Field::new(YEAR, DataType::Utf8, false),
        Field::new(LIFE_EXPECTANCY, DataType::Utf8, true),
        Field::new(CRUDE_BIRTH_RATE, DataType::Utf8, true),
    ]))
}

/// Loader for the country metadata table
#[derive(Debug, Clone)]
pub struct MetadataSource {
    schema: SchemaRef,
}

impl MetadataSource {
    /// Logical name and file stem of the source
    pub const NAME: &'static str = "country_metadata";

    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: metadata_schema(),
        }
    }

    /// Convert harmonized batches into typed rows
    #[must_use]
    pub fn extract_rows(&self, batches: &[RecordBatch]) -> Vec<MetadataRow> {
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
                let life_expectancy = extract_f64(batch, row, LIFE_EXPECTANCY);
                let crude_birth_rate = extract_f64(batch, row, CRUDE_BIRTH_RATE);
                stats.unknown_year += usize::from(year.is_none());
                stats.unset_value += usize::from(life_expectancy.is_none());

                rows.push(MetadataRow {
                    country,
                    iso3: extract_string(batch, row, ISO3),
                    year,
                    life_expectancy,
                    crude_birth_rate,
                });
            }
        }

        stats.log(Self::NAME);
        rows
    }
}

impl Default for MetadataSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceLoader for MetadataSource {
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
