//! Population-under-5 indicator source

use std::sync::Arc;

use arrow::datatypes::{DataType, Field, Schema, SchemaRef};
use arrow::record_batch::RecordBatch;

use super::{COUNTRY_ALIAS, ExtractionStats, ISO3_ALIAS, OBS_VALUE_ALIASES, SourceLoader, YEAR_ALIAS};
use crate::models::PopulationRow;
use crate::schema::ColumnAlias;
use crate::schema::columns::{COUNTRY, ISO3, POPULATION_UNDER5, YEAR};
use crate::utils::arrow::{extract_f64, extract_string, extract_year};

const ALIASES: &[ColumnAlias] = &[
    COUNTRY_ALIAS,
    ISO3_ALIAS,
    YEAR_ALIAS,
    ColumnAlias::new(POPULATION_UNDER5, OBS_VALUE_ALIASES),
];

/// Get the canonical Arrow schema for population data
#[must_use]
pub fn population_schema() -> SchemaRef {
    Arc::new(Schema::new(vec![
        Field::new(COUNTRY, DataType::Utf8, false),
        Field::new(ISO3, DataType::Utf8, true),
        Field::new(YEAR, DataType::Utf8, false),
        Field::new(POPULATION_UNDER5, DataType::Utf8, false),
    ]))
}

/// Loader for the population-under-5 indicator
#[derive(Debug, Clone)]
pub struct PopulationSource {
    schema: SchemaRef,
}

impl PopulationSource {
    /// Logical name and file stem of the source
    pub const NAME: &'static str = "population_under5";

    #[must_use]
    pub fn new() -> Self {
        Self {
            schema: population_schema(),
        }
    }

    /// Convert harmonized batches into typed rows
    #[must_use]
    pub fn extract_rows(&self, batches: &[RecordBatch]) -> Vec<PopulationRow> {
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
                let population_under5 = extract_f64(batch, row, POPULATION_UNDER5);
                stats.unknown_year += usize::from(year.is_none());
                stats.unset_value += usize::from(population_under5.is_none());

                rows.push(PopulationRow {
                    country,
                    iso3: extract_string(batch, row, ISO3),
                    year,
                    population_under5,
                });
            }
        }

        stats.log(Self::NAME);
        rows
    }
}

impl Default for PopulationSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceLoader for PopulationSource {
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
