//! Input sources of the mortality report
//!
//! The report reads three tables from one data directory, each under a fixed
//! logical name:
//! - `population_under5`: population under age five per country and year
//! - `child_deprivation`: child deprivation percentage per country, year and sex
//! - `country_metadata`: country indicators (life expectancy, crude birth rate)
//!
//! Each table is looked up as `<name>.csv` first and `<name>.parquet` second.
//! A missing table aborts the run before anything is read or written.

pub mod deprivation;
pub mod factory;
pub mod metadata;
pub mod population;

use std::path::{Path, PathBuf};

use arrow::datatypes::SchemaRef;
use arrow::record_batch::RecordBatch;
use log::{info, warn};

use crate::error::util::validate_directory;
use crate::error::{ReportError, Result};
use crate::models::{DeprivationRow, MetadataRow, PopulationRow};
use crate::schema::columns::{COUNTRY, ISO3, SEX, YEAR};
use crate::schema::{ColumnAlias, harmonize_batch};
use crate::utils::arrow::cast_batch_to_utf8;
use crate::utils::io::{read_csv, read_parquet};
use crate::utils::logging::{create_spinner, finish_and_clear};

pub use deprivation::DeprivationSource;
pub use factory::{SOURCE_NAMES, source_from_name};
pub use metadata::MetadataSource;
pub use population::PopulationSource;

/// Header spellings of the country name column
pub const COUNTRY_ALIAS: ColumnAlias = ColumnAlias::new(
    COUNTRY,
    &[
        "country",
        "country name",
        "country_name",
        "geographic area",
        "ref_area:geographic area",
    ],
);

/// Header spellings of the ISO alpha-3 column
pub const ISO3_ALIAS: ColumnAlias = ColumnAlias::new(
    ISO3,
    &[
        "iso3",
        "iso_3",
        "iso3_code",
        "iso code",
        "iso_code",
        "iso alpha-3",
        "iso_alpha3",
        "country code",
        "country_code",
        "alpha_3_code",
        "alpha_3",
    ],
);

/// Header spellings of the year column, including `time_period`
pub const YEAR_ALIAS: ColumnAlias = ColumnAlias::new(
    YEAR,
    &["year", "time_period", "time period", "time_period:time period", "time"],
);

/// Header spellings of the sex category column
pub const SEX_ALIAS: ColumnAlias = ColumnAlias::new(SEX, &["sex", "sex:sex"]);

/// Header spellings of the generic observation value column
pub const OBS_VALUE_ALIASES: &[&str] = &[
    "obs_value",
    "obs_value:observation value",
    "observation value",
    "value",
];

/// File formats a source can be stored in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Csv,
    Parquet,
}

/// A located source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub format: SourceFormat,
}

/// Base trait for source loaders
pub trait SourceLoader: Send + Sync {
    /// Logical name of the source
    fn get_source_name(&self) -> &'static str;

    /// File stem the source is stored under
    fn get_file_stem(&self) -> &'static str {
        self.get_source_name()
    }

    /// Canonical schema after harmonization
    ///
    /// Non-nullable fields are required columns; nullable fields are optional.
    fn get_schema(&self) -> SchemaRef;

    /// Column aliases used to harmonize headers
    fn get_column_aliases(&self) -> &'static [ColumnAlias];

    /// Find the source file in the data directory
    fn locate(&self, data_dir: &Path) -> Result<SourceFile> {
        let stem = self.get_file_stem();
        let csv = data_dir.join(format!("{stem}.csv"));
        if csv.is_file() {
            return Ok(SourceFile {
                path: csv,
                format: SourceFormat::Csv,
            });
        }

        let parquet = data_dir.join(format!("{stem}.parquet"));
        if parquet.is_file() {
            return Ok(SourceFile {
                path: parquet,
                format: SourceFormat::Parquet,
            });
        }

        Err(ReportError::SourceNotFound {
            source_name: self.get_source_name().to_string(),
            path: csv,
        })
    }

    /// Load the source into harmonized, all-`Utf8` record batches
    fn load(&self, data_dir: &Path) -> Result<Vec<RecordBatch>> {
        let name = self.get_source_name();
        let file = self.locate(data_dir)?;

        let spinner = create_spinner(Some(&format!("Loading {name}")));
        let raw = match file.format {
            SourceFormat::Csv => read_csv(&file.path),
            SourceFormat::Parquet => read_parquet(&file.path),
        };
        finish_and_clear(&spinner);

        let batches = raw?
            .iter()
            .map(|batch| {
                let batch = cast_batch_to_utf8(batch)?;
                harmonize_batch(&batch, self.get_column_aliases())
            })
            .collect::<Result<Vec<_>>>()?;

        self.validate_columns(&batches)?;
        Ok(batches)
    }

    /// Check required columns are present and report absent optional ones
    fn validate_columns(&self, batches: &[RecordBatch]) -> Result<()> {
        let name = self.get_source_name();
        let Some(first) = batches.first() else {
            return Err(ReportError::Validation(format!(
                "Source '{name}' has no header row"
            )));
        };
        if batches.iter().all(|b| b.num_rows() == 0) {
            warn!("Source '{name}' contains no rows");
        }

        let loaded = first.schema();
        for field in self.get_schema().fields() {
            if loaded.index_of(field.name()).is_ok() {
                continue;
            }
            if field.is_nullable() {
                warn!(
                    "Optional column '{}' not found in source '{name}'; values left unset",
                    field.name()
                );
            } else {
                return Err(ReportError::column_not_found(name, field.name()));
            }
        }
        Ok(())
    }
}

/// Per-source counters of recovered cell problems
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionStats {
    /// Rows read from the source
    pub rows: usize,
    /// Rows dropped because the country cell was blank
    pub missing_country: usize,
    /// Rows kept with an unknown year
    pub unknown_year: usize,
    /// Rows kept with an unset observation value
    pub unset_value: usize,
}

impl ExtractionStats {
    /// Log the counters once for a source
    pub fn log(&self, source_name: &str) {
        info!("Extracted {} rows from source '{source_name}'", self.rows);
        if self.missing_country > 0 {
            warn!(
                "Dropped {} rows without a country from source '{source_name}'",
                self.missing_country
            );
        }
        if self.unknown_year > 0 {
            warn!(
                "{} rows in source '{source_name}' have a year that does not parse; kept as unknown year",
                self.unknown_year
            );
        }
        if self.unset_value > 0 {
            warn!(
                "{} rows in source '{source_name}' have an unset observation value",
                self.unset_value
            );
        }
    }
}

/// The three input tables as typed rows
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub population: Vec<PopulationRow>,
    pub deprivation: Vec<DeprivationRow>,
    pub metadata: Vec<MetadataRow>,
}

/// Load all three sources from a data directory
///
/// Every source is located before any of them is read, so a missing source
/// fails the run without partial work.
pub fn load_all_sources(data_dir: &Path) -> Result<SourceTables> {
    let population = PopulationSource::new();
    let deprivation = DeprivationSource::new();
    let metadata = MetadataSource::new();

    validate_directory(data_dir, "input data")?;
    for name in SOURCE_NAMES {
        source_from_name(name)?.locate(data_dir)?;
    }

    Ok(SourceTables {
        population: population.extract_rows(&population.load(data_dir)?),
        deprivation: deprivation.extract_rows(&deprivation.load(data_dir)?),
        metadata: metadata.extract_rows(&metadata.load(data_dir)?),
    })
}
