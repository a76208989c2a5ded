//! Report builder
//!
//! Runs the whole pipeline for one configuration: load the three sources,
//! join, score, and aggregate. Nothing is written here; exporting is left to
//! [`crate::report`].

use log::info;
use serde::{Deserialize, Serialize};

use crate::config::ReportConfig;
use crate::error::Result;
use crate::models::{CountrySummary, ScoredRecord, YearSummary};
use crate::source::{SourceTables, load_all_sources};

use super::join::build_country_year_table;
use super::scoring::score_records;
use super::statistics::{count_factorless, ranked_countries, summarize_by_country, summarize_by_year};

/// Row counts of the loaded inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputCounts {
    pub population_rows: usize,
    pub deprivation_rows: usize,
    /// Deprivation rows in the Total sex category
    pub deprivation_total_rows: usize,
    pub metadata_rows: usize,
}

impl InputCounts {
    #[must_use]
    pub fn from_tables(tables: &SourceTables) -> Self {
        Self {
            population_rows: tables.population.len(),
            deprivation_rows: tables.deprivation.len(),
            deprivation_total_rows: tables.deprivation.iter().filter(|r| r.is_total_sex()).count(),
            metadata_rows: tables.metadata.len(),
        }
    }
}

/// Result of a report run
#[derive(Debug, Clone)]
pub struct MortalityReport {
    /// Scored country-year records, ordered by country, ISO code and year
    pub records: Vec<ScoredRecord>,
    /// Per-country summary, descending by mean estimate
    pub countries: Vec<CountrySummary>,
    /// Per-year trend, ascending by year
    pub years: Vec<YearSummary>,
    pub inputs: InputCounts,
    /// Records scored without any factor
    pub factorless_records: usize,
}

impl MortalityReport {
    /// Compute the report from already loaded tables
    #[must_use]
    pub fn from_tables(tables: &SourceTables, config: &ReportConfig) -> Self {
        let joined = build_country_year_table(&tables.metadata, &tables.deprivation, &tables.population);
        info!("Joined table has {} country-year records", joined.len());

        let records = score_records(joined);
        let factorless_records = count_factorless(&records);
        let countries = summarize_by_country(&records);
        let years = summarize_by_year(&records, config.min_countries_per_year);

        Self {
            records,
            countries,
            years,
            inputs: InputCounts::from_tables(tables),
            factorless_records,
        }
    }

    /// The highest-ranked `n` countries
    #[must_use]
    pub fn top_countries(&self, n: usize) -> &[CountrySummary] {
        ranked_countries(&self.countries, n)
    }
}

/// Builder running the report pipeline for a configuration
#[derive(Debug, Clone)]
pub struct ReportBuilder {
    config: ReportConfig,
}

impl ReportBuilder {
    #[must_use]
    pub const fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Load every source from the data directory and compute the report
    ///
    /// Fails with [`crate::error::ReportError::SourceNotFound`] before reading
    /// anything when one of the sources is missing.
    pub fn build(&self) -> Result<MortalityReport> {
        info!("Building mortality report from {}", self.config.data_dir.display());
        let tables = load_all_sources(&self.config.data_dir)?;
        let report = MortalityReport::from_tables(&tables, &self.config);
        info!(
            "Report ready: {} records, {} countries, {} years",
            report.records.len(),
            report.countries.len(),
            report.years.len()
        );
        Ok(report)
    }
}
