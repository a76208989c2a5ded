//! Table export
//!
//! Every table is converted to a `RecordBatch` before the first file is
//! created, so a conversion failure leaves the output directory untouched.

use std::path::{Path, PathBuf};

use arrow::record_batch::RecordBatch;
use log::info;

use crate::algorithm::mortality::MortalityReport;
use crate::config::ReportConfig;
use crate::error::Result;
use crate::error::util::ensure_output_directory;
use crate::models::{ArrowTable, CountrySummary, ScoredRecord, YearSummary};
use crate::utils::io::{write_csv, write_parquet};

use super::manifest::{MANIFEST_FILE, ReportManifest};

/// Per-record table: every joined column plus the derived fields
pub const RECORDS_TABLE: &str = "mortality_proxy_records";

/// Per-country summary table
pub const COUNTRY_TABLE: &str = "country_mortality_summary";

/// Per-year trend table
pub const TREND_TABLE: &str = "mortality_trend_by_year";

/// Output file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Parquet,
}

impl ExportFormat {
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Parquet => "parquet",
        }
    }

    fn write(self, path: &Path, batch: &RecordBatch) -> Result<()> {
        match self {
            Self::Csv => write_csv(path, batch),
            Self::Parquet => write_parquet(path, batch),
        }
    }
}

/// The report tables as Arrow batches, keyed by table name
pub fn report_tables(report: &MortalityReport) -> Result<Vec<(&'static str, RecordBatch)>> {
    Ok(vec![
        (RECORDS_TABLE, ScoredRecord::to_record_batch(&report.records)?),
        (COUNTRY_TABLE, CountrySummary::to_record_batch(&report.countries)?),
        (TREND_TABLE, YearSummary::to_record_batch(&report.years)?),
    ])
}

/// Formats enabled by a configuration, CSV first
#[must_use]
pub fn export_formats(config: &ReportConfig) -> Vec<ExportFormat> {
    let mut formats = vec![ExportFormat::Csv];
    if config.export_parquet {
        formats.push(ExportFormat::Parquet);
    }
    formats
}

/// Write every report table (and the manifest when enabled) to the output directory
///
/// Returns the written paths, manifest last.
pub fn write_report(report: &MortalityReport, config: &ReportConfig) -> Result<Vec<PathBuf>> {
    let tables = report_tables(report)?;
    let formats = export_formats(config);

    ensure_output_directory(&config.output_dir)?;

    let mut written = Vec::with_capacity(tables.len() * formats.len() + 1);
    for format in formats {
        for (name, batch) in &tables {
            let path = config
                .output_dir
                .join(format!("{name}.{}", format.extension()));
            format.write(&path, batch)?;
            written.push(path);
        }
    }

    if config.write_manifest {
        let path = config.output_dir.join(MANIFEST_FILE);
        ReportManifest::new(report, config, &written).write(&path)?;
        written.push(path);
    }

    info!(
        "Wrote {} output files to {}",
        written.len(),
        config.output_dir.display()
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::mortality::InputCounts;
    use crate::algorithm::mortality::scoring::score_record;
    use crate::models::CountryYearRecord;
    use std::fs;

    fn report() -> MortalityReport {
        let records = vec![
            score_record(CountryYearRecord {
                country: "Congo, Rep.".to_string(),
                iso3: Some("COG".to_string()),
                year: Some(2015),
                life_expectancy: Some(64.0),
                crude_birth_rate: Some(33.0),
                child_deprivation: None,
                population_under5: Some(780_000.0),
            }),
            score_record(CountryYearRecord {
                country: "Mali".to_string(),
                iso3: None,
                year: None,
                life_expectancy: None,
                crude_birth_rate: None,
                child_deprivation: None,
                population_under5: None,
            }),
        ];
        let countries = crate::algorithm::mortality::summarize_by_country(&records);
        MortalityReport {
            records,
            countries,
            years: Vec::new(),
            inputs: InputCounts::default(),
            factorless_records: 1,
        }
    }

    #[test]
    fn test_write_report_csv_only() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(dir.path(), dir.path().join("out")).with_manifest(false);

        let written = write_report(&report(), &config).unwrap();
        assert_eq!(written.len(), 3);
        assert!(written.iter().all(|p| p.extension().unwrap() == "csv"));

        let records = fs::read_to_string(config.output_dir.join("mortality_proxy_records.csv")).unwrap();
        let mut lines = records.lines();
        assert_eq!(
            lines.next().unwrap(),
            "country,iso3,year,life_expectancy,crude_birth_rate,child_deprivation,\
             population_under5,mortality_proxy,estimated_mortality_per_1000"
        );
        assert!(lines.next().unwrap().starts_with("\"Congo, Rep.\",COG,2015,"));
        assert_eq!(lines.count(), 1);

        // Empty trend table still gets a header
        let trend = fs::read_to_string(config.output_dir.join("mortality_trend_by_year.csv")).unwrap();
        assert!(trend.starts_with("year,mean_mortality_per_1000"));
    }

    #[test]
    fn test_write_report_with_parquet_and_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReportConfig::new(dir.path(), dir.path().join("out")).with_parquet_export(true);

        let written = write_report(&report(), &config).unwrap();
        assert_eq!(written.len(), 7);
        assert!(written.last().unwrap().ends_with("report_manifest.json"));

        let batches = crate::utils::io::read_parquet(&config.output_dir.join("country_mortality_summary.parquet")).unwrap();
        let rows = CountrySummary::from_record_batch(&batches[0]).unwrap();
        assert_eq!(rows, report().countries);
    }
}
