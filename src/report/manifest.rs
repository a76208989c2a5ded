//! Run manifest written next to the exported tables

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::algorithm::mortality::{InputCounts, MortalityReport};
use crate::config::ReportConfig;
use crate::error::util::safe_create_file;
use crate::error::{ReportError, Result};

/// File name of the manifest
pub const MANIFEST_FILE: &str = "report_manifest.json";

/// Description of one report run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportManifest {
    /// RFC 3339 timestamp of the run
    pub generated_at: String,
    pub data_dir: PathBuf,
    pub inputs: InputCounts,
    pub record_count: usize,
    pub country_count: usize,
    pub year_count: usize,
    pub factorless_records: usize,
    pub min_countries_per_year: usize,
    /// Table files written before the manifest
    pub outputs: Vec<PathBuf>,
}

impl ReportManifest {
    #[must_use]
    pub fn new(report: &MortalityReport, config: &ReportConfig, outputs: &[PathBuf]) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            data_dir: config.data_dir.clone(),
            inputs: report.inputs,
            record_count: report.records.len(),
            country_count: report.countries.len(),
            year_count: report.years.len(),
            factorless_records: report.factorless_records,
            min_countries_per_year: config.min_countries_per_year,
            outputs: outputs
                .iter()
                .filter_map(|p| p.file_name().map(PathBuf::from))
                .collect(),
        }
    }

    /// Write the manifest as pretty-printed JSON
    pub fn write(&self, path: &Path) -> Result<()> {
        let file = safe_create_file(path, "writing report manifest")?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer
            .flush()
            .map_err(|e| ReportError::io("Failed to flush report manifest", path, e))
    }
}
