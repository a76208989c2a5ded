//! Configuration for a report run.

use std::fmt;
use std::path::{Path, PathBuf};

/// Minimum number of contributing countries for a year to enter the trend table
pub const DEFAULT_MIN_COUNTRIES_PER_YEAR: usize = 5;

/// Number of countries shown in the ranked bar chart
pub const DEFAULT_TOP_COUNTRIES: usize = 20;

/// Configuration for the `ReportBuilder`
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Directory holding the three input sources
    pub data_dir: PathBuf,
    /// Directory the exported tables are written to
    pub output_dir: PathBuf,
    /// Years with fewer contributing countries are dropped from the trend table
    pub min_countries_per_year: usize,
    /// Size of the ranked country slice
    pub top_countries: usize,
    /// Also write Parquet copies of the exported tables
    pub export_parquet: bool,
    /// Write `report_manifest.json` next to the tables
    pub write_manifest: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_dir: PathBuf::from("output"),
            min_countries_per_year: DEFAULT_MIN_COUNTRIES_PER_YEAR,
            top_countries: DEFAULT_TOP_COUNTRIES,
            export_parquet: false,
            write_manifest: true,
        }
    }
}

impl ReportConfig {
    /// Create a configuration reading from `data_dir` and writing to `output_dir`
    #[must_use]
    pub fn new(data_dir: impl AsRef<Path>, output_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
            output_dir: output_dir.as_ref().to_path_buf(),
            ..Default::default()
        }
    }

    #[must_use]
    pub const fn with_min_countries_per_year(mut self, min: usize) -> Self {
        self.min_countries_per_year = min;
        self
    }

    #[must_use]
    pub const fn with_top_countries(mut self, n: usize) -> Self {
        self.top_countries = n;
        self
    }

    #[must_use]
    pub const fn with_parquet_export(mut self, enabled: bool) -> Self {
        self.export_parquet = enabled;
        self
    }

    #[must_use]
    pub const fn with_manifest(mut self, enabled: bool) -> Self {
        self.write_manifest = enabled;
        self
    }
}

impl fmt::Display for ReportConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Report Configuration:")?;
        writeln!(f, "  Data Directory: {}", self.data_dir.display())?;
        writeln!(f, "  Output Directory: {}", self.output_dir.display())?;
        writeln!(f, "  Min Countries per Year: {}", self.min_countries_per_year)?;
        writeln!(f, "  Top Countries: {}", self.top_countries)?;
        writeln!(f, "  Parquet Export: {}", self.export_parquet)?;
        writeln!(f, "  Manifest: {}", self.write_manifest)
    }
}
