//! Aggregated country and year tables

use serde::{Deserialize, Serialize};

use super::traits::ArrowTable;

/// Per-country aggregate of scored records
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub country: String,
    pub iso3: Option<String>,
    pub mean_mortality_per_1000: f64,
    /// Number of scored records for the country
    pub observation_count: u64,
    /// Mean over records that carry a life expectancy
    pub mean_life_expectancy: Option<f64>,
    /// Mean over records that carry a deprivation value
    pub mean_child_deprivation: Option<f64>,
}

/// Per-year aggregate used by the trend chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YearSummary {
    pub year: i32,
    pub mean_mortality_per_1000: f64,
    /// Sample standard deviation; unset with fewer than two records
    pub std_mortality_per_1000: Option<f64>,
    pub observation_count: u64,
    /// Distinct countries contributing to the year
    pub country_count: u64,
}

impl ArrowTable for CountrySummary {}

impl ArrowTable for YearSummary {}
