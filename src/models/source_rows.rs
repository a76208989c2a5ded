//! Typed rows of the three input sources
//!
//! A `None` year means the cell did not parse as a number; a `None` value
//! means the observation is unset. Neither is ever replaced by zero.

use serde::{Deserialize, Serialize};

/// One observation of the population-under-5 indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PopulationRow {
    pub country: String,
    pub iso3: Option<String>,
    pub year: Option<i32>,
    /// Population under age five
    pub population_under5: Option<f64>,
}

/// One observation of the child-deprivation indicator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeprivationRow {
    pub country: String,
    pub iso3: Option<String>,
    pub year: Option<i32>,
    /// Sex category label as found in the source
    pub sex: Option<String>,
    /// Share of children in deprivation, percent
    pub child_deprivation: Option<f64>,
}

impl DeprivationRow {
    /// Whether this row is the aggregate over all sexes
    ///
    /// Accepts the label `Total` in any case, the SDMX code `_T`, and the
    /// combined `_T: Total` form.
    #[must_use]
    pub fn is_total_sex(&self) -> bool {
        self.sex.as_deref().is_some_and(is_total_label)
    }
}

/// Check a sex category label for the all-sexes aggregate
#[must_use]
pub fn is_total_label(label: &str) -> bool {
    let label = label.trim();
    if label == "_T" || label.eq_ignore_ascii_case("total") {
        return true;
    }
    match label.split_once(':') {
        Some((code, name)) => code.trim() == "_T" || name.trim().eq_ignore_ascii_case("total"),
        None => false,
    }
}

/// One country-year row of the country metadata table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetadataRow {
    pub country: String,
    /// ISO 3166-1 alpha-3 code, when the metadata carries one
    pub iso3: Option<String>,
    pub year: Option<i32>,
    /// Life expectancy at birth, total (years)
    pub life_expectancy: Option<f64>,
    /// Crude birth rate per 1,000 people
    pub crude_birth_rate: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(sex: Option<&str>) -> DeprivationRow {
        DeprivationRow {
            country: "Chad".to_string(),
            iso3: None,
            year: Some(2015),
            sex: sex.map(str::to_string),
            child_deprivation: Some(50.0),
        }
    }

    #[test]
    fn test_total_sex_labels() {
        assert!(row(Some("Total")).is_total_sex());
        assert!(row(Some(" total ")).is_total_sex());
        assert!(row(Some("_T")).is_total_sex());
        assert!(row(Some("_T: Total")).is_total_sex());
        assert!(!row(Some("Female")).is_total_sex());
        assert!(!row(Some("M: Male")).is_total_sex());
        assert!(!row(None).is_total_sex());
    }
}
