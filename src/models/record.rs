//! Joined and scored country-year records

use serde::{Deserialize, Serialize};

use super::traits::ArrowTable;

/// One row of the joined country-year table
///
/// Exists when the key appears in the metadata slice or in the Total-sex
/// deprivation slice. Attributes missing on one side stay unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryYearRecord {
    pub country: String,
    pub iso3: Option<String>,
    pub year: Option<i32>,
    pub life_expectancy: Option<f64>,
    pub crude_birth_rate: Option<f64>,
    pub child_deprivation: Option<f64>,
    /// Carried from the population indicator; never creates a record
    pub population_under5: Option<f64>,
}

impl CountryYearRecord {
    /// Whether at least one scoring input is present
    #[must_use]
    pub const fn has_any_factor(&self) -> bool {
        self.life_expectancy.is_some() || self.child_deprivation.is_some()
    }
}

/// A joined record plus its derived mortality fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRecord {
    pub country: String,
    pub iso3: Option<String>,
    pub year: Option<i32>,
    pub life_expectancy: Option<f64>,
    pub crude_birth_rate: Option<f64>,
    pub child_deprivation: Option<f64>,
    pub population_under5: Option<f64>,
    /// Bounded score in [-0.1, 0.1]
    pub mortality_proxy: f64,
    /// Rescaled score in [2, 200] deaths per 1,000 live births
    pub estimated_mortality_per_1000: f64,
}

impl ScoredRecord {
    /// Attach derived fields to a joined record
    #[must_use]
    pub fn new(record: CountryYearRecord, mortality_proxy: f64, estimated_mortality_per_1000: f64) -> Self {
        Self {
            country: record.country,
            iso3: record.iso3,
            year: record.year,
            life_expectancy: record.life_expectancy,
            crude_birth_rate: record.crude_birth_rate,
            child_deprivation: record.child_deprivation,
            population_under5: record.population_under5,
            mortality_proxy,
            estimated_mortality_per_1000,
        }
    }

    /// Whether at least one scoring input was present
    #[must_use]
    pub const fn has_any_factor(&self) -> bool {
        self.life_expectancy.is_some() || self.child_deprivation.is_some()
    }
}

impl ArrowTable for ScoredRecord {}
