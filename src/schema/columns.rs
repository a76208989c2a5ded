//! Canonical column names used after harmonization

/// Country display name
pub const COUNTRY: &str = "country";
/// ISO 3166-1 alpha-3 code
pub const ISO3: &str = "iso3";
/// Observation year
pub const YEAR: &str = "year";
/// Sex category of a deprivation observation
pub const SEX: &str = "sex";
/// Population under age five
pub const POPULATION_UNDER5: &str = "population_under5";
/// Share of children in deprivation, percent
pub const CHILD_DEPRIVATION: &str = "child_deprivation";
/// Life expectancy at birth, total (years)
pub const LIFE_EXPECTANCY: &str = "life_expectancy";
/// Crude birth rate per 1,000 people
pub const CRUDE_BIRTH_RATE: &str = "crude_birth_rate";

/// Header used by newer indicator exports instead of `year`
pub const TIME_PERIOD: &str = "time_period";
/// Generic observation value header of the indicator exports
pub const OBS_VALUE: &str = "obs_value";
