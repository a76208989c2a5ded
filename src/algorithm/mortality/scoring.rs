//! Mortality proxy scoring
//!
//! Each available factor maps onto [-0.1, 0.1]; the proxy is the unweighted
//! mean of the available factors and is then rescaled onto [2, 200] deaths
//! per 1,000 live births. A record with no factor scores 0, which rescales
//! to 101. That value is a midpoint of the scale, not a missing-data marker.

use crate::models::{CountryYearRecord, ScoredRecord};

/// Bound of the proxy score and of each factor
pub const PROXY_BOUND: f64 = 0.1;

/// Life expectancy giving the strongest mortality signal
pub const LIFE_EXPECTANCY_FLOOR_YEARS: f64 = 30.0;

/// Years over which the life factor falls from +0.1 to -0.1
pub const LIFE_EXPECTANCY_SPAN_YEARS: f64 = 50.0;

/// Deprivation percentage at which the deprivation factor saturates
pub const DEPRIVATION_SATURATION_PCT: f64 = 40.0;

/// Lowest estimated rate, reached at proxy -0.1
pub const MIN_MORTALITY_PER_1000: f64 = 2.0;

/// Highest estimated rate, reached at proxy +0.1
pub const MAX_MORTALITY_PER_1000: f64 = 200.0;

/// Rate units per unit of (proxy + 0.1)
pub const MORTALITY_SCALE: f64 = 990.0;

/// Life expectancy factor: +0.1 at 30 years, -0.1 at 80 years, linear between
#[must_use]
pub fn life_factor(life_expectancy: f64) -> f64 {
    let factor = PROXY_BOUND
        - (life_expectancy - LIFE_EXPECTANCY_FLOOR_YEARS) * (2.0 * PROXY_BOUND)
            / LIFE_EXPECTANCY_SPAN_YEARS;
    factor.clamp(-PROXY_BOUND, PROXY_BOUND)
}

/// Deprivation factor: 0 at 0%, saturating at +0.1 from 40%
#[must_use]
pub fn deprivation_factor(child_deprivation: f64) -> f64 {
    (child_deprivation * PROXY_BOUND / DEPRIVATION_SATURATION_PCT).clamp(0.0, PROXY_BOUND)
}

/// Unweighted mean of the available factor signals, 0 when none is available
#[must_use]
pub fn mortality_proxy(life_expectancy: Option<f64>, child_deprivation: Option<f64>) -> f64 {
    let factors = [
        life_expectancy.filter(|v| v.is_finite()).map(life_factor),
        child_deprivation
            .filter(|v| v.is_finite())
            .map(deprivation_factor),
    ];

    let (score, factor_count) = factors
        .iter()
        .flatten()
        .fold((0.0, 0_u32), |(sum, n), factor| (sum + factor, n + 1));

    if factor_count > 0 {
        score / f64::from(factor_count)
    } else {
        0.0
    }
}

/// Rescale a proxy score onto deaths per 1,000 live births
#[must_use]
pub fn estimated_mortality_per_1000(proxy: f64) -> f64 {
    (MIN_MORTALITY_PER_1000 + (proxy + PROXY_BOUND) * MORTALITY_SCALE)
        .clamp(MIN_MORTALITY_PER_1000, MAX_MORTALITY_PER_1000)
}

/// Score one joined record
#[must_use]
pub fn score_record(record: CountryYearRecord) -> ScoredRecord {
    let proxy = mortality_proxy(record.life_expectancy, record.child_deprivation);
    ScoredRecord::new(record, proxy, estimated_mortality_per_1000(proxy))
}

/// Score every joined record, keeping order
#[must_use]
pub fn score_records(records: Vec<CountryYearRecord>) -> Vec<ScoredRecord> {
    records.into_iter().map(score_record).collect()
}
