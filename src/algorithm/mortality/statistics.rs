//! Country and year aggregation of scored records
//!
//! Groups are keyed through `BTreeMap`s, so the grouped order (and therefore
//! the order of ties after the stable sort by mean) does not depend on the
//! order of the input records.

use std::collections::{BTreeMap, BTreeSet};

use log::{info, warn};

use crate::models::{CountrySummary, ScoredRecord, YearSummary};

#[derive(Debug, Default)]
struct CountryAccumulator {
    iso3: Option<String>,
    mortality_sum: f64,
    count: u64,
    life_expectancy_sum: f64,
    life_expectancy_count: u64,
    deprivation_sum: f64,
    deprivation_count: u64,
}

impl CountryAccumulator {
    fn add(&mut self, record: &ScoredRecord) {
        self.mortality_sum += record.estimated_mortality_per_1000;
        self.count += 1;
        if let Some(value) = record.life_expectancy {
            self.life_expectancy_sum += value;
            self.life_expectancy_count += 1;
        }
        if let Some(value) = record.child_deprivation {
            self.deprivation_sum += value;
            self.deprivation_count += 1;
        }
        // Smallest code wins when a country is reported under several
        if let Some(code) = &record.iso3 {
            if self.iso3.as_ref().is_none_or(|current| code < current) {
                self.iso3 = Some(code.clone());
            }
        }
    }

    fn finish(self, country: String) -> CountrySummary {
        CountrySummary {
            country,
            iso3: self.iso3,
            mean_mortality_per_1000: mean(self.mortality_sum, self.count).unwrap_or_default(),
            observation_count: self.count,
            mean_life_expectancy: mean(self.life_expectancy_sum, self.life_expectancy_count),
            mean_child_deprivation: mean(self.deprivation_sum, self.deprivation_count),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(sum: f64, count: u64) -> Option<f64> {
    (count > 0).then(|| sum / count as f64)
}

/// Sample standard deviation (n - 1 denominator), `None` below two values
#[allow(clippy::cast_precision_loss)]
fn sample_std(values: &[f64], mean: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let squares: f64 = values.iter().map(|v| (v - mean).powi(2)).sum();
    Some((squares / (values.len() - 1) as f64).sqrt())
}

/// Aggregate scored records per country, sorted by mean estimate descending
///
/// Records are grouped by country name and ISO code when every record carries
/// a code; otherwise by name alone, reporting the smallest code seen for the
/// country. Means of life expectancy and deprivation ignore unset values.
#[must_use]
pub fn summarize_by_country(records: &[ScoredRecord]) -> Vec<CountrySummary> {
    let group_by_iso = !records.is_empty() && records.iter().all(|r| r.iso3.is_some());

    let mut groups: BTreeMap<(String, Option<String>), CountryAccumulator> = BTreeMap::new();
    for record in records {
        let code = if group_by_iso { record.iso3.clone() } else { None };
        groups
            .entry((record.country.clone(), code))
            .or_default()
            .add(record);
    }

    let mut summaries: Vec<CountrySummary> = groups
        .into_iter()
        .map(|((country, _), acc)| acc.finish(country))
        .collect();

    // Stable: ties keep the grouped (country name) order
    summaries.sort_by(|a, b| b.mean_mortality_per_1000.total_cmp(&a.mean_mortality_per_1000));

    info!("Summarized {} records into {} countries", records.len(), summaries.len());
    summaries
}

/// Aggregate scored records per year, ascending by year
///
/// Records with an unknown year are skipped. Years with fewer than
/// `min_countries` distinct contributing countries are dropped. Countries are
/// told apart with the same rule as [`summarize_by_country`]: by name and ISO
/// code when every record carries a code, by name otherwise.
#[must_use]
pub fn summarize_by_year(records: &[ScoredRecord], min_countries: usize) -> Vec<YearSummary> {
    let group_by_iso = records.iter().all(|r| r.iso3.is_some());

    let mut groups: BTreeMap<i32, (Vec<f64>, BTreeSet<(&str, Option<&str>)>)> = BTreeMap::new();
    for record in records {
        let Some(year) = record.year else {
            continue;
        };
        let code = if group_by_iso { record.iso3.as_deref() } else { None };
        let (values, countries) = groups.entry(year).or_default();
        values.push(record.estimated_mortality_per_1000);
        countries.insert((record.country.as_str(), code));
    }

    let mut dropped = 0_usize;
    let summaries: Vec<YearSummary> = groups
        .into_iter()
        .filter_map(|(year, (values, countries))| {
            if countries.len() < min_countries {
                dropped += 1;
                return None;
            }
            let count = values.len() as u64;
            let mean_value = mean(values.iter().sum(), count).unwrap_or_default();
            Some(YearSummary {
                year,
                mean_mortality_per_1000: mean_value,
                std_mortality_per_1000: sample_std(&values, mean_value),
                observation_count: count,
                country_count: countries.len() as u64,
            })
        })
        .collect();

    if dropped > 0 {
        info!("Dropped {dropped} years with fewer than {min_countries} contributing countries");
    }
    summaries
}

/// The first `n` countries of a ranked summary
#[must_use]
pub fn ranked_countries(summaries: &[CountrySummary], n: usize) -> &[CountrySummary] {
    &summaries[..n.min(summaries.len())]
}

/// Count records scored without any factor, and warn about them
///
/// Such records carry the neutral 101 per 1,000 estimate and still take part
/// in every mean.
#[must_use]
pub fn count_factorless(records: &[ScoredRecord]) -> usize {
    let count = records.iter().filter(|r| !r.has_any_factor()).count();
    if count > 0 {
        warn!(
            "{count} records have neither life expectancy nor deprivation data; \
             they are scored at the neutral 101 per 1,000 and included in all averages"
        );
    }
    count
}
