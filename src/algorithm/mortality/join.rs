//! Country-year join
//!
//! Builds the per-country-year table from the metadata slice and the
//! Total-sex deprivation slice with outer-join semantics, then carries the
//! population indicator onto the joined keys.

use std::cmp::Ordering;
use std::collections::hash_map::Entry;

use itertools::Itertools;
use log::{info, warn};
use rustc_hash::FxHashMap;

use crate::models::{CountryYearRecord, DeprivationRow, MetadataRow, PopulationRow};

/// Key of the join; `iso3` is only populated when every row on both sides carries a code
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct JoinKey {
    country: String,
    year: Option<i32>,
    iso3: Option<String>,
}

impl JoinKey {
    fn new(country: &str, year: Option<i32>, iso3: Option<&String>, use_iso: bool) -> Self {
        Self {
            country: country.to_string(),
            year,
            iso3: if use_iso { iso3.cloned() } else { None },
        }
    }
}

/// Order of the joined table: country, ISO code, then year with unknown years last
fn record_order(a: &CountryYearRecord, b: &CountryYearRecord) -> Ordering {
    a.country
        .cmp(&b.country)
        .then_with(|| a.iso3.cmp(&b.iso3))
        .then_with(|| match (a.year, b.year) {
            (Some(x), Some(y)) => x.cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        })
}

/// Build the joined country-year table
///
/// Only Total-sex deprivation rows take part. ISO codes join the key only when
/// every metadata and Total-sex deprivation row carries one. A key present on
/// either side yields a record; a key matched by several rows on both sides yields one
/// record per pair. Unknown years only match unknown years.
#[must_use]
pub fn build_country_year_table(
    metadata: &[MetadataRow],
    deprivation: &[DeprivationRow],
    population: &[PopulationRow],
) -> Vec<CountryYearRecord> {
    let total: Vec<&DeprivationRow> = deprivation.iter().filter(|r| r.is_total_sex()).collect();
    info!(
        "Using {} Total-sex deprivation rows out of {}",
        total.len(),
        deprivation.len()
    );

    // Partially populated codes would split a country-year into half-records
    let use_iso = !metadata.is_empty()
        && !total.is_empty()
        && metadata.iter().all(|r| r.iso3.is_some())
        && total.iter().all(|r| r.iso3.is_some());

    let mut index: FxHashMap<JoinKey, Vec<usize>> = FxHashMap::default();
    for (idx, row) in total.iter().enumerate() {
        index
            .entry(JoinKey::new(&row.country, row.year, row.iso3.as_ref(), use_iso))
            .or_default()
            .push(idx);
    }

    let mut matched = vec![false; total.len()];
    let mut records = Vec::with_capacity(metadata.len().max(total.len()));

    for meta in metadata {
        let key = JoinKey::new(&meta.country, meta.year, meta.iso3.as_ref(), use_iso);
        match index.get(&key) {
            Some(indices) => {
                for &idx in indices {
                    matched[idx] = true;
                    let dep = total[idx];
                    records.push(CountryYearRecord {
                        country: meta.country.clone(),
                        iso3: meta.iso3.clone().or_else(|| dep.iso3.clone()),
                        year: meta.year,
                        life_expectancy: meta.life_expectancy,
                        crude_birth_rate: meta.crude_birth_rate,
                        child_deprivation: dep.child_deprivation,
                        population_under5: None,
                    });
                }
            }
            None => records.push(CountryYearRecord {
                country: meta.country.clone(),
                iso3: meta.iso3.clone(),
                year: meta.year,
                life_expectancy: meta.life_expectancy,
                crude_birth_rate: meta.crude_birth_rate,
                child_deprivation: None,
                population_under5: None,
            }),
        }
    }

    for (dep, _) in total.iter().zip(&matched).filter(|(_, m)| !**m) {
        records.push(CountryYearRecord {
            country: dep.country.clone(),
            iso3: dep.iso3.clone(),
            year: dep.year,
            life_expectancy: None,
            crude_birth_rate: None,
            child_deprivation: dep.child_deprivation,
            population_under5: None,
        });
    }

    attach_population(&mut records, population);

    records.into_iter().sorted_by(record_order).collect()
}

/// Carry population-under-5 onto existing records by (country, year)
///
/// The first observation of a key wins; population rows never add records.
fn attach_population(records: &mut [CountryYearRecord], population: &[PopulationRow]) {
    let mut lookup: FxHashMap<(&str, Option<i32>), Option<f64>> = FxHashMap::default();
    let mut duplicates = 0_usize;
    for row in population {
        match lookup.entry((row.country.as_str(), row.year)) {
            Entry::Occupied(_) => duplicates += 1,
            Entry::Vacant(slot) => {
                slot.insert(row.population_under5);
            }
        }
    }
    if duplicates > 0 {
        warn!("{duplicates} duplicate population rows ignored; first observation per country-year kept");
    }

    for record in records.iter_mut() {
        record.population_under5 = lookup
            .get(&(record.country.as_str(), record.year))
            .copied()
            .flatten();
    }
}
