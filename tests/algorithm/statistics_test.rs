use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use child_mortality_report::algorithm::mortality::{
    build_country_year_table, score_records, summarize_by_country, summarize_by_year,
};
use child_mortality_report::models::{DeprivationRow, MetadataRow};

fn random_inputs(rng: &mut StdRng) -> (Vec<MetadataRow>, Vec<DeprivationRow>) {
    let mut metadata = Vec::new();
    let mut deprivation = Vec::new();
    for c in 0..12 {
        for year in 2010..2020 {
            if rng.random_bool(0.7) {
                metadata.push(MetadataRow {
                    country: format!("Country {c:02}"),
                    iso3: None,
                    year: Some(year),
                    life_expectancy: rng.random_bool(0.8).then(|| rng.random_range(25.0..90.0)),
                    crude_birth_rate: Some(rng.random_range(5.0..50.0)),
                });
            }
            if rng.random_bool(0.5) {
                deprivation.push(DeprivationRow {
                    country: format!("Country {c:02}"),
                    iso3: None,
                    year: Some(year),
                    sex: Some(if rng.random_bool(0.6) { "Total" } else { "Female" }.to_string()),
                    child_deprivation: rng.random_bool(0.9).then(|| rng.random_range(0.0..90.0)),
                });
            }
        }
    }
    (metadata, deprivation)
}

#[test]
fn test_aggregates_respect_bounds_and_threshold() {
    let mut rng = StdRng::seed_from_u64(11);
    let (metadata, deprivation) = random_inputs(&mut rng);
    let records = score_records(build_country_year_table(&metadata, &deprivation, &[]));

    let countries = summarize_by_country(&records);
    let total: u64 = countries.iter().map(|c| c.observation_count).sum();
    assert_eq!(total as usize, records.len());
    for summary in &countries {
        assert!((2.0..=200.0).contains(&summary.mean_mortality_per_1000));
    }
    for pair in countries.windows(2) {
        assert!(pair[0].mean_mortality_per_1000 >= pair[1].mean_mortality_per_1000);
    }

    let years = summarize_by_year(&records, 8);
    for pair in years.windows(2) {
        assert!(pair[0].year < pair[1].year);
    }
    for year in &years {
        assert!(year.country_count >= 8);
        assert!(year.observation_count >= year.country_count);
        assert!((2.0..=200.0).contains(&year.mean_mortality_per_1000));
    }
}

#[test]
fn test_aggregates_do_not_depend_on_row_order() {
    let mut rng = StdRng::seed_from_u64(99);
    let (mut metadata, mut deprivation) = random_inputs(&mut rng);

    let records = score_records(build_country_year_table(&metadata, &deprivation, &[]));
    let countries = summarize_by_country(&records);
    let years = summarize_by_year(&records, 5);

    for _ in 0..5 {
        metadata.shuffle(&mut rng);
        deprivation.shuffle(&mut rng);
        let shuffled = score_records(build_country_year_table(&metadata, &deprivation, &[]));
        assert_eq!(shuffled, records);
        assert_eq!(summarize_by_country(&shuffled), countries);
        assert_eq!(summarize_by_year(&shuffled, 5), years);
    }
}
