use std::fs;

use child_mortality_report::{ReportBuilder, ReportConfig, write_report};

use crate::utils::{FIXTURE_COUNTRIES, FIXTURE_RECORDS, write_fixture};

#[test]
fn test_pipeline_from_fixture() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let config = ReportConfig::new(dir.path(), dir.path().join("out"));
    let report = ReportBuilder::new(config).build().unwrap();

    assert_eq!(report.records.len(), FIXTURE_RECORDS);
    assert_eq!(report.countries.len(), FIXTURE_COUNTRIES);
    assert_eq!(report.inputs.deprivation_rows, 9);
    assert_eq!(report.inputs.deprivation_total_rows, 5);
    assert_eq!(report.factorless_records, 1);

    // Only 2015 has at least five contributing countries
    assert_eq!(report.years.len(), 1);
    assert_eq!(report.years[0].year, 2015);
    assert_eq!(report.years[0].country_count, 6);

    for pair in report.countries.windows(2) {
        assert!(pair[0].mean_mortality_per_1000 >= pair[1].mean_mortality_per_1000);
    }
    for record in &report.records {
        assert!((2.0..=200.0).contains(&record.estimated_mortality_per_1000));
        assert!((-0.1..=0.1).contains(&record.mortality_proxy));
    }
}

#[test]
fn test_time_period_and_obs_value_are_harmonized() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let config = ReportConfig::new(dir.path(), dir.path().join("out"));
    let report = ReportBuilder::new(config).build().unwrap();

    let mali = report
        .records
        .iter()
        .find(|r| r.country == "Mali" && r.year == Some(2015))
        .unwrap();
    assert_eq!(mali.child_deprivation, Some(38.0));
    assert_eq!(mali.population_under5, Some(3_200_000.0));
    assert_eq!(mali.life_expectancy, Some(58.2));

    // Deprivation-only key joins with unset metadata columns
    let chad = report
        .records
        .iter()
        .find(|r| r.country == "Chad" && r.year == Some(2017))
        .unwrap();
    assert_eq!(chad.life_expectancy, None);
    assert_eq!(chad.crude_birth_rate, None);
    assert_eq!(chad.child_deprivation, Some(45.5));
}

#[test]
fn test_missing_source_fails_before_any_output() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    fs::remove_file(dir.path().join("population_under5.csv")).unwrap();

    let config = ReportConfig::new(dir.path(), dir.path().join("out"));
    let err = ReportBuilder::new(config.clone()).build().unwrap_err();

    assert!(err.is_missing_source());
    assert!(err.to_string().contains("population_under5"));
    assert!(!config.output_dir.exists());
}

#[test]
fn test_parquet_source_replaces_csv() {
    use child_mortality_report::source::{PopulationSource, SourceLoader};
    use child_mortality_report::utils::io::{read_csv, write_parquet};

    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let csv_path = dir.path().join("population_under5.csv");
    let batches = read_csv(&csv_path).unwrap();
    write_parquet(&dir.path().join("population_under5.parquet"), &batches[0]).unwrap();
    fs::remove_file(&csv_path).unwrap();

    let source = PopulationSource::new();
    let rows = source.extract_rows(&source.load(dir.path()).unwrap());
    assert_eq!(rows.len(), 6);

    let config = ReportConfig::new(dir.path(), dir.path().join("out"));
    let report = ReportBuilder::new(config).build().unwrap();
    assert_eq!(report.records.len(), FIXTURE_RECORDS);
    assert!(write_report(&report, &ReportConfig::new(dir.path(), dir.path().join("out"))).is_ok());
}
