use std::fs;
use std::path::Path;

use child_mortality_report::{ReportBuilder, ReportConfig, write_report};

use crate::utils::{FIXTURE_COUNTRIES, FIXTURE_RECORDS, write_fixture, write_shuffled_fixture};

const TABLES: [&str; 3] = [
    "mortality_proxy_records.csv",
    "country_mortality_summary.csv",
    "mortality_trend_by_year.csv",
];

fn run(data_dir: &Path, output_dir: &Path) {
    let config = ReportConfig::new(data_dir, output_dir);
    let report = ReportBuilder::new(config.clone()).build().unwrap();
    write_report(&report, &config).unwrap();
}

fn read_tables(output_dir: &Path) -> Vec<Vec<u8>> {
    TABLES
        .iter()
        .map(|name| fs::read(output_dir.join(name)).unwrap())
        .collect()
}

#[test]
fn test_outputs_are_written() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());
    let out = dir.path().join("out");
    run(dir.path(), &out);

    let records = fs::read_to_string(out.join(TABLES[0])).unwrap();
    assert_eq!(records.lines().count(), FIXTURE_RECORDS + 1);
    assert!(records.contains("\"Congo, Rep.\""));

    let countries = fs::read_to_string(out.join(TABLES[1])).unwrap();
    assert_eq!(countries.lines().count(), FIXTURE_COUNTRIES + 1);
    assert!(countries.starts_with("country,iso3,mean_mortality_per_1000,observation_count"));

    let manifest = fs::read_to_string(out.join("report_manifest.json")).unwrap();
    let manifest: serde_json::Value = serde_json::from_str(&manifest).unwrap();
    assert_eq!(manifest["record_count"], FIXTURE_RECORDS);
    assert_eq!(manifest["inputs"]["metadata_rows"], 9);
}

#[test]
fn test_repeated_runs_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture(dir.path());

    let first = dir.path().join("first");
    let second = dir.path().join("second");
    run(dir.path(), &first);
    run(dir.path(), &second);

    assert_eq!(read_tables(&first), read_tables(&second));
}

#[test]
fn test_input_row_order_does_not_change_outputs() {
    let ordered = tempfile::tempdir().unwrap();
    write_fixture(ordered.path());
    run(ordered.path(), &ordered.path().join("out"));
    let expected = read_tables(&ordered.path().join("out"));

    for seed in [7, 42, 2024] {
        let shuffled = tempfile::tempdir().unwrap();
        write_shuffled_fixture(shuffled.path(), seed);
        run(shuffled.path(), &shuffled.path().join("out"));
        assert_eq!(read_tables(&shuffled.path().join("out")), expected, "seed {seed}");
    }
}
