//! Console output utilities
//!
//! End-of-run summary printed to stdout.

use std::path::PathBuf;

use crate::algorithm::mortality::MortalityReport;

/// Print the ranked countries and the year trend of a report
pub fn print_report_summary(report: &MortalityReport, top_n: usize) {
    println!(
        "Scored {} country-year records across {} countries",
        report.records.len(),
        report.countries.len()
    );
    if report.factorless_records > 0 {
        println!(
            "  {} records had no life expectancy or deprivation data (scored 101)",
            report.factorless_records
        );
    }

    let ranked = report.top_countries(top_n);
    println!("\nTop {} countries by estimated under-5 mortality:", ranked.len());
    for (rank, summary) in ranked.iter().enumerate() {
        println!(
            "{:>4}. {:<40} {:>4} {:>8.1} per 1,000 ({} obs)",
            rank + 1,
            summary.country,
            summary.iso3.as_deref().unwrap_or("-"),
            summary.mean_mortality_per_1000,
            summary.observation_count
        );
    }

    println!("\nTrend by year ({} years):", report.years.len());
    for year in &report.years {
        let std = year
            .std_mortality_per_1000
            .map_or_else(|| "-".to_string(), |s| format!("{s:.1}"));
        println!(
            "  {}: mean {:>6.1} sd {:>6} ({} countries)",
            year.year, year.mean_mortality_per_1000, std, year.country_count
        );
    }
}

/// Print the files written by a run
pub fn print_written_files(paths: &[PathBuf]) {
    println!("\nWrote {} files:", paths.len());
    for path in paths {
        println!("  - {}", path.display());
    }
}
