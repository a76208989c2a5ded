use std::env;
use std::time::Instant;

use anyhow::Context;
use log::{error, info};

use child_mortality_report::utils::logging::{print_report_summary, print_written_files};
use child_mortality_report::{ReportBuilder, ReportConfig, write_report};

fn run() -> anyhow::Result<()> {
    let mut args = env::args().skip(1);
    let defaults = ReportConfig::default();
    let config = ReportConfig::new(
        args.next().map_or(defaults.data_dir, Into::into),
        args.next().map_or(defaults.output_dir, Into::into),
    );
    info!("{config}");

    let start = Instant::now();
    let report = ReportBuilder::new(config.clone())
        .build()
        .context("Failed to build mortality report")?;

    let written = write_report(&report, &config)
        .with_context(|| format!("Failed to write report to {}", config.output_dir.display()))?;

    print_report_summary(&report, config.top_countries);
    print_written_files(&written);
    info!("Report completed in {:?}", start.elapsed());
    Ok(())
}

fn main() {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    if let Err(err) = run() {
        error!("{err:#}");
        std::process::exit(1);
    }
}
