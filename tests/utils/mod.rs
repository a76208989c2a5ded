use std::fs;
use std::path::Path;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Country metadata rows: country, ISO code, year, life expectancy, crude birth rate
const METADATA: &[(&str, &str, i32, &str, &str)] = &[
    ("Chad", "TCD", 2015, "52.6", "44.6"),
    ("Chad", "TCD", 2016, "53.0", "44.1"),
    ("Congo, Rep.", "COG", 2015, "63.8", "34.2"),
    ("Japan", "JPN", 2015, "83.8", "8.0"),
    ("Mali", "MLI", 2015, "58.2", "43.0"),
    ("Mali", "MLI", 2016, "..", "42.6"),
    ("Niger", "NER", 2015, "60.4", "47.8"),
    ("Niger", "NER", 2016, "61.0", "47.0"),
    ("Norway", "NOR", 2015, "82.3", "11.3"),
];

/// Deprivation rows: country, year, sex, value
const DEPRIVATION: &[(&str, &str, &str, &str)] = &[
    ("Chad", "2015", "Total", "48.0"),
    ("Chad", "2015", "Female", "50.1"),
    ("Chad", "2015", "Male", "46.0"),
    ("Chad", "2017", "Total", "45.5"),
    ("Mali", "2015", "Total", "38.0"),
    ("Mali", "2015", "Female", "39.5"),
    ("Niger", "2015", "Total", "44.2"),
    ("Norway", "2015", "Total", "1.5"),
    ("Norway", "2015", "Male", "1.9"),
];

/// Population rows: country, year, population under five
const POPULATION: &[(&str, i32, &str)] = &[
    ("Chad", 2015, "2850000"),
    ("Congo, Rep.", 2015, "780000"),
    ("Japan", 2015, "5100000"),
    ("Mali", 2015, "3200000"),
    ("Niger", 2015, "3900000"),
    ("Norway", 2015, "305000"),
];

fn quote(value: &str) -> String {
    if value.contains(',') {
        format!("\"{value}\"")
    } else {
        value.to_string()
    }
}

fn write_table(dir: &Path, file_name: &str, header: &str, mut lines: Vec<String>, rng: Option<&mut StdRng>) {
    if let Some(rng) = rng {
        lines.shuffle(rng);
    }
    let mut contents = format!("{header}\n");
    for line in lines {
        contents.push_str(&line);
        contents.push('\n');
    }
    fs::write(dir.join(file_name), contents).unwrap();
}

fn write_sources(dir: &Path, mut rng: Option<StdRng>) {
    let metadata = METADATA
        .iter()
        .map(|(country, iso, year, le, cbr)| format!("{},{iso},{year},{le},{cbr}", quote(country)))
        .collect();
    write_table(
        dir,
        "country_metadata.csv",
        "Country Name,Country Code,Year,\"Life expectancy at birth, total (years)\",\"Birth rate, crude (per 1,000 people)\"",
        metadata,
        rng.as_mut(),
    );

    let deprivation = DEPRIVATION
        .iter()
        .map(|(country, year, sex, value)| format!("{},{year},{sex},{value}", quote(country)))
        .collect();
    write_table(
        dir,
        "child_deprivation.csv",
        "REF_AREA:Geographic area,TIME_PERIOD:Time period,SEX:Sex,OBS_VALUE:Observation Value",
        deprivation,
        rng.as_mut(),
    );

    let population = POPULATION
        .iter()
        .map(|(country, year, value)| format!("{},{year},{value}", quote(country)))
        .collect();
    write_table(
        dir,
        "population_under5.csv",
        "country,time_period,obs_value",
        population,
        rng.as_mut(),
    );
}

/// Write the three input sources into `dir`
pub fn write_fixture(dir: &Path) {
    write_sources(dir, None);
}

/// Write the three input sources into `dir` with rows shuffled by a seeded RNG
pub fn write_shuffled_fixture(dir: &Path, seed: u64) {
    write_sources(dir, Some(StdRng::seed_from_u64(seed)));
}

/// Number of distinct countries in the fixture
pub const FIXTURE_COUNTRIES: usize = 6;

/// Joined records: every metadata row plus the deprivation-only Chad 2017
pub const FIXTURE_RECORDS: usize = 10;
