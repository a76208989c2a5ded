//! Mortality proxy pipeline
//!
//! Join → score → aggregate, each stage a pure function producing a new
//! table from the previous one.

pub mod builder;
pub mod join;
pub mod scoring;
pub mod statistics;

// Re-export commonly used items
pub use builder::{InputCounts, MortalityReport, ReportBuilder};
pub use join::build_country_year_table;
pub use scoring::{
    deprivation_factor, estimated_mortality_per_1000, life_factor, mortality_proxy, score_record,
    score_records,
};
pub use statistics::{count_factorless, ranked_countries, summarize_by_country, summarize_by_year};
