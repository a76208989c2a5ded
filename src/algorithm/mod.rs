//! Algorithm implementations for the report workflow
//!
//! This module contains the mortality proxy pipeline: joining the input
//! tables, scoring each country-year and aggregating the scores.

pub mod mortality;
