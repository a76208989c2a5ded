//! Column-name harmonization
//!
//! Each source declares a table of aliases per canonical column. Headers are
//! compared after trimming, stripping a byte-order mark and lowercasing. A
//! canonical name is claimed at most once: a column already carrying the
//! canonical name wins over any alias, and otherwise the first alias in file
//! order wins. Unclaimed columns keep their original header.

use std::collections::{HashMap, HashSet};

use arrow::record_batch::RecordBatch;
use log::debug;

use crate::error::Result;
use crate::utils::arrow::rename_columns;

/// Aliases that map onto one canonical column
#[derive(Debug, Clone, Copy)]
pub struct ColumnAlias {
    /// Canonical column name
    pub canonical: &'static str,
    /// Accepted header spellings, already in normalized (lowercase) form
    pub aliases: &'static [&'static str],
}

impl ColumnAlias {
    /// Create an alias entry
    #[must_use]
    pub const fn new(canonical: &'static str, aliases: &'static [&'static str]) -> Self {
        Self { canonical, aliases }
    }

    fn matches(&self, normalized: &str) -> bool {
        self.aliases.iter().any(|alias| *alias == normalized)
    }
}

/// Normalize a header for comparison
#[must_use]
pub fn normalize_header(name: &str) -> String {
    name.trim_start_matches('\u{feff}').trim().to_lowercase()
}

/// Map a full header row to canonical names
///
/// The result has one entry per input header, in the same order.
#[must_use]
pub fn harmonize_names(names: &[&str], aliases: &[ColumnAlias]) -> Vec<String> {
    let normalized: Vec<String> = names.iter().map(|n| normalize_header(n)).collect();
    let mut result: Vec<Option<String>> = vec![None; names.len()];
    let mut claimed: HashSet<&'static str> = HashSet::new();

    // Exact canonical names first
    for alias in aliases {
        if let Some(idx) = normalized.iter().position(|n| n == alias.canonical) {
            result[idx] = Some(alias.canonical.to_string());
            claimed.insert(alias.canonical);
        }
    }

    for (idx, header) in normalized.iter().enumerate() {
        if result[idx].is_some() {
            continue;
        }
        if let Some(alias) = aliases
            .iter()
            .find(|a| !claimed.contains(a.canonical) && a.matches(header))
        {
            debug!("Renaming column '{}' to '{}'", names[idx], alias.canonical);
            result[idx] = Some(alias.canonical.to_string());
            claimed.insert(alias.canonical);
        }
    }

    result
        .into_iter()
        .zip(names)
        .map(|(canonical, original)| canonical.unwrap_or_else(|| original.trim().to_string()))
        .collect()
}

/// Rename the columns of a batch to their canonical names
pub fn harmonize_batch(batch: &RecordBatch, aliases: &[ColumnAlias]) -> Result<RecordBatch> {
    let schema = batch.schema();
    let names: Vec<&str> = schema.fields().iter().map(|f| f.name().as_str()).collect();
    let renamed = harmonize_names(&names, aliases);

    let mapping: HashMap<String, String> = names
        .iter()
        .map(|n| (*n).to_string())
        .zip(renamed)
        .collect();

    rename_columns(batch, |name| {
        mapping
            .get(name)
            .cloned()
            .unwrap_or_else(|| name.to_string())
    })
}
