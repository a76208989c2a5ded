//! Factory functions for source loaders

use std::sync::Arc;

use super::{DeprivationSource, MetadataSource, PopulationSource, SourceLoader};
use crate::error::{ReportError, Result};

/// Logical names of every required source, in load order
pub const SOURCE_NAMES: [&str; 3] = [
    PopulationSource::NAME,
    DeprivationSource::NAME,
    MetadataSource::NAME,
];

/// Create a source loader from its logical name
pub fn source_from_name(name: &str) -> Result<Arc<dyn SourceLoader>> {
    match name.to_lowercase().as_str() {
        PopulationSource::NAME => Ok(Arc::new(PopulationSource::new())),
        DeprivationSource::NAME => Ok(Arc::new(DeprivationSource::new())),
        MetadataSource::NAME => Ok(Arc::new(MetadataSource::new())),
        _ => Err(ReportError::Validation(format!("Unknown source: {name}"))),
    }
}
