//! Boundary dataset loading.
//!
//! The dataset is a GeoJSON FeatureCollection where each feature carries
//! a boundary geometry and a properties map with at least `County`
//! (string) and `Total` (number), and optionally `Entities` (a
//! comma-delimited string of affiliate names).
//!
//! Loading is strict about the document as a whole (it must parse as
//! JSON and be a FeatureCollection) and lenient about individual
//! features: malformed or missing properties degrade to defaults per
//! region and never abort the render.
//!
//! # Example
//!
//! ```ignore
//! use choromap::dataset;
//!
//! let regions = dataset::load_file("counties.geojson")?;
//! println!("{} regions loaded", regions.len());
//! ```

mod parser;

pub use parser::parse_collection;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use crate::region::RegionCollection;

/// Error type for dataset loading.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Boundary dataset not found at: {0}")]
    NotFound(PathBuf),
    #[error("Failed to parse boundary dataset: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Boundary dataset root must be a FeatureCollection, found: {0}")]
    NotAFeatureCollection(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Load a region collection from a GeoJSON file on disk.
///
/// # Errors
///
/// Returns an error if the file is missing, unreadable, not valid JSON,
/// or not a FeatureCollection. Per-feature problems are recovered by
/// default substitution and logged, never returned.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<RegionCollection, DatasetError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(DatasetError::NotFound(path.to_path_buf()));
    }

    tracing::debug!(path = %path.display(), "Loading boundary dataset");
    let file = File::open(path)?;
    from_reader(BufReader::new(file))
}

/// Load a region collection from a GeoJSON reader.
pub fn from_reader<R: std::io::Read>(reader: R) -> Result<RegionCollection, DatasetError> {
    let document: serde_json::Value = serde_json::from_reader(reader)?;
    let regions = parser::parse_collection(&document)?;

    tracing::info!(count = regions.len(), "Loaded region collection");
    Ok(RegionCollection::new(regions))
}

/// Load a region collection from an in-memory GeoJSON string.
pub fn from_str(geojson: &str) -> Result<RegionCollection, DatasetError> {
    from_reader(geojson.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_file("/nonexistent/counties.geojson").unwrap_err();
        assert!(matches!(err, DatasetError::NotFound(_)));
    }

    #[test]
    fn test_invalid_json_is_reported() {
        let err = from_str("{not json").unwrap_err();
        assert!(matches!(err, DatasetError::Json(_)));
    }

    #[test]
    fn test_non_feature_collection_root_is_rejected() {
        let err = from_str(r#"{"type": "Feature"}"#).unwrap_err();
        match err {
            DatasetError::NotAFeatureCollection(found) => assert_eq!(found, "Feature"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_feature_collection_loads() {
        let regions = from_str(r#"{"type": "FeatureCollection", "features": []}"#).unwrap();
        assert!(regions.is_empty());
    }
}
