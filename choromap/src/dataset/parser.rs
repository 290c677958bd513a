//! GeoJSON feature extraction.
//!
//! Works on a parsed `serde_json::Value` rather than typed GeoJSON
//! structs so that one malformed feature (wrong property type, broken
//! coordinate array) degrades to defaults for that region instead of
//! failing the whole document.

use serde_json::Value;

use super::DatasetError;
use crate::geometry::{Geometry, Point};
use crate::region::Region;

/// Parse the features of a FeatureCollection into regions.
///
/// The root must be an object with `"type": "FeatureCollection"`; a
/// missing or non-array `features` member yields an empty collection.
pub fn parse_collection(document: &Value) -> Result<Vec<Region>, DatasetError> {
    let root_type = document
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("<missing>");
    if root_type != "FeatureCollection" {
        return Err(DatasetError::NotAFeatureCollection(root_type.to_string()));
    }

    let features = match document.get("features").and_then(Value::as_array) {
        Some(features) => features,
        None => {
            tracing::warn!("FeatureCollection has no features array");
            return Ok(Vec::new());
        }
    };

    Ok(features.iter().map(parse_feature).collect())
}

/// Parse one feature into a region, substituting defaults for anything
/// malformed.
fn parse_feature(feature: &Value) -> Region {
    let properties = feature.get("properties");

    let name = property_string(properties, "County");
    let metric = properties
        .and_then(|p| p.get("Total"))
        .and_then(Value::as_f64);
    let affiliates = property_string(properties, "Entities");

    if name.is_none() {
        tracing::warn!("Feature without County property, using placeholder name");
    }

    Region {
        name,
        metric,
        affiliates,
        geometry: parse_geometry(feature.get("geometry")),
    }
}

/// Read a string property, treating a wrong-typed value as absent.
fn property_string(properties: Option<&Value>, key: &str) -> Option<String> {
    properties
        .and_then(|p| p.get(key))
        .and_then(Value::as_str)
        .map(str::to_string)
}

/// Parse a GeoJSON geometry member into boundary rings.
///
/// Only Polygon and MultiPolygon are meaningful for regions; anything
/// else (or a broken coordinate array) becomes `Geometry::Empty`.
fn parse_geometry(geometry: Option<&Value>) -> Geometry {
    let Some(geometry) = geometry else {
        return Geometry::Empty;
    };

    let geometry_type = geometry.get("type").and_then(Value::as_str).unwrap_or("");
    let coordinates = geometry.get("coordinates");

    match (geometry_type, coordinates) {
        ("Polygon", Some(coords)) => match parse_rings(coords) {
            Some(rings) => Geometry::Polygon(rings),
            None => {
                tracing::warn!("Polygon with malformed coordinates, dropping geometry");
                Geometry::Empty
            }
        },
        ("MultiPolygon", Some(coords)) => {
            let polygons = coords
                .as_array()
                .and_then(|polys| polys.iter().map(parse_rings).collect::<Option<Vec<_>>>());
            match polygons {
                Some(polygons) => Geometry::MultiPolygon(polygons),
                None => {
                    tracing::warn!("MultiPolygon with malformed coordinates, dropping geometry");
                    Geometry::Empty
                }
            }
        }
        (other, _) => {
            if !other.is_empty() {
                tracing::debug!(geometry_type = other, "Unsupported geometry type");
            }
            Geometry::Empty
        }
    }
}

/// Parse a ring list: `[[[lon, lat], ...], ...]`.
fn parse_rings(value: &Value) -> Option<Vec<Vec<Point>>> {
    value
        .as_array()?
        .iter()
        .map(|ring| {
            ring.as_array()?
                .iter()
                .map(parse_position)
                .collect::<Option<Vec<Point>>>()
        })
        .collect()
}

/// Parse one position: `[lon, lat]` with optional extra members.
fn parse_position(value: &Value) -> Option<Point> {
    let position = value.as_array()?;
    let lon = position.first()?.as_f64()?;
    let lat = position.get(1)?.as_f64()?;
    Some(Point::new(lon, lat))
}
