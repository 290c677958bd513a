//! Region entity and collection.
//!
//! A [`Region`] is one geographic boundary unit from the dataset. The
//! `name`, `metric` and `affiliates` attributes are all three-valued in
//! source data (absent, empty, populated), so they are kept as explicit
//! `Option`s with substitution applied only at the point of use: a missing
//! name renders as [`UNKNOWN_REGION_NAME`], a missing metric classifies as
//! the no-data bucket, and missing affiliates never match a search.

use crate::geometry::{Bounds, Geometry, Point};

/// Display name used for regions whose dataset entry carries no name.
pub const UNKNOWN_REGION_NAME: &str = "Unknown County";

/// Index of a region within its collection.
///
/// Collections are immutable after load, so an index taken at load time
/// stays valid for the whole session.
pub type RegionId = usize;

/// One geographic boundary unit.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Region {
    /// Unique display name (`County` property). Absent when the dataset
    /// row was malformed.
    pub name: Option<String>,
    /// Numeric attribute driving the choropleth color (`Total` property).
    pub metric: Option<f64>,
    /// Raw comma-delimited affiliate list (`Entities` property).
    pub affiliates: Option<String>,
    /// Boundary shape, interpreted only for bounds and label anchoring.
    pub geometry: Geometry,
}

impl Region {
    /// The region name, substituting the placeholder when absent.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or(UNKNOWN_REGION_NAME)
    }

    /// Label anchor point: the center of the boundary bounds.
    pub fn centroid(&self) -> Option<Point> {
        self.geometry.centroid()
    }
}

/// Ordered sequence of regions, loaded once at startup.
///
/// Immutable after load; transient visual state lives on the rendering
/// surface, never on the collection itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RegionCollection {
    regions: Vec<Region>,
}

impl RegionCollection {
    pub fn new(regions: Vec<Region>) -> Self {
        Self { regions }
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    pub fn get(&self, id: RegionId) -> Option<&Region> {
        self.regions.get(id)
    }

    /// Iterator over `(id, region)` pairs in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = (RegionId, &Region)> {
        self.regions.iter().enumerate()
    }

    /// Union of every region's bounds.
    ///
    /// Returns `None` when the collection is empty or no region has
    /// usable geometry.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for region in &self.regions {
            if let Some(b) = region.geometry.bounds() {
                match bounds.as_mut() {
                    Some(acc) => acc.union(&b),
                    None => bounds = Some(b),
                }
            }
        }
        bounds
    }
}
