//! Boundary geometry types.
//!
//! Regions carry their boundary shape as opaque polygon rings. The only
//! interpretation this crate performs is computing a bounding box and its
//! center point, which is where the rendering surface anchors labels. The
//! center of the bounds stands in for the region centroid, matching what
//! the map widgets this library targets expose.

use std::fmt;

/// Valid latitude range for boundary coordinates.
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range for boundary coordinates.
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// A geographic point in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Longitude in degrees (east-west).
    pub lon: f64,
    /// Latitude in degrees (north-south).
    pub lat: f64,
}

impl Point {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}

/// Axis-aligned bounding box of a boundary shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lon: f64,
    pub min_lat: f64,
    pub max_lon: f64,
    pub max_lat: f64,
}

impl Bounds {
    /// Bounds containing a single point.
    pub fn from_point(p: Point) -> Self {
        Self {
            min_lon: p.lon,
            min_lat: p.lat,
            max_lon: p.lon,
            max_lat: p.lat,
        }
    }

    /// Extend the bounds to contain `p`.
    pub fn extend(&mut self, p: Point) {
        self.min_lon = self.min_lon.min(p.lon);
        self.min_lat = self.min_lat.min(p.lat);
        self.max_lon = self.max_lon.max(p.lon);
        self.max_lat = self.max_lat.max(p.lat);
    }

    /// Merge another bounds into this one.
    pub fn union(&mut self, other: &Bounds) {
        self.extend(Point::new(other.min_lon, other.min_lat));
        self.extend(Point::new(other.max_lon, other.max_lat));
    }

    /// Center point of the bounds.
    pub fn center(&self) -> Point {
        Point::new(
            (self.min_lon + self.max_lon) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        )
    }

    /// Width of the bounds in degrees of longitude.
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Height of the bounds in degrees of latitude.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }
}

/// Boundary shape of a single region.
///
/// Rings are stored exactly as parsed from the dataset; no winding or
/// closure validation is performed since the shape is only ever reduced
/// to its bounding box.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Geometry {
    /// No usable geometry was present in the dataset.
    #[default]
    Empty,
    /// A single polygon: one exterior ring plus any interior rings.
    Polygon(Vec<Vec<Point>>),
    /// Multiple polygons, each with its own ring list.
    MultiPolygon(Vec<Vec<Vec<Point>>>),
}

impl Geometry {
    /// Bounding box over every vertex of the shape.
    ///
    /// Returns `None` for empty geometry or geometry without vertices.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for point in self.points() {
            match bounds.as_mut() {
                Some(b) => b.extend(point),
                None => bounds = Some(Bounds::from_point(point)),
            }
        }
        bounds
    }

    /// Center of the bounding box.
    ///
    /// This is where label annotations for the region are anchored.
    pub fn centroid(&self) -> Option<Point> {
        self.bounds().map(|b| b.center())
    }

    /// Iterator over every vertex in every ring.
    fn points(&self) -> Box<dyn Iterator<Item = Point> + '_> {
        match self {
            Geometry::Empty => Box::new(std::iter::empty()),
            Geometry::Polygon(rings) => Box::new(rings.iter().flatten().copied()),
            Geometry::MultiPolygon(polys) => {
                Box::new(polys.iter().flatten().flatten().copied())
            }
        }
    }
}
