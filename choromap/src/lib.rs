//! Choromap - choropleth region styling and entity search
//!
//! This library provides the core functionality for an interactive
//! choropleth viewer: a region collection loaded from a GeoJSON boundary
//! dataset, a fixed-bucket color classifier for the region metric, and a
//! search highlighter that restyles regions whose affiliate list contains
//! a queried entity name.
//!
//! # High-Level API
//!
//! ```ignore
//! use choromap::dataset;
//! use choromap::search::MapSession;
//! use choromap::surface::MemorySurface;
//!
//! let regions = dataset::load_file("counties.geojson")?;
//! let mut surface = MemorySurface::for_collection(&regions);
//! let mut session = MapSession::new(regions);
//!
//! session.render_initial(&mut surface);
//! session.apply_search("acme corp", &mut surface);
//! ```
//!
//! Rendering itself is an external concern: anything that can restyle a
//! polygon and anchor a text label implements [`surface::MapSurface`].

pub mod classify;
pub mod dataset;
pub mod geometry;
pub mod legend;
pub mod logging;
pub mod region;
pub mod search;
pub mod style;
pub mod surface;

/// Version of the choromap library and CLI.
///
/// Synchronized across all components in the workspace and injected at
/// compile time from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
