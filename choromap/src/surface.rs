//! Rendering surface abstraction.
//!
//! The actual map display (polygon rasterization, pan/zoom, tile layers)
//! is an external collaborator. This module defines the seam the core
//! drives: a [`MapSurface`] can restyle a region at any time, and hold a
//! set of point-anchored text labels that the highlighter clears and
//! rebuilds on every search pass.
//!
//! [`MemorySurface`] is the plain in-memory implementation used by the
//! terminal renderer and by tests.

use crate::geometry::Point;
use crate::region::{RegionCollection, RegionId};
use crate::style::RegionStyle;

/// A text annotation anchored at a region's centroid.
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub region: RegionId,
    pub text: String,
    pub anchor: Point,
}

/// An external map-display surface.
///
/// Implementations must accept a style update for any region at any time
/// and must treat `clear_labels` followed by `place_label` calls as a
/// full rebuild of the annotation layer.
pub trait MapSurface {
    /// Replace the active style of one region.
    fn set_region_style(&mut self, region: RegionId, style: RegionStyle);

    /// Remove every label annotation.
    fn clear_labels(&mut self);

    /// Add one label annotation.
    fn place_label(&mut self, label: Label);
}

/// In-memory surface holding the current style per region and the label
/// layer.
///
/// Every region always has exactly one active style; the surface is
/// created with the default classification style already applied.
#[derive(Debug, Clone, PartialEq)]
pub struct MemorySurface {
    styles: Vec<RegionStyle>,
    labels: Vec<Label>,
}

impl MemorySurface {
    /// Create a surface for `collection`, with each region showing its
    /// default classification style.
    pub fn for_collection(collection: &RegionCollection) -> Self {
        let styles = collection
            .iter()
            .map(|(_, region)| RegionStyle::classified(region.metric))
            .collect();
        Self {
            styles,
            labels: Vec::new(),
        }
    }

    /// Active style of one region.
    pub fn style_of(&self, region: RegionId) -> Option<RegionStyle> {
        self.styles.get(region).copied()
    }

    /// All active styles in region order.
    pub fn styles(&self) -> &[RegionStyle] {
        &self.styles
    }

    /// Current label annotations.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}

impl MapSurface for MemorySurface {
    fn set_region_style(&mut self, region: RegionId, style: RegionStyle) {
        if let Some(slot) = self.styles.get_mut(region) {
            *slot = style;
        } else {
            tracing::warn!(region, "Style update for unknown region ignored");
        }
    }

    fn clear_labels(&mut self) {
        self.labels.clear();
    }

    fn place_label(&mut self, label: Label) {
        self.labels.push(label);
    }
}
