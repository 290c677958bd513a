//! Map session state.
//!
//! [`MapSession`] is the explicit application-state object for one page
//! of the viewer: it owns the loaded region collection, the transient
//! label overlay, and the current query. Input handlers borrow it; there
//! is no ambient global state.

use crate::region::RegionCollection;
use crate::style::RegionStyle;
use crate::surface::{Label, MapSurface};

use super::{matches, normalize_query};

/// Application state for one viewing session.
///
/// The collection is immutable after construction. Every pass over it
/// (initial render or search) runs synchronously to completion and
/// unconditionally replaces each region's style on the surface, so a new
/// pass always supersedes the previous one without any diffing.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSession {
    regions: RegionCollection,
    overlay: Vec<Label>,
    query: String,
}

impl MapSession {
    /// Create a session over an already-loaded collection.
    pub fn new(regions: RegionCollection) -> Self {
        Self {
            regions,
            overlay: Vec::new(),
            query: String::new(),
        }
    }

    pub fn regions(&self) -> &RegionCollection {
        &self.regions
    }

    /// Labels for currently-matched regions, one per match.
    pub fn overlay(&self) -> &[Label] {
        &self.overlay
    }

    /// The active normalized query; empty when no search is in effect.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Render every region with its default classification style.
    ///
    /// Called once after load; equivalent to `apply_search("")`.
    pub fn render_initial<S: MapSurface>(&mut self, surface: &mut S) {
        self.apply_search("", surface);
    }

    /// Apply a search query: full synchronous re-pass over the
    /// collection.
    ///
    /// Clears the label overlay, then styles each region as either a
    /// highlight (query is a full entry of its affiliate list) or its
    /// default classification style. An empty-after-trim query reverts
    /// every region to the default style and leaves the overlay empty.
    ///
    /// Regions with missing or empty affiliate data never match and are
    /// always restyled; a region without usable geometry is highlighted
    /// but gets no label since there is nowhere to anchor one.
    pub fn apply_search<S: MapSurface>(&mut self, raw_query: &str, surface: &mut S) {
        let query = normalize_query(raw_query);

        self.overlay.clear();
        surface.clear_labels();

        let mut matched = 0usize;
        for (id, region) in self.regions.iter() {
            let is_match = !query.is_empty() && matches(region.affiliates.as_deref(), &query);

            if is_match {
                matched += 1;
                surface.set_region_style(id, RegionStyle::Highlight);
                match region.centroid() {
                    Some(anchor) => {
                        let label = Label {
                            region: id,
                            text: region.display_name().to_string(),
                            anchor,
                        };
                        self.overlay.push(label.clone());
                        surface.place_label(label);
                    }
                    None => {
                        tracing::debug!(
                            region = region.display_name(),
                            "Matched region has no geometry, skipping label"
                        );
                    }
                }
            } else {
                surface.set_region_style(id, RegionStyle::classified(region.metric));
            }
        }

        if !query.is_empty() {
            tracing::debug!(query = %query, matched, "Search pass complete");
        }
        self.query = query;
    }

    /// Number of regions matching the active query.
    pub fn match_count(&self) -> usize {
        self.overlay.len()
    }
}
