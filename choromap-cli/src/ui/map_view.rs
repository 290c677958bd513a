//! Map cell grid.
//!
//! The terminal stands in for the external map widget: each region is
//! drawn as one block cell placed by its centroid within the collection
//! bounds, filled with the region's active style color. Labels from the
//! search overlay are drawn beside their anchor cells.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Widget},
};

use choromap::geometry::{Bounds, Point};
use choromap::search::MapSession;
use choromap::surface::MemorySurface;

use super::state::{BaseLayer, ViewerState};
use super::tui_color;

/// Widget displaying the region cell grid.
pub struct MapView<'a> {
    session: &'a MapSession,
    surface: &'a MemorySurface,
    state: &'a ViewerState,
}

impl<'a> MapView<'a> {
    pub fn new(
        session: &'a MapSession,
        surface: &'a MemorySurface,
        state: &'a ViewerState,
    ) -> Self {
        Self {
            session,
            surface,
            state,
        }
    }

    /// Map a geographic point to a cell within `inner`.
    ///
    /// Latitude grows northward but rows grow downward, so the vertical
    /// axis is flipped. Degenerate bounds (single point) land in the
    /// middle.
    fn cell_for(bounds: &Bounds, point: Point, inner: Rect) -> (u16, u16) {
        let fx = if bounds.width() > 0.0 {
            (point.lon - bounds.min_lon) / bounds.width()
        } else {
            0.5
        };
        let fy = if bounds.height() > 0.0 {
            (bounds.max_lat - point.lat) / bounds.height()
        } else {
            0.5
        };

        let max_x = inner.width.saturating_sub(1) as f64;
        let max_y = inner.height.saturating_sub(1) as f64;
        let x = inner.x + (fx.clamp(0.0, 1.0) * max_x).round() as u16;
        let y = inner.y + (fy.clamp(0.0, 1.0) * max_y).round() as u16;
        (x, y)
    }
}

impl Widget for MapView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", self.state.dataset_name));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        // Base layer backdrop.
        if self.state.base_layer == BaseLayer::Shaded {
            let backdrop = Style::default().fg(Color::DarkGray);
            for y in inner.y..inner.y + inner.height {
                buf.set_string(inner.x, y, "·".repeat(inner.width as usize), backdrop);
            }
        }

        let regions = self.session.regions();
        let Some(bounds) = regions.bounds() else {
            let message = match &self.state.load_error {
                Some(error) => format!("Base layers only: {error}"),
                None => "No boundary data loaded".to_string(),
            };
            buf.set_stringn(
                inner.x + 1,
                inner.y + inner.height / 2,
                message,
                inner.width.saturating_sub(2) as usize,
                Style::default().fg(Color::Red),
            );
            return;
        };

        // Region cells, in dataset order.
        for (id, region) in regions.iter() {
            let Some(centroid) = region.centroid() else {
                continue;
            };
            let Some(region_style) = self.surface.style_of(id) else {
                continue;
            };

            let (x, y) = Self::cell_for(&bounds, centroid, inner);
            let mut style = Style::default().fg(tui_color(region_style.resolve().fill));
            if self.state.selected == Some(id) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            buf.set_string(x, y, "█", style);
        }

        // Search labels, drawn after the cells so they stay visible.
        let label_style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        for label in self.surface.labels() {
            let (x, y) = Self::cell_for(&bounds, label.anchor, inner);
            let text_x = (x + 2).min(inner.x + inner.width.saturating_sub(1));
            let remaining = (inner.x + inner.width).saturating_sub(text_x) as usize;
            buf.set_stringn(text_x, y, &label.text, remaining, label_style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bounds() -> Bounds {
        Bounds {
            min_lon: 34.0,
            min_lat: -4.0,
            max_lon: 42.0,
            max_lat: 4.0,
        }
    }

    #[test]
    fn test_corners_map_to_corner_cells() {
        let inner = Rect::new(1, 1, 40, 20);

        // Northwest corner of the bounds is the top-left cell.
        let (x, y) = MapView::cell_for(&bounds(), Point::new(34.0, 4.0), inner);
        assert_eq!((x, y), (1, 1));

        // Southeast corner is the bottom-right cell.
        let (x, y) = MapView::cell_for(&bounds(), Point::new(42.0, -4.0), inner);
        assert_eq!((x, y), (40, 20));
    }

    #[test]
    fn test_degenerate_bounds_center_the_cell() {
        let point = Point::new(36.0, 1.0);
        let degenerate = Bounds::from_point(point);
        let inner = Rect::new(0, 0, 41, 21);
        let (x, y) = MapView::cell_for(&degenerate, point, inner);
        assert_eq!((x, y), (20, 10));
    }

    #[test]
    fn test_out_of_bounds_points_are_clamped() {
        let inner = Rect::new(0, 0, 10, 10);
        let (x, y) = MapView::cell_for(&bounds(), Point::new(100.0, -90.0), inner);
        assert_eq!((x, y), (9, 9));
    }
}
