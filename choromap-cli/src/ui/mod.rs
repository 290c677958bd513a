//! Terminal UI for the choropleth viewer.
//!
//! Widget-per-concern layout: the map cell grid, the static legend, the
//! region detail panel and the search bar each render one section of the
//! frame.

pub mod detail_panel;
pub mod legend_panel;
pub mod map_view;
pub mod search_bar;
pub mod state;

pub use state::{BaseLayer, ViewerEvent, ViewerState};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use choromap::search::MapSession;
use choromap::surface::MemorySurface;

use detail_panel::DetailPanel;
use legend_panel::LegendPanel;
use map_view::MapView;
use search_bar::SearchBar;

/// Convert a display color into a terminal color.
pub fn tui_color(color: choromap::style::Color) -> Color {
    Color::Rgb(color.r, color.g, color.b)
}

/// Render one frame of the viewer.
///
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │ Search bar (3 lines)                        │
/// ├─────────────────────────────────────────────┤
/// │ Map cell grid                               │
/// ├──────────────────────┬──────────────────────┤
/// │ Legend (7 lines)     │ Region detail        │
/// ├──────────────────────┴──────────────────────┤
/// │ Key hints (1 line)                          │
/// └─────────────────────────────────────────────┘
/// ```
pub fn render(
    frame: &mut Frame,
    session: &MapSession,
    surface: &MemorySurface,
    state: &ViewerState,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Search bar
            Constraint::Min(10),    // Map
            Constraint::Length(7),  // Legend + detail
            Constraint::Length(1),  // Key hints
        ])
        .split(frame.area());

    frame.render_widget(SearchBar::new(session, state), chunks[0]);
    frame.render_widget(MapView::new(session, surface, state), chunks[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(20)])
        .split(chunks[2]);

    frame.render_widget(LegendPanel::new(), bottom[0]);
    frame.render_widget(DetailPanel::new(session, state), bottom[1]);

    let hints = format!(
        "Type to search · Esc clear · ↑/↓ inspect · Tab basemap ({}) · Ctrl+C quit",
        state.base_layer.name()
    );
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        chunks[3],
    );
}
