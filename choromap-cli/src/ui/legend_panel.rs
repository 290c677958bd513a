//! Static legend panel.
//!
//! Generated from the fixed bucket scale; never recomputed from data.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use choromap::legend::{legend_rows, LEGEND_TITLE};

use super::tui_color;

/// Widget displaying the bucket legend.
pub struct LegendPanel;

impl LegendPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Widget for LegendPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = vec![Line::from(Span::styled(
            LEGEND_TITLE,
            Style::default().add_modifier(Modifier::BOLD),
        ))];

        for row in legend_rows() {
            lines.push(Line::from(vec![
                Span::styled("■ ", Style::default().fg(tui_color(row.color))),
                Span::styled(row.label, Style::default().fg(Color::White)),
            ]));
        }

        let block = Block::default().borders(Borders::ALL).title(" Legend ");
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
