//! Search input bar.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use choromap::search::MapSession;

use super::state::ViewerState;

/// Widget displaying the free-text search field and the match count.
pub struct SearchBar<'a> {
    session: &'a MapSession,
    state: &'a ViewerState,
}

impl<'a> SearchBar<'a> {
    pub fn new(session: &'a MapSession, state: &'a ViewerState) -> Self {
        Self { session, state }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let matches = if self.session.query().is_empty() {
            String::new()
        } else {
            format!("  {} match(es)", self.session.match_count())
        };

        let line = Line::from(vec![
            Span::styled("Search entity: ", Style::default().fg(Color::White)),
            Span::styled(
                self.state.input.as_str(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("▏", Style::default().fg(Color::White)),
            Span::styled(matches, Style::default().fg(Color::Cyan)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" choromap v{} ", choromap::VERSION));
        Paragraph::new(line).block(block).render(area, buf);
    }
}
