//! Region detail panel.
//!
//! Terminal counterpart of the original per-region popup: shows the
//! name and metric of the region under the inspection cursor.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use choromap::search::MapSession;

use super::state::ViewerState;

/// Widget displaying details for the selected region.
pub struct DetailPanel<'a> {
    session: &'a MapSession,
    state: &'a ViewerState,
}

impl<'a> DetailPanel<'a> {
    pub fn new(session: &'a MapSession, state: &'a ViewerState) -> Self {
        Self { session, state }
    }
}

impl Widget for DetailPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = match self
            .state
            .selected
            .and_then(|id| self.session.regions().get(id))
        {
            Some(region) => {
                let metric = region
                    .metric
                    .map_or_else(|| "—".to_string(), |m| format!("{m}"));
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled("County: ", Style::default().fg(Color::DarkGray)),
                        Span::styled(
                            region.display_name().to_string(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                    ]),
                    Line::from(vec![
                        Span::styled("Total Partners: ", Style::default().fg(Color::DarkGray)),
                        Span::raw(metric),
                    ]),
                ];
                if let Some(affiliates) = &region.affiliates {
                    lines.push(Line::from(vec![
                        Span::styled("Entities: ", Style::default().fg(Color::DarkGray)),
                        Span::raw(affiliates.clone()),
                    ]));
                }
                lines
            }
            None => vec![Line::from(Span::styled(
                "↑/↓ to inspect a region",
                Style::default().fg(Color::DarkGray),
            ))],
        };

        let block = Block::default().borders(Borders::ALL).title(" Region ");
        Paragraph::new(lines).block(block).render(area, buf);
    }
}
