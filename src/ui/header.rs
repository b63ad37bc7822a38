use crate::ui::theme::{BRAND_GREEN, BRAND_YELLOW, GLOBAL_BORDER, MUTED_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

#[derive(Default)]
pub struct Header;

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self) -> Paragraph<'static> {
        let line = Line::from(vec![
            Span::raw("  "),
            Span::styled(
                "✈️ ZilTrips",
                Style::default().fg(BRAND_YELLOW).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", Style::default().fg(MUTED_TEXT)),
            Span::styled(
                "Plan smarter. Share faster. Travel better.",
                Style::default().fg(BRAND_GREEN),
            ),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
