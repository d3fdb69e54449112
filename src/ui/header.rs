use crate::light::Endpoint;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

pub struct Header;

impl Default for Header {
    fn default() -> Self {
        Self::new()
    }
}

impl Header {
    pub fn new() -> Self {
        Self
    }

    pub fn widget(&self, endpoint: &Endpoint) -> Paragraph<'static> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);
        let endpoint_text = if endpoint.is_empty() {
            "(no endpoint)".to_string()
        } else {
            endpoint.to_string()
        };
        let line = Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled("Lightboard", Style::default().fg(ACCENT)),
            Span::styled("  │  ", separator_style),
            Span::styled(endpoint_text, text_style),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
