use crate::ui::lights::LightsState;
use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const QUIT_HINT: &str = "q/Esc: Quit";

/// Bottom bar: load status on the left, quit hint on the right.
pub struct Footer<'a> {
    lights: &'a LightsState,
}

impl<'a> Footer<'a> {
    pub fn new(lights: &'a LightsState) -> Self {
        Self { lights }
    }

    /// Load status text. A failed fetch reads the same as one still pending.
    pub fn status(&self) -> &'static str {
        if self.lights.is_loaded() {
            "Loaded"
        } else {
            "Waiting for light server"
        }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let status = format!(" {}", self.status());
        let hint = format!("{QUIT_HINT} ");

        let content_width = area.width.saturating_sub(2) as usize;
        let padding = content_width
            .saturating_sub(status.chars().count())
            .saturating_sub(hint.chars().count());

        let status_color = if self.lights.is_loaded() {
            ACCENT
        } else {
            HEADER_SEPARATOR
        };
        let dim = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(status, Style::default().fg(status_color)),
            Span::raw(" ".repeat(padding)),
            Span::styled(hint, dim),
        ]);

        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
