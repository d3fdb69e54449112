use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::{body_regions, layout_regions};
use crate::ui::theme::{ACCENT, HEADER_TEXT};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    frame.render_widget(Header::new().widget(app.endpoint()), header);
    frame.render_widget(Clear, body);

    let (label_area, list_area) = body_regions(body);
    let label = Line::from(vec![
        Span::raw(" "),
        Span::styled(
            app.count_label(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(label), label_area);

    let list = app
        .light_list()
        .widget()
        .style(Style::default().fg(HEADER_TEXT));
    frame.render_widget(list, list_area);

    frame.render_widget(Footer::new(app.lights_state()).widget(footer), footer);
}
