use ratatui::layout::Rect;

/// Split the screen into header, body and footer.
pub fn layout_regions(area: Rect) -> (Rect, Rect, Rect) {
    let header_height = area.height.min(3);
    let footer_height = 3.min(area.height.saturating_sub(header_height));
    let header = Rect {
        x: area.x,
        y: area.y,
        width: area.width,
        height: header_height,
    };
    let footer = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(footer_height),
        width: area.width,
        height: footer_height,
    };
    let body = Rect {
        x: area.x,
        y: area.y + header_height,
        width: area.width,
        height: area.height.saturating_sub(header_height + footer_height),
    };
    (header, body, footer)
}

/// Split the body into the count label row and the list below it.
pub fn body_regions(body: Rect) -> (Rect, Rect) {
    let label_height = body.height.min(1);
    let label = Rect {
        x: body.x,
        y: body.y,
        width: body.width,
        height: label_height,
    };
    let list = Rect {
        x: body.x,
        y: body.y + label_height,
        width: body.width,
        height: body.height.saturating_sub(label_height),
    };
    (label, list)
}
