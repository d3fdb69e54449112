//! Plain-text rendering of the root container, for non-interactive output.

use crate::ui::app::App;

/// Count label followed by one `- key: label` line per light.
pub fn render_plain(app: &App) -> String {
    let mut out = app.count_label();
    out.push('\n');
    for item in app.light_list().items() {
        out.push_str(&format!("- {}: {}\n", item.key(), item.label()));
    }
    out
}
