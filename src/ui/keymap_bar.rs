//! Keymap help bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the keymap help bar.
pub(super) fn draw_keymap(f: &mut Frame<'_>, area: Rect, can_reload: bool, colors: &ThemeColors) {
    let keymap_text = if can_reload {
        "q:quit | s:line/scatter | m:marker | a:axes | +-:scale | b:reset bounds | r:reload | T:theme"
    } else {
        "q:quit | s:line/scatter | m:marker | a:axes | +-:scale | b:reset bounds | T:theme"
    };

    let paragraph = Paragraph::new(keymap_text).style(Style::default().fg(colors.text).bg(colors.bg));

    f.render_widget(paragraph, area);
}
