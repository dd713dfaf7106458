//! Status bar UI component.

use crate::ui::ThemeColors;
use ratatui::{layout::Rect, style::Style, widgets::Paragraph, Frame};

/// Draw the status bar.
pub(super) fn draw_status(f: &mut Frame<'_>, area: Rect, status: &str, colors: &ThemeColors) {
    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    f.render_widget(paragraph, area);
}
