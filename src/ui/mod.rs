//! User interface rendering.

pub mod formatters;
mod keymap_bar;
mod status_bar;
pub mod theme;

use crate::app::App;
use crate::error::Result;
use crate::plot::Plot;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Paragraph, Wrap},
    Frame,
};

pub use theme::ThemeColors;

/// Draw the UI.
pub fn draw(f: &mut Frame<'_>, app: &mut App) {
    let colors = ThemeColors::from_theme(&app.theme);

    // Plot, status bar, key map bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1), Constraint::Length(1)])
        .split(f.area());

    match app.plot.redraw(chunks[0], f.buffer_mut()) {
        Ok(()) => app.refresh_summary(),
        Err(err) => draw_error(f, chunks[0], &err.to_string(), &colors),
    }

    status_bar::draw_status(f, chunks[1], &app.status, &colors);
    keymap_bar::draw_keymap(f, chunks[2], app.file_path.is_some(), &colors);
}

fn draw_error(f: &mut Frame<'_>, area: Rect, message: &str, colors: &ThemeColors) {
    let paragraph = Paragraph::new(format!("Cannot draw plot: {}", message))
        .style(Style::default().fg(colors.error).bg(colors.bg))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

/// Render `plot` once into an off-screen buffer and return it as text.
pub fn render_to_text(plot: &mut Plot<'_>, width: u16, height: u16) -> Result<String> {
    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    plot.redraw(area, &mut buf)?;
    Ok(formatters::buffer_to_text(&buf))
}
