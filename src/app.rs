//! Application state and logic.

use std::path::PathBuf;

use crate::data::DataReader;
use crate::plot::Plot;
use crate::ui::formatters::{format_number, format_stat_value};
use crate::ui::ThemeColors;
use ratatui::{
    style::Style,
    widgets::{Block, Borders},
};

/// Application theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    /// Gruvbox dark theme.
    GruvboxDark,
    /// Gruvbox light theme.
    GruvboxLight,
}

impl Theme {
    /// Get the next theme in the cycle.
    pub fn next(self) -> Self {
        match self {
            Theme::GruvboxDark => Theme::GruvboxLight,
            Theme::GruvboxLight => Theme::GruvboxDark,
        }
    }

    /// Get the theme name.
    pub fn name(self) -> &'static str {
        match self {
            Theme::GruvboxDark => "Gruvbox Dark",
            Theme::GruvboxLight => "Gruvbox Light",
        }
    }
}

/// Viewer state.
#[derive(Debug)]
pub struct App {
    /// The plot being shown.
    pub plot: Plot<'static>,
    /// File the data came from, if any (stdin otherwise).
    pub file_path: Option<PathBuf>,
    /// Plot title.
    pub title: String,
    /// Status message.
    pub status: String,
    /// Current theme.
    pub theme: Theme,
    /// Status prefix waiting for a summary once the plot has been drawn.
    pending_summary: Option<&'static str>,
}

impl App {
    /// Create a new application instance.
    pub fn new(plot: Plot<'static>, file_path: Option<PathBuf>, title: String, theme: Theme) -> Self {
        let mut app = Self {
            plot,
            file_path,
            title,
            status: String::new(),
            theme,
            pending_summary: None,
        };
        app.apply_theme();
        app.status = app.summary();
        app.pending_summary = Some("");
        app
    }

    /// Push theme colors into the plot and rebuild the frame.
    pub fn apply_theme(&mut self) {
        let colors = ThemeColors::from_theme(&self.theme);
        let config = self.plot.config_mut();
        config.line_colors = colors.lines.clone();
        config.axes_color = colors.axes;
        self.plot.set_block(Some(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors.border))
                .title(format!(" {} ", self.title))
                .title_style(Style::default().fg(colors.heading))
                .style(Style::default().bg(colors.bg)),
        ));
    }

    /// One-line description of the data and current settings.
    pub fn summary(&self) -> String {
        let data = self.plot.series();
        let samples: usize = data.iter().map(|s| s.len()).sum();
        let config = self.plot.config();
        let bounds = self.plot.bounds();
        let range = if bounds.has_values() {
            format!(
                " | y [{}, {}]",
                format_stat_value(bounds.y_min),
                format_stat_value(bounds.y_max)
            )
        } else {
            String::new()
        };
        format!(
            "{} series, {} samples | {} / {} | scale {}{}",
            data.len(),
            format_number(samples),
            config.kind.name(),
            config.marker.name(),
            config.horizontal_scale,
            range
        )
    }

    /// Rewrite the status line with a fresh summary if one is pending.
    ///
    /// Bounds only exist after a redraw, so the viewer calls this once the plot
    /// has been drawn.
    pub fn refresh_summary(&mut self) {
        if let Some(prefix) = self.pending_summary.take() {
            self.status = format!("{}{}", prefix, self.summary());
        }
    }

    /// Switch between line and scatter.
    pub fn toggle_kind(&mut self) {
        let kind = self.plot.config().kind.next();
        self.plot.set_kind(kind);
        self.status = format!("Chart: {}", self.plot.config().kind.name());
    }

    /// Switch between dot and braille markers.
    pub fn toggle_marker(&mut self) {
        let config = self.plot.config_mut();
        config.marker = config.marker.next();
        self.status = format!("Marker: {}", self.plot.config().marker.name());
    }

    /// Show or hide the axes.
    pub fn toggle_axes(&mut self) {
        let config = self.plot.config_mut();
        config.show_axes = !config.show_axes;
        self.status = if config.show_axes {
            "Axes shown".to_string()
        } else {
            "Axes hidden".to_string()
        };
    }

    /// Spread samples further apart.
    pub fn increase_scale(&mut self) {
        let config = self.plot.config_mut();
        config.horizontal_scale = config.horizontal_scale.saturating_add(1);
        self.status = format!("Scale: {}", config.horizontal_scale);
    }

    /// Pack samples closer together.
    pub fn decrease_scale(&mut self) {
        let config = self.plot.config_mut();
        config.horizontal_scale = config.horizontal_scale.saturating_sub(1).max(1);
        self.status = format!("Scale: {}", config.horizontal_scale);
    }

    /// Cycle through themes.
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        self.apply_theme();
        self.status = format!("Theme: {}", self.theme.name());
    }

    /// Drop sticky bounds so the next frame autoscales to the current data.
    pub fn reset_bounds(&mut self) {
        self.plot.reset_bounds();
        self.status = "Bounds reset".to_string();
    }

    /// Re-read the data file. Bounds keep widening across reloads.
    pub fn reload(&mut self) {
        let Some(path) = self.file_path.clone() else {
            self.status = "Nothing to reload (data came from stdin)".to_string();
            return;
        };
        match DataReader::read_file(&path) {
            Ok(data) => {
                self.plot.set_data(data);
                self.status = format!("Reloaded | {}", self.summary());
                self.pending_summary = Some("Reloaded | ");
            }
            Err(e) => {
                tracing::warn!(error = %e, "reload failed");
                self.status = format!("Reload failed: {}", e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plot::{ChartKind, Marker};
    use crate::series::SeriesSet;
    use ratatui::{buffer::Buffer, layout::Rect};

    fn app() -> App {
        let plot = Plot::default().data(SeriesSet::from_rows(vec![vec![1.0, 2.0]]));
        App::new(plot, None, "test".to_string(), Theme::GruvboxDark)
    }

    #[test]
    fn theme_colors_flow_into_plot() {
        let mut app = app();
        let dark = ThemeColors::from_theme(&Theme::GruvboxDark);
        assert_eq!(app.plot.config().line_colors, dark.lines);

        app.cycle_theme();
        let light = ThemeColors::from_theme(&Theme::GruvboxLight);
        assert_eq!(app.theme, Theme::GruvboxLight);
        assert_eq!(app.plot.config().axes_color, light.axes);
    }

    #[test]
    fn scale_never_drops_below_one() {
        let mut app = app();
        app.decrease_scale();
        assert_eq!(app.plot.config().horizontal_scale, 1);
        app.increase_scale();
        app.increase_scale();
        assert_eq!(app.plot.config().horizontal_scale, 3);
    }

    #[test]
    fn toggles_flip_settings() {
        let mut app = app();
        app.toggle_kind();
        app.toggle_marker();
        app.toggle_axes();
        let config = app.plot.config();
        assert_eq!(config.kind, ChartKind::Scatter);
        assert_eq!(config.marker, Marker::Dot);
        assert!(!config.show_axes);
    }

    #[test]
    fn reload_without_file_keeps_data() {
        let mut app = app();
        app.reload();
        assert!(app.status.contains("stdin"));
        assert_eq!(app.plot.series().len(), 1);
    }

    #[test]
    fn summary_gains_range_after_first_draw() {
        let mut app = app();
        assert!(!app.status.contains("y ["));

        let area = Rect::new(0, 0, 30, 10);
        let mut buf = Buffer::empty(area);
        app.plot.redraw(area, &mut buf).unwrap();
        app.refresh_summary();
        assert!(app.status.ends_with("y [1.0000, 2.0000]"));

        app.status = "Axes hidden".to_string();
        app.refresh_summary();
        assert_eq!(app.status, "Axes hidden");
    }

    #[test]
    fn summary_mentions_settings() {
        let app = app();
        assert!(app.summary().starts_with("1 series, 2 samples | Line / Braille | scale 1"));
    }
}
