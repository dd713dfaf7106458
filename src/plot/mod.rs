//! Line and scatter plots for character-cell terminals.
//!
//! A [`Plot`] keeps its configuration and its autoscale [`Bounds`] between
//! redraws. Each [`Plot::redraw`]:
//!
//! 1. validates the configuration against the current data,
//! 2. draws the optional frame,
//! 3. widens the bounds with the current data,
//! 4. draws the axes and tick labels when enabled,
//! 5. plans and paints the marks for the `{kind × marker}` combination.
//!
//! Bounds are sticky: they never shrink while the plot lives, so a dataset with
//! a narrower range is drawn against the widest range seen so far. Call
//! [`Plot::reset_bounds`] to start over.
//!
//! # Example
//!
//! ```
//! use cellplot::plot::{ChartKind, Marker, Plot};
//! use cellplot::series::SeriesSet;
//! use ratatui::{buffer::Buffer, layout::Rect};
//!
//! let mut plot = Plot::default()
//!     .kind(ChartKind::Line)
//!     .marker(Marker::Dot)
//!     .data(SeriesSet::from_rows(vec![vec![1.0, 3.0, 2.0]]));
//!
//! let area = Rect::new(0, 0, 20, 8);
//! let mut buf = Buffer::empty(area);
//! plot.redraw(area, &mut buf)?;
//! assert_eq!(plot.bounds().y_max, 3.0);
//! # Ok::<(), cellplot::PlotError>(())
//! ```

pub mod axes;
pub mod bounds;
pub mod mapper;
pub mod render;

pub use axes::{AxisLabeler, AxisLayout, Tick};
pub use bounds::Bounds;
pub use mapper::{CoordinateMapper, GridPoint};
pub use render::{plan, DrawCommand};

use crate::error::{PlotError, Result};
use crate::series::{Labels, SeriesSet};
use crate::ui::theme::{DEFAULT_AXES_COLOR, DEFAULT_LINE_COLORS};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Widget},
};

/// Glyph used by the dot marker.
pub const DOT: char = '•';

/// How samples are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    /// Every series is a sequence of values; the index is the X coordinate.
    #[default]
    Line,
    /// Two series paired by index: X values then Y values.
    Scatter,
}

impl ChartKind {
    /// Get the other chart kind.
    pub fn next(self) -> Self {
        match self {
            ChartKind::Line => ChartKind::Scatter,
            ChartKind::Scatter => ChartKind::Line,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Scatter => "Scatter",
        }
    }
}

/// Marker resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Marker {
    /// Fine: braille, 2×4 sub-cells per terminal cell. Line charts connect
    /// consecutive samples.
    #[default]
    Braille,
    /// Coarse: one glyph per terminal cell.
    Dot,
}

impl Marker {
    /// Get the other marker.
    pub fn next(self) -> Self {
        match self {
            Marker::Braille => Marker::Dot,
            Marker::Dot => Marker::Braille,
        }
    }

    /// Get display name.
    pub fn name(self) -> &'static str {
        match self {
            Marker::Braille => "Braille",
            Marker::Dot => "Dot",
        }
    }
}

/// Plot settings that persist across redraws.
#[derive(Debug, Clone, PartialEq)]
pub struct PlotConfig {
    /// Line or scatter.
    pub kind: ChartKind,
    /// Dot or braille.
    pub marker: Marker,
    /// Cell columns between consecutive samples. Must be at least 1.
    pub horizontal_scale: u16,
    /// Draw axes, ticks and labels.
    pub show_axes: bool,
    /// Series colors by index, cycling when there are more series.
    pub line_colors: Vec<Color>,
    /// Axis line and tick label color.
    pub axes_color: Color,
    /// Glyph for the dot marker.
    pub dot_marker: char,
    /// Gutter and gap sizes.
    pub layout: AxisLayout,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            kind: ChartKind::Line,
            marker: Marker::Braille,
            horizontal_scale: 1,
            show_axes: true,
            line_colors: DEFAULT_LINE_COLORS.to_vec(),
            axes_color: DEFAULT_AXES_COLOR,
            dot_marker: DOT,
            layout: AxisLayout::default(),
        }
    }
}

/// A line or scatter plot widget.
#[derive(Debug, Clone, Default)]
pub struct Plot<'a> {
    data: SeriesSet,
    labels: Labels,
    config: PlotConfig,
    bounds: Bounds,
    block: Option<Block<'a>>,
}

impl<'a> Plot<'a> {
    /// Create a plot from a configuration.
    pub fn new(config: PlotConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Set the series to draw.
    #[must_use]
    pub fn data(mut self, data: SeriesSet) -> Self {
        self.data = data;
        self
    }

    /// Set tick label overrides.
    #[must_use]
    pub fn labels(mut self, labels: Labels) -> Self {
        self.labels = labels;
        self
    }

    /// Set the chart kind. Changing it drops accumulated bounds.
    #[must_use]
    pub fn kind(mut self, kind: ChartKind) -> Self {
        self.set_kind(kind);
        self
    }

    /// Set the marker.
    #[must_use]
    pub fn marker(mut self, marker: Marker) -> Self {
        self.config.marker = marker;
        self
    }

    /// Set the horizontal scale factor.
    #[must_use]
    pub fn horizontal_scale(mut self, scale: u16) -> Self {
        self.config.horizontal_scale = scale;
        self
    }

    /// Show or hide the axes.
    #[must_use]
    pub fn show_axes(mut self, show: bool) -> Self {
        self.config.show_axes = show;
        self
    }

    /// Set the series palette.
    #[must_use]
    pub fn line_colors(mut self, colors: Vec<Color>) -> Self {
        self.config.line_colors = colors;
        self
    }

    /// Set the axis color.
    #[must_use]
    pub fn axes_color(mut self, color: Color) -> Self {
        self.config.axes_color = color;
        self
    }

    /// Set the dot marker glyph.
    #[must_use]
    pub fn dot_marker(mut self, dot: char) -> Self {
        self.config.dot_marker = dot;
        self
    }

    /// Wrap the plot in a block.
    #[must_use]
    pub fn block(mut self, block: Block<'a>) -> Self {
        self.block = Some(block);
        self
    }

    /// Replace the series for the next redraw.
    pub fn set_data(&mut self, data: SeriesSet) {
        self.data = data;
    }

    /// Replace the tick label overrides for the next redraw.
    pub fn set_labels(&mut self, labels: Labels) {
        self.labels = labels;
    }

    /// Switch the chart kind.
    ///
    /// Line bounds span every series while scatter bounds split X from Y, so
    /// bounds from the old kind are dropped when the kind changes.
    pub fn set_kind(&mut self, kind: ChartKind) {
        if self.config.kind != kind {
            self.config.kind = kind;
            self.reset_bounds();
        }
    }

    /// Replace the frame.
    pub fn set_block(&mut self, block: Option<Block<'a>>) {
        self.block = block;
    }

    /// Current series.
    pub fn series(&self) -> &SeriesSet {
        &self.data
    }

    /// Current configuration.
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    /// Mutable configuration.
    ///
    /// Bounds are left alone. Use [`Plot::set_kind`] to change the chart kind,
    /// or call [`Plot::reset_bounds`] afterwards.
    pub fn config_mut(&mut self) -> &mut PlotConfig {
        &mut self.config
    }

    /// Bounds accumulated so far.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Forget accumulated bounds; the next redraw autoscales from scratch.
    pub fn reset_bounds(&mut self) {
        self.bounds = Bounds::UNDEFINED;
    }

    /// Check the configuration against the current data.
    pub fn validate(&self) -> Result<()> {
        if self.config.horizontal_scale == 0 {
            return Err(PlotError::InvalidHorizontalScale);
        }
        if self.config.kind == ChartKind::Scatter {
            let (Some(xs), Some(ys), 2) = (self.data.get(0), self.data.get(1), self.data.len())
            else {
                return Err(PlotError::ScatterSeriesCount {
                    found: self.data.len(),
                });
            };
            if xs.len() != ys.len() {
                return Err(PlotError::ScatterLengthMismatch {
                    x_len: xs.len(),
                    y_len: ys.len(),
                });
            }
        }
        Ok(())
    }

    /// Draw into `area` of `buf`.
    ///
    /// Configuration errors are returned before anything is drawn. With no
    /// data seen yet, or no room to plot, only the frame and axis lines are
    /// drawn.
    pub fn redraw(&mut self, area: Rect, buf: &mut Buffer) -> Result<()> {
        self.validate()?;

        let inner = match &self.block {
            Some(block) => {
                let inner = block.inner(area);
                block.clone().render(area, buf);
                inner
            }
            None => area,
        };

        self.bounds = self.bounds.widen(&self.data, self.config.kind);

        let draw_area = self.config.layout.draw_area(inner, self.config.show_axes);
        if self.config.show_axes {
            AxisLabeler::new(
                self.config.layout,
                inner,
                self.bounds,
                &self.labels,
                self.config.kind,
                self.config.horizontal_scale,
            )
            .render(buf, Style::default().fg(self.config.axes_color));
        }

        let ready = match self.config.kind {
            ChartKind::Line => self.bounds.has_values(),
            ChartKind::Scatter => self.bounds.has_values() && self.bounds.has_x_values(),
        };
        if !ready || draw_area.is_empty() {
            tracing::debug!(?draw_area, ready, "nothing to plot");
            return Ok(());
        }

        let commands = plan(&self.data, self.bounds, draw_area, &self.config);
        tracing::trace!(
            count = commands.len(),
            kind = self.config.kind.name(),
            marker = self.config.marker.name(),
            "painting marks"
        );
        render::paint(&commands, draw_area, self.config.dot_marker, buf);
        Ok(())
    }
}

impl Widget for &mut Plot<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if let Err(err) = self.redraw(area, buf) {
            tracing::warn!(%err, "plot not drawn");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::series::Series;
    use crate::ui::formatters::buffer_to_text;
    use ratatui::widgets::Borders;

    fn cells_with(buf: &Buffer, symbol: &str) -> Vec<(u16, u16)> {
        let area = buf.area;
        let mut found = Vec::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                if buf.cell((x, y)).is_some_and(|c| c.symbol() == symbol) {
                    found.push((x, y));
                }
            }
        }
        found
    }

    fn is_braille(symbol: &str) -> bool {
        symbol
            .chars()
            .next()
            .is_some_and(|c| ('\u{2801}'..='\u{28FF}').contains(&c))
    }

    #[test]
    fn two_series_dot_chart() {
        let mut plot = Plot::default()
            .marker(Marker::Dot)
            .show_axes(false)
            .line_colors(vec![Color::Red, Color::Blue])
            .data(SeriesSet::from_rows(vec![
                vec![1.0, 3.0, 2.0],
                vec![4.0, 4.0, 4.0],
            ]));
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        plot.redraw(area, &mut buf).unwrap();

        let dots = cells_with(&buf, "•");
        assert_eq!(dots.len(), 6);
        for (x, y) in [(0, 4), (1, 2), (2, 3)] {
            assert_eq!(buf.cell((x, y)).map(|c| c.fg), Some(Color::Red));
        }
        for x in 0..3 {
            assert_eq!(buf.cell((x, 0)).map(|c| c.fg), Some(Color::Blue));
        }
    }

    #[test]
    fn scatter_braille_draws_three_points() {
        let mut plot = Plot::default()
            .kind(ChartKind::Scatter)
            .marker(Marker::Braille)
            .show_axes(false)
            .line_colors(vec![Color::Yellow, Color::Cyan])
            .data(SeriesSet::from_rows(vec![
                vec![0.0, 1.0, 2.0],
                vec![0.0, 5.0, 10.0],
            ]));
        let area = Rect::new(0, 0, 12, 6);
        let mut buf = Buffer::empty(area);
        plot.redraw(area, &mut buf).unwrap();

        let mut marked = Vec::new();
        for y in 0..6 {
            for x in 0..12 {
                if let Some(cell) = buf.cell((x, y)) {
                    if is_braille(cell.symbol()) {
                        assert_eq!(cell.fg, Color::Yellow);
                        // A single dot per cell: one of the eight single-bit patterns.
                        let bits = cell.symbol().chars().next().map_or(0, |c| c as u32 - 0x2800);
                        assert_eq!(bits.count_ones(), 1);
                        marked.push((x, y));
                    }
                }
            }
        }
        assert_eq!(marked.len(), 3);
    }

    #[test]
    fn scatter_with_three_series_is_rejected() {
        let mut plot = Plot::default()
            .kind(ChartKind::Scatter)
            .data(SeriesSet::from_rows(vec![vec![1.0], vec![2.0], vec![3.0]]));
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        let err = plot.redraw(area, &mut buf).unwrap_err();
        assert!(matches!(err, PlotError::ScatterSeriesCount { found: 3 }));
        assert!(err.is_config());
        assert_eq!(buf, Buffer::empty(area));
        assert_eq!(plot.bounds(), Bounds::UNDEFINED);
    }

    #[test]
    fn scatter_length_mismatch_is_rejected() {
        let plot = Plot::default()
            .kind(ChartKind::Scatter)
            .data(SeriesSet::from_rows(vec![vec![1.0, 2.0], vec![3.0]]));
        assert!(matches!(
            plot.validate(),
            Err(PlotError::ScatterLengthMismatch { x_len: 2, y_len: 1 })
        ));
    }

    #[test]
    fn zero_scale_is_rejected() {
        let plot = Plot::default().horizontal_scale(0);
        assert!(matches!(
            plot.validate(),
            Err(PlotError::InvalidHorizontalScale)
        ));
    }

    #[test]
    fn empty_data_draws_only_the_skeleton() {
        let mut plot = Plot::default().block(Block::default().borders(Borders::ALL));
        let area = Rect::new(0, 0, 16, 8);
        let mut buf = Buffer::empty(area);
        plot.redraw(area, &mut buf).unwrap();

        let text = buffer_to_text(&buf);
        assert!(!text.contains("inf"));
        assert!(!text.contains("NaN"));
        assert_eq!(cells_with(&buf, "└").len(), 2);
        assert!(text.contains('┊'));
        assert!(cells_with(&buf, "•").is_empty());
    }

    #[test]
    fn empty_data_without_axes_draws_nothing() {
        let mut plot = Plot::default().show_axes(false);
        let area = Rect::new(0, 0, 16, 8);
        let mut buf = Buffer::empty(area);
        plot.redraw(area, &mut buf).unwrap();
        assert_eq!(buf, Buffer::empty(area));
    }

    #[test]
    fn tiny_area_does_not_panic() {
        let mut plot = Plot::default().data(SeriesSet::from_rows(vec![vec![1.0, 2.0, 3.0]]));
        for (w, h) in [(0, 0), (1, 1), (5, 2), (6, 3)] {
            let area = Rect::new(0, 0, w, h);
            let mut buf = Buffer::empty(area);
            plot.redraw(area, &mut buf).unwrap();
        }
    }

    #[test]
    fn bounds_stick_across_redraws() {
        let mut plot = Plot::default().data(SeriesSet::from_rows(vec![vec![-5.0, 5.0]]));
        let area = Rect::new(0, 0, 20, 8);
        let mut buf = Buffer::empty(area);
        plot.redraw(area, &mut buf).unwrap();

        plot.set_data(SeriesSet::from_rows(vec![vec![0.0, 1.0]]));
        plot.redraw(area, &mut buf).unwrap();
        assert_eq!((plot.bounds().y_min, plot.bounds().y_max), (-5.0, 5.0));

        plot.reset_bounds();
        plot.redraw(area, &mut buf).unwrap();
        assert_eq!((plot.bounds().y_min, plot.bounds().y_max), (0.0, 1.0));
    }

    #[test]
    fn changing_kind_drops_bounds() {
        let mut plot = Plot::default()
            .show_axes(false)
            .data(SeriesSet::from_rows(vec![vec![0.0, 100.0], vec![1.0, 2.0]]));
        let area = Rect::new(0, 0, 20, 8);
        let mut buf = Buffer::empty(area);
        plot.redraw(area, &mut buf).unwrap();
        assert_eq!(plot.bounds().y_max, 100.0);

        plot.set_kind(ChartKind::Line);
        assert_eq!(plot.bounds().y_max, 100.0);

        plot.set_kind(ChartKind::Scatter);
        assert_eq!(plot.bounds(), Bounds::UNDEFINED);
        plot.redraw(area, &mut buf).unwrap();
        let bounds = plot.bounds();
        assert_eq!((bounds.y_min, bounds.y_max), (1.0, 2.0));
        assert_eq!((bounds.x_min, bounds.x_max), (0.0, 100.0));

        let plot = plot.kind(ChartKind::Line);
        assert_eq!(plot.bounds(), Bounds::UNDEFINED);
    }

    #[test]
    fn axes_use_configured_color() {
        let mut plot = Plot::default()
            .axes_color(Color::Magenta)
            .data(SeriesSet::from_iter([Series::new("a", vec![0.0, 4.0])]));
        let area = Rect::new(0, 0, 20, 6);
        let mut buf = Buffer::empty(area);
        plot.redraw(area, &mut buf).unwrap();
        assert_eq!(buf.cell((4, 4)).map(|c| c.fg), Some(Color::Magenta));
        assert_eq!(buf.cell((0, 4)).map(|c| c.symbol()), Some("0"));
    }

    #[test]
    fn widget_impl_swallows_config_errors() {
        let mut plot = Plot::default()
            .kind(ChartKind::Scatter)
            .data(SeriesSet::from_rows(vec![vec![1.0]]));
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        (&mut plot).render(area, &mut buf);
        assert_eq!(buf, Buffer::empty(area));
    }
}
