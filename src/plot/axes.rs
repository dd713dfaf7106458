//! Axis lines and tick labels.
//!
//! The Y gutter on the left holds value labels; the bottom row holds X labels.
//! X labels are packed left to right, each starting at least one gap past the
//! end of the previous one, so they never overlap. Which indices get a label
//! therefore depends on how wide the earlier labels were.

use super::{Bounds, ChartKind};
use crate::series::Labels;
use crate::ui::formatters::{format_tick, format_tick_within, text_width};
use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
    style::Style,
};

/// Glyph at the corner where the axes meet.
pub const ORIGIN: char = '└';
/// Glyph for the X axis line.
pub const HORIZONTAL_DASH: char = '┈';
/// Glyph for the Y axis line.
pub const VERTICAL_DASH: char = '┊';

/// Space reserved around the draw area for axes and labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisLayout {
    /// Width of the Y label gutter.
    pub y_labels_width: u16,
    /// Height of the X label row.
    pub x_labels_height: u16,
    /// Minimum blank columns between X labels.
    pub x_labels_gap: u16,
    /// Blank rows between Y labels.
    pub y_labels_gap: u16,
}

impl Default for AxisLayout {
    fn default() -> Self {
        Self {
            y_labels_width: 4,
            x_labels_height: 1,
            x_labels_gap: 2,
            y_labels_gap: 1,
        }
    }
}

impl AxisLayout {
    /// Area left for plotting inside `inner`.
    ///
    /// With axes shown this drops the gutter plus the Y axis column on the left
    /// and the label row plus the X axis row at the bottom.
    pub fn draw_area(&self, inner: Rect, show_axes: bool) -> Rect {
        if !show_axes {
            return inner;
        }
        let left = self.y_labels_width.saturating_add(1);
        let bottom = self.x_labels_height.saturating_add(1);
        Rect::new(
            inner.x.saturating_add(left).min(inner.right()),
            inner.y,
            inner.width.saturating_sub(left),
            inner.height.saturating_sub(bottom),
        )
    }
}

/// A label placed on an axis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    /// Left column of the text.
    pub x: u16,
    /// Row of the text.
    pub y: u16,
    /// Label text.
    pub text: String,
}

impl Tick {
    /// First column past the end of the text.
    pub fn end(&self) -> u32 {
        u32::from(self.x) + u32::from(text_width(&self.text))
    }
}

/// Lays out and paints axes for one redraw.
#[derive(Debug)]
pub struct AxisLabeler<'a> {
    layout: AxisLayout,
    inner: Rect,
    bounds: Bounds,
    labels: &'a Labels,
    kind: ChartKind,
    scale: u16,
}

impl<'a> AxisLabeler<'a> {
    /// Create a labeler for the widget's `inner` rectangle.
    pub fn new(
        layout: AxisLayout,
        inner: Rect,
        bounds: Bounds,
        labels: &'a Labels,
        kind: ChartKind,
        scale: u16,
    ) -> Self {
        Self {
            layout,
            inner,
            bounds,
            labels,
            kind,
            scale: scale.max(1),
        }
    }

    /// Area left for plotting.
    pub fn draw_area(&self) -> Rect {
        self.layout.draw_area(self.inner, true)
    }

    /// Whether the inner rectangle can hold the gutter and the label row.
    fn fits(&self) -> bool {
        self.inner.width > self.layout.y_labels_width
            && self.inner.height > self.layout.x_labels_height
    }

    fn axis_column(&self) -> u16 {
        self.inner.x + self.layout.y_labels_width
    }

    fn axis_row(&self) -> u16 {
        self.inner.bottom() - self.layout.x_labels_height - 1
    }

    fn label_row(&self) -> u16 {
        self.inner.bottom() - 1
    }

    /// Value labels, bottom to top, one every `y_labels_gap + 1` rows.
    ///
    /// Text is shortened to fit the gutter where possible. Empty while no
    /// values have been seen.
    pub fn y_ticks(&self) -> Vec<Tick> {
        let rows = u32::from(self.draw_area().height);
        if !self.fits() || rows == 0 || !self.bounds.has_values() {
            return Vec::new();
        }
        let step = u32::from(self.layout.y_labels_gap) + 1;
        let vertical_scale = self.bounds.y_range() / f64::from(rows);
        let axis_row = u32::from(self.axis_row());
        let width = usize::from(self.layout.y_labels_width);

        (0..)
            .map(|k| k * step)
            .take_while(|&offset| offset <= rows)
            .map(|offset| Tick {
                x: self.inner.x,
                y: (axis_row - offset) as u16,
                text: format_tick_within(
                    self.bounds.y_min + f64::from(offset) * vertical_scale,
                    width,
                ),
            })
            .collect()
    }

    /// Horizontal labels for the configured chart kind.
    pub fn x_ticks(&self) -> Vec<Tick> {
        if !self.fits() {
            return Vec::new();
        }
        match self.kind {
            ChartKind::Line => self.x_ticks_line(),
            ChartKind::Scatter => self.x_ticks_scatter(),
        }
    }

    /// Sample-index labels. The first label sits under the Y axis.
    fn x_ticks_line(&self) -> Vec<Tick> {
        let scale = u32::from(self.scale);
        let gap = u32::from(self.layout.x_labels_gap);
        let start = u32::from(self.axis_column());
        let limit = u32::from(self.inner.right()).saturating_sub(1);
        let row = self.label_row();

        let first = self.label_or(0, || "0".to_string());
        let first_width = u32::from(text_width(&first));
        let mut ticks = vec![Tick {
            x: start as u16,
            y: row,
            text: first,
        }];

        let mut x = start + (gap + first_width).saturating_sub(1) * scale + 1;
        while x < limit {
            let index = ((x - start - 1) / scale + 1) as usize;
            let text = self.label_or(index, || index.to_string());
            let advance = ((u32::from(text_width(&text)) + gap) * scale).max(1);
            ticks.push(Tick {
                x: x as u16,
                y: row,
                text,
            });
            x += advance;
        }
        ticks
    }

    /// Labels interpolated across the horizontal bounds.
    fn x_ticks_scatter(&self) -> Vec<Tick> {
        if !self.bounds.has_x_values() {
            return Vec::new();
        }
        let scale = u32::from(self.scale);
        let gap = u32::from(self.layout.x_labels_gap);
        let start = u32::from(self.axis_column());
        let limit = u32::from(self.inner.right()).saturating_sub(1);
        let row = self.label_row();
        let columns = self.draw_area().width;
        let step = if columns == 0 {
            0.0
        } else {
            self.bounds.x_range() / f64::from(columns)
        };

        let mut ticks = Vec::new();
        let mut x = start;
        while x < limit {
            let index = ((x - start) / scale) as usize;
            let text = self.label_or(index, || {
                format_tick(self.bounds.x_min + index as f64 * step)
            });
            let advance = ((u32::from(text_width(&text)) + gap) * scale).max(1);
            ticks.push(Tick {
                x: x as u16,
                y: row,
                text,
            });
            x += advance;
        }
        ticks
    }

    fn label_or(&self, index: usize, generate: impl FnOnce() -> String) -> String {
        self.labels
            .get(index)
            .map_or_else(generate, str::to_string)
    }

    /// Paint axis lines and, once values are known, tick labels.
    pub fn render(&self, buf: &mut Buffer, style: Style) {
        if !self.fits() {
            return;
        }
        let column = self.axis_column();
        let row = self.axis_row();

        put_char(buf, column, row, ORIGIN, style);
        for x in column + 1..self.inner.right() {
            put_char(buf, x, row, HORIZONTAL_DASH, style);
        }
        for y in self.inner.top()..row {
            put_char(buf, column, y, VERTICAL_DASH, style);
        }

        for tick in self.y_ticks().into_iter().chain(self.x_ticks()) {
            let room = self.inner.right().saturating_sub(tick.x);
            put_str(buf, &tick, usize::from(room), style);
        }
    }
}

fn put_char(buf: &mut Buffer, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = buf.cell_mut(Position::new(x, y)) {
        cell.set_char(ch).set_style(style);
    }
}

fn put_str(buf: &mut Buffer, tick: &Tick, max_width: usize, style: Style) {
    if buf.area.contains(Position::new(tick.x, tick.y)) {
        buf.set_stringn(tick.x, tick.y, &tick.text, max_width, style);
    }
}
