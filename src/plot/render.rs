//! Marker strategies.
//!
//! Each `{chart kind × marker}` pair maps to one planning function that turns
//! series data into a flat list of [`DrawCommand`]s. Planning is pure; only
//! [`paint`] touches the buffer.

use super::mapper::{CoordinateMapper, GridPoint, SUBCELL_COLUMNS, SUBCELL_ROWS};
use super::{Bounds, ChartKind, Marker, PlotConfig};
use crate::series::SeriesSet;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    symbols,
    widgets::{
        canvas::{Canvas, Painter, Shape},
        Widget,
    },
};

/// One mark to put on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    /// A glyph in a whole terminal cell (cell coordinates).
    Dot {
        /// Cell position.
        at: GridPoint,
        /// Glyph color.
        color: Color,
    },
    /// A single braille dot (sub-cell coordinates).
    Point {
        /// Sub-cell position.
        at: GridPoint,
        /// Dot color.
        color: Color,
    },
    /// A straight braille segment (sub-cell coordinates).
    Line {
        /// Start, inclusive.
        from: GridPoint,
        /// End, inclusive.
        to: GridPoint,
        /// Segment color.
        color: Color,
    },
}

impl DrawCommand {
    fn is_subcell(&self) -> bool {
        !matches!(self, Self::Dot { .. })
    }
}

type Strategy = fn(&SeriesSet, &CoordinateMapper, &[Color]) -> Vec<DrawCommand>;

fn strategy(kind: ChartKind, marker: Marker) -> Strategy {
    match (kind, marker) {
        (ChartKind::Line, Marker::Dot) => line_dots,
        (ChartKind::Line, Marker::Braille) => line_segments,
        (ChartKind::Scatter, Marker::Dot) => scatter_dots,
        (ChartKind::Scatter, Marker::Braille) => scatter_points,
    }
}

/// Plan the marks for `data` inside `area`.
///
/// Scatter planning pairs the first two series by index and stops at the
/// shorter one; length checks belong to `Plot::validate`.
pub fn plan(data: &SeriesSet, bounds: Bounds, area: Rect, config: &PlotConfig) -> Vec<DrawCommand> {
    let mapper = CoordinateMapper::new(area, bounds, config.horizontal_scale);
    strategy(config.kind, config.marker)(data, &mapper, &config.line_colors)
}

/// Palette entry for series `index`, cycling through `colors`.
pub fn select_color(colors: &[Color], index: usize) -> Color {
    if colors.is_empty() {
        Color::Reset
    } else {
        colors[index % colors.len()]
    }
}

fn line_dots(data: &SeriesSet, mapper: &CoordinateMapper, colors: &[Color]) -> Vec<DrawCommand> {
    let visible = mapper.visible_samples();
    data.iter()
        .enumerate()
        .flat_map(|(i, series)| {
            let color = select_color(colors, i);
            series
                .values
                .iter()
                .take(visible)
                .enumerate()
                .filter_map(move |(j, &v)| mapper.line_dot(j, v))
                .map(move |at| DrawCommand::Dot { at, color })
        })
        .collect()
}

fn line_segments(
    data: &SeriesSet,
    mapper: &CoordinateMapper,
    colors: &[Color],
) -> Vec<DrawCommand> {
    let mut commands = Vec::new();
    for (i, series) in data.iter().enumerate() {
        let color = select_color(colors, i);
        if let [only] = series.values.as_slice() {
            if let Some(at) = mapper.line_subcell(0, *only) {
                commands.push(DrawCommand::Point { at, color });
            }
            continue;
        }
        let points: Vec<Option<GridPoint>> = series
            .values
            .iter()
            .enumerate()
            .map(|(j, &v)| mapper.line_subcell(j, v))
            .collect();
        for pair in points.windows(2) {
            if let [Some(from), Some(to)] = *pair {
                commands.push(DrawCommand::Line { from, to, color });
            }
        }
    }
    commands
}

fn scatter_pairs<'a>(data: &'a SeriesSet) -> impl Iterator<Item = (f64, f64)> + 'a {
    let xs = data.get(0).map(|s| s.values.as_slice()).unwrap_or(&[]);
    let ys = data.get(1).map(|s| s.values.as_slice()).unwrap_or(&[]);
    xs.iter().copied().zip(ys.iter().copied())
}

fn scatter_dots(data: &SeriesSet, mapper: &CoordinateMapper, colors: &[Color]) -> Vec<DrawCommand> {
    let color = select_color(colors, 0);
    scatter_pairs(data)
        .filter_map(|(x, y)| mapper.scatter_dot(x, y))
        .map(|at| DrawCommand::Dot { at, color })
        .collect()
}

fn scatter_points(
    data: &SeriesSet,
    mapper: &CoordinateMapper,
    colors: &[Color],
) -> Vec<DrawCommand> {
    let color = select_color(colors, 0);
    scatter_pairs(data)
        .filter_map(|(x, y)| mapper.scatter_subcell(x, y))
        .map(|at| DrawCommand::Point { at, color })
        .collect()
}

/// Apply `commands` to `buf`.
///
/// Dots overwrite whole cells with `dot`. Sub-cell marks go through a braille
/// canvas covering `area`, which drops anything outside it.
pub fn paint(commands: &[DrawCommand], area: Rect, dot: char, buf: &mut Buffer) {
    for command in commands {
        if let DrawCommand::Dot { at, color } = *command {
            let (Ok(x), Ok(y)) = (u16::try_from(at.x), u16::try_from(at.y)) else {
                continue;
            };
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_char(dot).set_style(Style::default().fg(color));
            }
        }
    }

    let fine: Vec<DrawCommand> = commands.iter().copied().filter(DrawCommand::is_subcell).collect();
    if fine.is_empty() || area.is_empty() {
        return;
    }
    let marks = SubcellMarks::new(area, &fine);
    Canvas::default()
        .marker(symbols::Marker::Braille)
        .x_bounds([0.0, f64::from(marks.width.saturating_sub(1))])
        .y_bounds([0.0, f64::from(marks.height.saturating_sub(1))])
        .paint(|ctx| ctx.draw(&marks))
        .render(area, buf);
}

/// Sub-cell marks in absolute coordinates, painted onto a canvas over `area`.
#[derive(Debug)]
struct SubcellMarks<'a> {
    origin: GridPoint,
    width: u32,
    height: u32,
    commands: &'a [DrawCommand],
}

impl<'a> SubcellMarks<'a> {
    fn new(area: Rect, commands: &'a [DrawCommand]) -> Self {
        Self {
            origin: GridPoint::new(u32::from(area.x), u32::from(area.y)).to_subcell(),
            width: u32::from(area.width) * SUBCELL_COLUMNS,
            height: u32::from(area.height) * SUBCELL_ROWS,
            commands,
        }
    }

    fn plot(&self, painter: &mut Painter<'_, '_>, x: i64, y: i64, color: Color) {
        let x = x - i64::from(self.origin.x);
        let y = y - i64::from(self.origin.y);
        if (0..i64::from(self.width)).contains(&x) && (0..i64::from(self.height)).contains(&y) {
            painter.paint(x as usize, y as usize, color);
        }
    }
}

impl Shape for SubcellMarks<'_> {
    fn draw(&self, painter: &mut Painter<'_, '_>) {
        for command in self.commands {
            match *command {
                DrawCommand::Point { at, color } => {
                    self.plot(painter, i64::from(at.x), i64::from(at.y), color);
                }
                DrawCommand::Line { from, to, color } => {
                    for (x, y) in bresenham(from, to) {
                        self.plot(painter, x, y, color);
                    }
                }
                DrawCommand::Dot { .. } => {}
            }
        }
    }
}

/// Integer points on the segment `from..=to`.
fn bresenham(from: GridPoint, to: GridPoint) -> Vec<(i64, i64)> {
    let (mut x, mut y) = (i64::from(from.x), i64::from(from.y));
    let (x1, y1) = (i64::from(to.x), i64::from(to.y));
    let dx = (x1 - x).abs();
    let dy = -(y1 - y).abs();
    let sx = if x < x1 { 1 } else { -1 };
    let sy = if y < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    let mut points = Vec::with_capacity(dx.max(-dy) as usize + 1);
    loop {
        points.push((x, y));
        if x == x1 && y == y1 {
            break;
        }
        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x += sx;
        }
        if e2 <= dx {
            err += dx;
            y += sy;
        }
    }
    points
}
