//! Value-to-cell coordinate transforms.
//!
//! Every strategy shares one normalisation law:
//!
//! ```text
//! normalized(v) = (v - min) / max(1, max - min)
//! height(v)     = floor(normalized(v) * (area.height - 1))
//! ```
//!
//! The `max(1, ..)` clamp keeps ranges narrower than one unit from dividing by
//! zero. It also flattens such ranges: values spread over less than one unit
//! use only part of the available height.
//!
//! Sub-cell (braille) coordinates are the cell coordinates scaled by
//! [`SUBCELL_COLUMNS`] × [`SUBCELL_ROWS`].

use super::Bounds;
use ratatui::layout::Rect;

/// Sub-cell columns per terminal cell.
pub const SUBCELL_COLUMNS: u32 = 2;
/// Sub-cell rows per terminal cell.
pub const SUBCELL_ROWS: u32 = 4;

/// An absolute position on the terminal grid, in cells or sub-cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridPoint {
    /// Column.
    pub x: u32,
    /// Row, growing downwards.
    pub y: u32,
}

impl GridPoint {
    /// Create a point.
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Scale a cell position to its top-left sub-cell.
    pub const fn to_subcell(self) -> Self {
        Self {
            x: self.x * SUBCELL_COLUMNS,
            y: self.y * SUBCELL_ROWS,
        }
    }

    /// Whether this cell position lies inside `area`.
    pub fn within(self, area: Rect) -> bool {
        self.x >= u32::from(area.left())
            && self.x < u32::from(area.right())
            && self.y >= u32::from(area.top())
            && self.y < u32::from(area.bottom())
    }
}

/// Maps samples into a draw area for a given set of bounds.
#[derive(Debug, Clone, Copy)]
pub struct CoordinateMapper {
    area: Rect,
    bounds: Bounds,
    scale: u16,
}

impl CoordinateMapper {
    /// Create a mapper over `area`. `scale` is the horizontal scale factor.
    pub fn new(area: Rect, bounds: Bounds, scale: u16) -> Self {
        Self {
            area,
            bounds,
            scale: scale.max(1),
        }
    }

    /// Draw area this mapper targets.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// Position of `value` within the value bounds, in `[0, 1]` for in-range
    /// values once the range is at least one unit.
    pub fn normalized(&self, value: f64) -> f64 {
        (value - self.bounds.y_min) / self.bounds.y_range().max(1.0)
    }

    /// Rows above the bottom of the draw area at which `value` lands.
    pub fn cell_height(&self, value: f64) -> i64 {
        let span = f64::from(self.area.height.saturating_sub(1));
        (self.normalized(value) * span).floor() as i64
    }

    /// Terminal row for `value`.
    pub fn row(&self, value: f64) -> i64 {
        i64::from(self.area.bottom()) - 1 - self.cell_height(value)
    }

    /// Terminal column of line-chart sample `index`.
    pub fn line_column(&self, index: usize) -> i64 {
        let index = i64::try_from(index).unwrap_or(i64::MAX);
        i64::from(self.area.left()).saturating_add(index.saturating_mul(i64::from(self.scale)))
    }

    /// Terminal column of scatter-chart horizontal value `x`.
    ///
    /// Uses the horizontal bounds, spread over `width - 1` columns and
    /// stretched by the scale factor.
    pub fn scatter_column(&self, x: f64) -> i64 {
        let span = f64::from(self.scale) * f64::from(self.area.width.saturating_sub(1));
        let offset = ((x - self.bounds.x_min) * span / self.bounds.x_range().max(1.0)).floor();
        i64::from(self.area.left()) + offset as i64
    }

    /// Cell position of line-chart sample `index` with `value`.
    ///
    /// Returns `None` for non-finite values or positions left of or above the
    /// terminal origin. No draw-area clipping is applied here.
    pub fn line_cell(&self, index: usize, value: f64) -> Option<GridPoint> {
        if !value.is_finite() {
            return None;
        }
        to_point(self.line_column(index), self.row(value))
    }

    /// Cell position of the scatter sample `(x, y)`.
    pub fn scatter_cell(&self, x: f64, y: f64) -> Option<GridPoint> {
        if !x.is_finite() || !y.is_finite() {
            return None;
        }
        to_point(self.scatter_column(x), self.row(y))
    }

    /// Coarse line sample: one cell, dropped when outside the draw area.
    pub fn line_dot(&self, index: usize, value: f64) -> Option<GridPoint> {
        self.line_cell(index, value).filter(|p| p.within(self.area))
    }

    /// Coarse scatter sample: one cell, dropped when outside the draw area.
    pub fn scatter_dot(&self, x: f64, y: f64) -> Option<GridPoint> {
        self.scatter_cell(x, y).filter(|p| p.within(self.area))
    }

    /// Fine line sample in sub-cell coordinates. The canvas clips.
    pub fn line_subcell(&self, index: usize, value: f64) -> Option<GridPoint> {
        self.line_cell(index, value).map(GridPoint::to_subcell)
    }

    /// Fine scatter sample in sub-cell coordinates. The canvas clips.
    pub fn scatter_subcell(&self, x: f64, y: f64) -> Option<GridPoint> {
        self.scatter_cell(x, y).map(GridPoint::to_subcell)
    }

    /// Number of line samples that fit across the draw area.
    pub fn visible_samples(&self) -> usize {
        usize::from(self.area.width).div_ceil(usize::from(self.scale))
    }
}

fn to_point(x: i64, y: i64) -> Option<GridPoint> {
    let x = u32::try_from(x).ok()?;
    let y = u32::try_from(y).ok()?;
    // Sub-cell scaling must not overflow.
    if x > u32::MAX / SUBCELL_COLUMNS || y > u32::MAX / SUBCELL_ROWS {
        return None;
    }
    Some(GridPoint::new(x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn bounds(y_min: f64, y_max: f64) -> Bounds {
        Bounds {
            y_min,
            y_max,
            ..Bounds::UNDEFINED
        }
    }

    #[test]
    fn min_maps_to_bottom_and_max_to_top() {
        let area = Rect::new(5, 2, 10, 5);
        let m = CoordinateMapper::new(area, bounds(1.0, 4.0), 1);
        assert_eq!(m.cell_height(1.0), 0);
        assert_eq!(m.cell_height(4.0), 4);
        assert_eq!(m.row(1.0), 6);
        assert_eq!(m.row(4.0), 2);
    }

    #[test]
    fn sub_unit_range_uses_divisor_one() {
        let m = CoordinateMapper::new(Rect::new(0, 0, 10, 11), bounds(0.0, 0.5), 1);
        assert!((m.normalized(0.5) - 0.5).abs() < f64::EPSILON);
        assert_eq!(m.cell_height(0.5), 5);

        let flat = CoordinateMapper::new(Rect::new(0, 0, 10, 11), bounds(3.0, 3.0), 1);
        assert_eq!(flat.cell_height(3.0), 0);
    }

    #[test]
    fn line_columns_step_by_scale() {
        let m = CoordinateMapper::new(Rect::new(4, 0, 20, 5), bounds(0.0, 1.0), 3);
        assert_eq!(m.line_column(0), 4);
        assert_eq!(m.line_column(2), 10);
        assert_eq!(m.visible_samples(), 7);
    }

    #[test]
    fn coarse_points_outside_area_are_dropped() {
        let m = CoordinateMapper::new(Rect::new(0, 0, 4, 3), bounds(0.0, 10.0), 2);
        assert_eq!(m.line_dot(1, 0.0), Some(GridPoint::new(2, 2)));
        assert_eq!(m.line_dot(2, 0.0), None);
        assert_eq!(m.line_dot(0, f64::NAN), None);
    }

    #[test]
    fn fine_points_are_scaled_and_not_clipped() {
        let m = CoordinateMapper::new(Rect::new(1, 1, 4, 3), bounds(0.0, 10.0), 2);
        assert_eq!(m.line_subcell(0, 10.0), Some(GridPoint::new(2, 4)));
        assert_eq!(m.line_subcell(5, 0.0), Some(GridPoint::new(22, 12)));
    }

    #[test]
    fn scatter_columns_follow_horizontal_bounds() {
        let b = Bounds {
            y_min: 0.0,
            y_max: 10.0,
            x_min: 0.0,
            x_max: 2.0,
        };
        let m = CoordinateMapper::new(Rect::new(10, 0, 11, 5), b, 1);
        assert_eq!(m.scatter_column(0.0), 10);
        assert_eq!(m.scatter_column(1.0), 15);
        assert_eq!(m.scatter_column(2.0), 20);
        assert_eq!(m.scatter_dot(2.0, 10.0), Some(GridPoint::new(20, 0)));
    }

    proptest! {
        #[test]
        fn normalisation_boundaries(
            lo in -1e6f64..1e6,
            span in 2.0f64..1e6,
            height in 1u16..200,
        ) {
            let hi = lo + span;
            let m = CoordinateMapper::new(Rect::new(0, 0, 10, height), bounds(lo, hi), 1);
            prop_assert_eq!(m.cell_height(lo), 0);
            prop_assert_eq!(m.cell_height(hi), i64::from(height) - 1);
        }
    }
}
