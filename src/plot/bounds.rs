//! Sticky autoscale bounds.
//!
//! Bounds only ever widen: each redraw takes the union of what was seen before
//! and the current dataset, so a narrower dataset never shrinks the axes.

use super::ChartKind;
use crate::series::SeriesSet;

/// Tracked value range (and horizontal range for scatter plots).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Smallest value seen.
    pub y_min: f64,
    /// Largest value seen.
    pub y_max: f64,
    /// Smallest horizontal value seen (scatter only).
    pub x_min: f64,
    /// Largest horizontal value seen (scatter only).
    pub x_max: f64,
}

impl Bounds {
    /// No data seen yet: minimums at +inf, maximums at -inf.
    pub const UNDEFINED: Self = Self {
        y_min: f64::INFINITY,
        y_max: f64::NEG_INFINITY,
        x_min: f64::INFINITY,
        x_max: f64::NEG_INFINITY,
    };

    /// Widen these bounds by the extrema of `data`.
    ///
    /// Line charts take the value range over every series. Scatter charts take
    /// the value range from the second series and the horizontal range from the
    /// first. Empty input returns `self` unchanged.
    pub fn widen(self, data: &SeriesSet, kind: ChartKind) -> Self {
        let current = match kind {
            ChartKind::Line => Self {
                y_min: fold_min(data.iter().flat_map(|s| s.finite())),
                y_max: fold_max(data.iter().flat_map(|s| s.finite())),
                ..Self::UNDEFINED
            },
            ChartKind::Scatter => {
                let xs = data.get(0);
                let ys = data.get(1);
                Self {
                    y_min: fold_min(ys.into_iter().flat_map(|s| s.finite())),
                    y_max: fold_max(ys.into_iter().flat_map(|s| s.finite())),
                    x_min: fold_min(xs.into_iter().flat_map(|s| s.finite())),
                    x_max: fold_max(xs.into_iter().flat_map(|s| s.finite())),
                }
            }
        };
        let widened = self.union(current);
        if widened != self {
            tracing::debug!(
                y_min = widened.y_min,
                y_max = widened.y_max,
                x_min = widened.x_min,
                x_max = widened.x_max,
                "bounds widened"
            );
        }
        widened
    }

    /// Union of two bounds.
    pub fn union(self, other: Self) -> Self {
        Self {
            y_min: self.y_min.min(other.y_min),
            y_max: self.y_max.max(other.y_max),
            x_min: self.x_min.min(other.x_min),
            x_max: self.x_max.max(other.x_max),
        }
    }

    /// Whether a value range has been observed.
    pub fn has_values(&self) -> bool {
        self.y_min.is_finite() && self.y_max.is_finite()
    }

    /// Whether a horizontal range has been observed.
    pub fn has_x_values(&self) -> bool {
        self.x_min.is_finite() && self.x_max.is_finite()
    }

    /// `y_max - y_min`.
    pub fn y_range(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// `x_max - x_min`.
    pub fn x_range(&self) -> f64 {
        self.x_max - self.x_min
    }
}

impl Default for Bounds {
    fn default() -> Self {
        Self::UNDEFINED
    }
}

fn fold_min(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::INFINITY, f64::min)
}

fn fold_max(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(f64::NEG_INFINITY, f64::max)
}
