//! Cellplot - line and scatter charts for character-cell terminals.
//!
//! Cellplot draws numeric series into a rectangle of a terminal buffer, either
//! one glyph per cell or at braille resolution (2×4 dots per cell), with axes
//! and non-overlapping tick labels.
//!
//! # Features
//!
//! - Line charts (index on X) and scatter charts (paired X/Y series)
//! - Dot or braille markers
//! - Sticky autoscaling: bounds only widen across redraws
//! - Greedy, non-overlapping X labels with optional text overrides
//! - A terminal viewer binary for delimited text files
//!
//! # Example
//!
//! ```
//! use cellplot::plot::{ChartKind, Marker, Plot};
//! use cellplot::series::SeriesSet;
//!
//! let mut plot = Plot::default()
//!     .kind(ChartKind::Scatter)
//!     .marker(Marker::Braille)
//!     .data(SeriesSet::from_rows(vec![vec![0.0, 1.0, 2.0], vec![0.0, 5.0, 10.0]]));
//!
//! let text = cellplot::ui::render_to_text(&mut plot, 30, 10)?;
//! assert!(text.contains("2.50"));
//! # Ok::<(), cellplot::PlotError>(())
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]
#![deny(unsafe_code)]

pub mod app;
pub mod data;
pub mod error;
pub mod plot;
pub mod series;
pub mod ui;

pub use error::{PlotError, Result};
pub use plot::{Bounds, ChartKind, Marker, Plot, PlotConfig};
pub use series::{Labels, Series, SeriesSet};
