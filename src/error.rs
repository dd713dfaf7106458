//! Error types for Cellplot.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Cellplot operations.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur in Cellplot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Scatter plots pair exactly two series (X then Y).
    #[error("Scatter plot needs exactly 2 series (x, y), found {found}")]
    ScatterSeriesCount { found: usize },

    /// Scatter X and Y series must pair up index by index.
    #[error("Scatter series lengths differ: x has {x_len} values, y has {y_len}")]
    ScatterLengthMismatch { x_len: usize, y_len: usize },

    /// Horizontal scale must be a positive integer.
    #[error("Horizontal scale must be at least 1")]
    InvalidHorizontalScale,

    /// Failed to open a data file.
    #[error("Failed to open file: {path}")]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed data line.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Delimited text the reader could not decode.
    #[error("Invalid data: {0}")]
    Csv(#[from] csv::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PlotError {
    /// Create a FileOpen error.
    pub fn file_open(path: PathBuf, source: std::io::Error) -> Self {
        Self::FileOpen { path, source }
    }

    /// Create a Parse error.
    pub fn parse(line: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    /// Whether this error comes from the plot configuration rather than IO.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::ScatterSeriesCount { .. }
                | Self::ScatterLengthMismatch { .. }
                | Self::InvalidHorizontalScale
        )
    }
}
