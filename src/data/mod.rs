//! Loading series from delimited text.
//!
//! This module turns comma, tab or whitespace separated columns into a
//! [`SeriesSet`](crate::series::SeriesSet), one series per column.

mod reader;

pub use reader::DataReader;
