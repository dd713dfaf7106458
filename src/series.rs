//! Series data supplied to the plot on each redraw.

/// A named sequence of numeric samples.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    /// Display name (header column, legend text).
    pub name: String,
    /// Sample values. In line mode the index is the implicit X coordinate.
    pub values: Vec<f64>,
}

impl Series {
    /// Create a named series.
    pub fn new(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the series holds no samples.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate over finite samples only.
    pub fn finite(&self) -> impl Iterator<Item = f64> + '_ {
        self.values.iter().copied().filter(|v| v.is_finite())
    }
}

/// Ordered collection of series.
///
/// Line charts draw every series; scatter charts read the first series as X
/// and the second as Y.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SeriesSet {
    series: Vec<Series>,
}

impl SeriesSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set of unnamed series (`s0`, `s1`, ...) from raw rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let series = rows
            .into_iter()
            .enumerate()
            .map(|(i, values)| Series::new(format!("s{}", i), values))
            .collect();
        Self { series }
    }

    /// Append a series.
    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// True when there are no series or every series is empty.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(Series::is_empty)
    }

    /// Series at `index`.
    pub fn get(&self, index: usize) -> Option<&Series> {
        self.series.get(index)
    }

    /// Iterate over the series in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Series> {
        self.series.iter()
    }

    /// Length of the longest series.
    pub fn max_len(&self) -> usize {
        self.series.iter().map(Series::len).max().unwrap_or(0)
    }
}

impl FromIterator<Series> for SeriesSet {
    fn from_iter<I: IntoIterator<Item = Series>>(iter: I) -> Self {
        Self {
            series: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a SeriesSet {
    type Item = &'a Series;
    type IntoIter = std::slice::Iter<'a, Series>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

/// Tick label overrides, consumed by position.
///
/// Shorter than the tick count is fine: generated text is used past the end.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Labels(Vec<String>);

impl Labels {
    /// Create labels from any string-like items.
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(labels.into_iter().map(Into::into).collect())
    }

    /// Label at `index`, if supplied.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Number of supplied labels.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether no labels were supplied.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
