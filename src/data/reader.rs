//! Delimited text reader.

use crate::error::{PlotError, Result};
use crate::series::{Series, SeriesSet};
use std::io::Read;
use std::path::Path;

/// Column-oriented text reader built on `csv`.
///
/// - Blank lines and lines starting with `#` are skipped.
/// - The first data line picks the delimiter: comma if it has one, tab if it
///   has one, otherwise runs of spaces. Quoted fields are unquoted.
/// - A first row with any non-numeric field is a header naming the series.
/// - Empty fields, `NA` and `NaN` are missing samples (stored as NaN, never
///   plotted).
#[derive(Debug)]
pub struct DataReader;

impl DataReader {
    /// Read a data file.
    pub fn read_file(path: &Path) -> Result<SeriesSet> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| PlotError::file_open(path.to_path_buf(), e))?;
        let data = Self::read_str(&text)?;
        tracing::debug!(
            path = %path.display(),
            series = data.len(),
            samples = data.max_len(),
            "loaded data file"
        );
        Ok(data)
    }

    /// Read data from any reader (stdin, for example).
    pub fn read_from(mut reader: impl Read) -> Result<SeriesSet> {
        let mut text = String::new();
        reader.read_to_string(&mut text)?;
        Self::read_str(&text)
    }

    /// Parse data from a string.
    pub fn read_str(text: &str) -> Result<SeriesSet> {
        let delimiter = sniff_delimiter(text);
        let spaced = delimiter == b' ';
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .delimiter(delimiter)
            .from_reader(text.as_bytes());

        let mut names: Option<Vec<String>> = None;
        let mut columns: Vec<Vec<f64>> = Vec::new();
        let mut seen_row = false;

        for record in reader.records() {
            let record = record.map_err(|e| csv_error(text, e))?;
            let line_no = record.position().map_or(0, |p| record_line(text, p));
            // Runs of spaces leave empty fields between the real ones.
            let fields: Vec<&str> = record
                .iter()
                .filter(|f| !(spaced && f.is_empty()))
                .collect();
            if fields.iter().all(|f| f.is_empty()) {
                continue;
            }

            if !seen_row && names.is_none() && fields.iter().any(|f| parse_value(f).is_none()) {
                names = Some(fields.iter().map(|f| f.to_string()).collect());
                continue;
            }

            let values = fields
                .iter()
                .map(|f| {
                    parse_value(f)
                        .ok_or_else(|| PlotError::parse(line_no, format!("not a number: '{}'", f)))
                })
                .collect::<Result<Vec<f64>>>()?;

            let expected = match (&names, seen_row) {
                (Some(names), _) => Some(names.len()),
                (None, true) => Some(columns.len()),
                (None, false) => None,
            };
            if let Some(expected) = expected {
                if values.len() != expected {
                    return Err(PlotError::parse(
                        line_no,
                        format!("expected {} columns, found {}", expected, values.len()),
                    ));
                }
            }

            if !seen_row {
                columns = vec![Vec::new(); values.len()];
                seen_row = true;
            }
            for (column, value) in columns.iter_mut().zip(values) {
                column.push(value);
            }
        }

        let names = names.unwrap_or_default();
        if columns.is_empty() {
            columns = vec![Vec::new(); names.len()];
        }
        Ok(columns
            .into_iter()
            .enumerate()
            .map(|(i, values)| {
                let name = names.get(i).cloned().unwrap_or_else(|| format!("s{}", i));
                Series::new(name, values)
            })
            .collect())
    }
}

fn sniff_delimiter(text: &str) -> u8 {
    let first = text
        .lines()
        .map(str::trim)
        .find(|line| !line.is_empty() && !line.starts_with('#'))
        .unwrap_or_default();
    if first.contains(',') {
        b','
    } else if first.contains('\t') {
        b'\t'
    } else {
        b' '
    }
}

/// Line the record at `pos` actually starts on. `csv` positions a record
/// before the comment and empty lines it skipped on the way.
fn record_line(text: &str, pos: &csv::Position) -> usize {
    let skipped = usize::try_from(pos.byte())
        .ok()
        .and_then(|byte| text.get(byte..))
        .unwrap_or_default()
        .lines()
        .take_while(|line| line.is_empty() || line.starts_with('#'))
        .count();
    usize::try_from(pos.line()).unwrap_or(usize::MAX).saturating_add(skipped)
}

fn csv_error(text: &str, err: csv::Error) -> PlotError {
    match err.position() {
        Some(pos) => PlotError::parse(record_line(text, pos), err.to_string()),
        None => PlotError::Csv(err),
    }
}

fn parse_value(field: &str) -> Option<f64> {
    if field.is_empty() || field.eq_ignore_ascii_case("na") {
        return Some(f64::NAN);
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_become_series() {
        let data = DataReader::read_str("1 10\n2 20\n3 30\n").unwrap();
        assert_eq!(data.len(), 2);
        assert_eq!(data.get(0).map(|s| s.values.clone()), Some(vec![1.0, 2.0, 3.0]));
        assert_eq!(data.get(1).map(|s| s.name.as_str()), Some("s1"));
    }

    #[test]
    fn header_names_series() {
        let data = DataReader::read_str("# comment\ntime, temp\n0, 20.5\n1, 21\n").unwrap();
        let names: Vec<&str> = data.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["time", "temp"]);
        assert_eq!(data.get(1).map(|s| s.values.clone()), Some(vec![20.5, 21.0]));
    }

    #[test]
    fn missing_fields_are_nan() {
        let data = DataReader::read_str("1,,3\n4,NA,nan\n").unwrap();
        let middle = data.get(1).map(|s| s.values.clone()).unwrap_or_default();
        assert!(middle.iter().all(|v| v.is_nan()));
        assert_eq!(data.get(0).map(|s| s.len()), Some(2));
    }

    #[test]
    fn quoted_fields_are_unquoted() {
        let data = DataReader::read_str("\"time, s\",temp\n0,20\n\"1\",\"21.5\"\n").unwrap();
        let names: Vec<&str> = data.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["time, s", "temp"]);
        assert_eq!(data.get(0).map(|s| s.values.clone()), Some(vec![0.0, 1.0]));
        assert_eq!(data.get(1).map(|s| s.values.clone()), Some(vec![20.0, 21.5]));
    }

    #[test]
    fn space_and_tab_columns() {
        let data = DataReader::read_str("  1    10\n\n2  20\n").unwrap();
        assert_eq!(data.get(1).map(|s| s.values.clone()), Some(vec![10.0, 20.0]));

        let data = DataReader::read_str("x\ty\n1\t\n2\t5\n").unwrap();
        let y = data.get(1).map(|s| s.values.clone()).unwrap_or_default();
        assert!(y[0].is_nan());
        assert_eq!(y[1], 5.0);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = DataReader::read_str("1 2\n3\n").unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 2, .. }));
    }

    #[test]
    fn text_after_first_row_is_rejected() {
        let err = DataReader::read_str("1 2\nx 3\n").unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 2, .. }));
    }

    #[test]
    fn comments_count_toward_line_numbers() {
        let err = DataReader::read_str("# units: m\na,b\n1,2\n3,oops\n").unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 4, .. }));

        let err = DataReader::read_str("1,2\n\n# note\n3,oops\n").unwrap_err();
        assert!(matches!(err, PlotError::Parse { line: 4, .. }));
    }

    #[test]
    fn header_only_gives_empty_series() {
        let data = DataReader::read_str("a b\n").unwrap();
        assert_eq!(data.len(), 2);
        assert!(data.is_empty());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = DataReader::read_file(Path::new("/definitely/not/here.csv")).unwrap_err();
        assert!(err.to_string().contains("here.csv"));
    }
}
