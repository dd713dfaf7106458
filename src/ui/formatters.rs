//! Shared formatting utilities for UI components.

use ratatui::buffer::Buffer;
use unicode_width::UnicodeWidthStr;

/// Format an axis tick value: always two decimals.
pub fn format_tick(val: f64) -> String {
    format!("{:.2}", val)
}

/// Format an axis tick value in at most `width` columns.
///
/// Two decimals when they fit, then fewer decimals, then a k/M/G/T suffix,
/// then exponent notation. Integer digits are never dropped, so a value with
/// no short enough form comes back wider than `width`.
pub fn format_tick_within(val: f64, width: usize) -> String {
    let full = format_tick(val);
    if full.width() <= width {
        return full;
    }

    let mut candidates = vec![format!("{:.1}", val), format!("{:.0}", val)];
    for (scale, suffix) in [(1e3, 'k'), (1e6, 'M'), (1e9, 'G'), (1e12, 'T')] {
        if val.abs() >= scale {
            let scaled = val / scale;
            candidates.push(format!("{:.1}{}", scaled, suffix));
            candidates.push(format!("{:.0}{}", scaled, suffix));
        }
    }
    candidates.push(format!("{:.1e}", val));
    let shortest = format!("{:.0e}", val);

    candidates
        .into_iter()
        .find(|c| c.width() <= width)
        .unwrap_or(shortest)
}

/// Display width of `text` in terminal columns.
pub fn text_width(text: &str) -> u16 {
    u16::try_from(text.width()).unwrap_or(u16::MAX)
}

/// Format a number with thousand separators.
pub fn format_number(n: usize) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Format a statistic value with smart precision.
pub fn format_stat_value(val: f64) -> String {
    if !val.is_finite() {
        return if val.is_nan() {
            "NaN".to_string()
        } else if val.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-3..1e6).contains(&abs_val) {
        format!("{:.3e}", val)
    } else if abs_val >= 100.0 {
        format!("{:.2}", val)
    } else if abs_val >= 1.0 {
        format!("{:.4}", val)
    } else {
        format!("{:.5}", val)
    }
}

/// Render a buffer as plain text, one line per row, trailing blanks trimmed.
pub fn buffer_to_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.top()..area.bottom() {
        let mut line = String::new();
        for x in area.left()..area.right() {
            if let Some(cell) = buf.cell((x, y)) {
                line.push_str(cell.symbol());
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::layout::Rect;

    #[test]
    fn ticks_have_two_decimals() {
        assert_eq!(format_tick(1.0), "1.00");
        assert_eq!(format_tick(-0.5), "-0.50");
        assert_eq!(format_tick(1234.5), "1234.50");
    }

    #[test]
    fn ticks_shrink_to_fit_without_losing_digits() {
        assert_eq!(format_tick_within(2.5, 4), "2.50");
        assert_eq!(format_tick_within(10.0, 4), "10.0");
        assert_eq!(format_tick_within(8230.0, 4), "8230");
        assert_eq!(format_tick_within(12345.0, 4), "12k");
        assert_eq!(format_tick_within(999_999.0, 4), "1.0M");
        assert_eq!(format_tick_within(-36.667, 4), "-37");
        assert_eq!(format_tick_within(-1600.0, 4), "-2k");
        assert_eq!(format_tick_within(12345.0, 8), "12345.00");
        assert_eq!(format_tick_within(-1.7e15, 4), "-2e15");
    }

    #[test]
    fn width_counts_columns_not_bytes() {
        assert_eq!(text_width("abc"), 3);
        assert_eq!(text_width("é"), 1);
        assert_eq!(text_width("日本"), 4);
    }

    #[test]
    fn thousands_separators() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn stat_values_handle_infinity() {
        assert_eq!(format_stat_value(f64::INFINITY), "+Inf");
        assert_eq!(format_stat_value(f64::NAN), "NaN");
        assert_eq!(format_stat_value(2.5), "2.5000");
    }

    #[test]
    fn buffer_text_trims_rows() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 5, 2));
        buf.set_string(1, 0, "ab", ratatui::style::Style::default());
        assert_eq!(buffer_to_text(&buf), " ab\n\n");
    }
}
