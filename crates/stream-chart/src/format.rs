// File: crates/stream-chart/src/format.rs
// Summary: Shared value formatting: magnitude abbreviation, engine value text, elapsed time.

use chrono::TimeDelta;

/// Magnitude suffixes, indexed by `floor(log10(v) / 3)`.
pub const SUFFIXES: [&str; 5] = ["", "k", "M", "B", "T"];

/// Abbreviate a value with a magnitude suffix.
///
/// - Values >= 1 are scaled down by `1000^i` where `i = floor(floor(log10 v) / 3)`,
///   printed with one decimal and followed by the suffix (`1500 -> "1.5 k"`).
/// - Values below 1 (including negatives and NaN) are returned verbatim.
/// - Magnitudes past trillions stay in `T`.
pub fn abbreviate(value: f64) -> String {
    if !(value >= 1.0) || !value.is_finite() {
        return value.to_string();
    }
    let order = value.log10().floor() as usize;
    let i = (order / 3).min(SUFFIXES.len() - 1);
    let scaled = value / 1000f64.powi(i as i32);
    let suffix = SUFFIXES[i];
    if suffix.is_empty() {
        format!("{scaled:.1}")
    } else {
        format!("{scaled:.1} {suffix}")
    }
}

/// Parse a value string as produced by the plot engine ("1,234.5"). Commas are
/// stripped; anything unparsable becomes NaN.
pub fn parse_display_value(text: &str) -> f64 {
    let cleaned: String = text.chars().filter(|c| *c != ',').collect();
    cleaned.trim().parse().unwrap_or(f64::NAN)
}

/// Value cell of a tooltip row: values above 1 are abbreviated, the rest shown as parsed.
pub fn format_tooltip_value(text: &str) -> String {
    let value = parse_display_value(text);
    if value > 1.0 {
        abbreviate(value)
    } else {
        value.to_string()
    }
}

/// Locale-style number text with thousands separators and at most three
/// fraction digits, the way plot engines print legend values.
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let fixed = format!("{:.3}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let negative = value < 0.0 && (int_part != "0" || !frac.is_empty());
    let sign = if negative { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// Age of the sample under the cursor: `(buffer_len - 1 - cursor_idx) * refresh_rate` seconds.
pub fn sample_age(buffer_len: usize, cursor_idx: usize, refresh_rate: f64) -> TimeDelta {
    let steps = buffer_len.saturating_sub(1).saturating_sub(cursor_idx);
    let millis = (steps as f64 * refresh_rate * 1000.0).round();
    TimeDelta::milliseconds(millis as i64)
}

/// Tooltip header, e.g. "3 seconds ago" or "1.5 seconds ago".
pub fn format_age(age: TimeDelta) -> String {
    let secs = age.num_milliseconds() as f64 / 1000.0;
    format!("{secs} seconds ago")
}
