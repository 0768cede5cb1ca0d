//! Text rendering for rotated sequences.

use std::fmt::Display;

pub const DEFAULT_SEPARATOR: &str = " ";

/// Joins the decimal form of each value with `separator`.
pub fn render_line<T: Display>(values: &[T], separator: &str) -> String {
    values
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Space-separated rendering, e.g. `2 3 4 5 1`.
pub fn render_spaced<T: Display>(values: &[T]) -> String {
    render_line(values, DEFAULT_SEPARATOR)
}
