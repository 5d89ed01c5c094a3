//! Common formatting helpers for the `prismspf-mc` crates
//!
//! These are left public for convenience.
//!
//! Listing processes and samples at the terminal needs the same few things
//! everywhere: optional values shown as "none", and names squeezed into a
//! fixed column width.

// standard library
use std::fmt::Display;

// Alias for the format! macro out of laziness
pub use std::format as f;

/// Extends Option for easy display formatting
pub trait OptionFormat {
    /// Better option outputs
    ///
    /// Generic over anything that implements `Display`, this will either be the
    /// value contained within `Some()` or "none" for the `None` variant.
    ///
    /// For example:
    ///
    /// ```rust
    /// # use pfmc_format::OptionFormat;
    /// let direction: Option<&str> = Some("in");
    /// assert_eq!(direction.display(), "in");
    ///
    /// let direction: Option<&str> = None;
    /// assert_eq!(direction.display(), "none");
    /// ```
    fn display(&self) -> String;
}

impl<T: Display> OptionFormat for Option<T> {
    fn display(&self) -> String {
        match self {
            Some(value) => f!("{value}"),
            None => "none".to_string(),
        }
    }
}

/// Shorten text to fit a table column
///
/// Text longer than `width` characters is cut and finished with `...` so the
/// result is exactly `width` characters. Anything that already fits is
/// returned as-is.
///
/// ```rust
/// # use pfmc_format::truncate;
/// assert_eq!(truncate("Set Numerical Parameters", 12), "Set Numer...");
/// assert_eq!(truncate("Software", 12), "Software");
/// ```
pub fn truncate(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }

    let keep = width.saturating_sub(3);
    let mut short: String = s.chars().take(keep).collect();
    short.push_str(&".".repeat(width - keep));
    short
}

/// Header and divider for a fixed-width listing table
///
/// Each `(title, width)` pair is a left-aligned column. The returned string is
/// the heading row followed by a dashed rule across the full width.
///
/// ```rust
/// # use pfmc_format::table_heading;
/// let heading = table_heading(&[("name", 6), ("id", 4)]);
/// assert_eq!(heading, "name  id  \n----------");
/// ```
pub fn table_heading(columns: &[(&str, usize)]) -> String {
    let mut s = String::new();
    let mut total = 0;
    for (title, width) in columns {
        s += &f!("{title:<width$}");
        total += width;
    }
    s += &f!("\n{:-<1$}", "", total);
    s
}

/// A single row matching [table_heading()] column widths
///
/// Values that do not fit their column are shortened with [truncate()], always
/// leaving one space of padding before the next column.
///
/// ```rust
/// # use pfmc_format::table_row;
/// assert_eq!(table_row(&[("abcdefgh", 6), ("7", 4)]), "ab... 7   ");
/// ```
pub fn table_row(columns: &[(&str, usize)]) -> String {
    let mut s = String::new();
    for (value, width) in columns {
        let text = truncate(value, width.saturating_sub(1));
        s += &f!("{text:<width$}");
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_edges() {
        assert_eq!(truncate("", 4), "");
        assert_eq!(truncate("abcd", 4), "abcd");
        assert_eq!(truncate("abcde", 4), "a...");
        assert_eq!(truncate("abcde", 2), "..");
    }

    #[test]
    fn row_lines_up_with_heading() {
        let columns = [("name", 10), ("id", 8)];
        let heading = table_heading(&columns);
        let row = table_row(&[("Software", 10), ("proc-1", 8)]);
        let first = heading.lines().next().unwrap();
        assert_eq!(first.len(), row.len());
        assert_eq!(row, "Software  proc-1  ");
    }
}
