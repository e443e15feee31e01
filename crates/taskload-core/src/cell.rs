//! Raw worksheet cells and the coercion rules applied to them.
//!
//! A spreadsheet reader hands rows of [`Cell`] to the extractor. Coercion
//! never fails: a value that cannot be read as the requested type becomes
//! the documented default (`None` for strings and dates, `0` for integers).

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// A raw row as yielded by a spreadsheet reader. Index 0 is column A.
pub type RawRow = Vec<Cell>;

/// Default short date format used for birth dates
pub const DEFAULT_DATE_FORMAT: &str = "%d.%m.%Y";

/// Lowest serial day number accepted as a date (0100-01-01)
const MIN_DATE_SERIAL: f64 = -657_435.0;

/// First serial day number past the accepted range (10000-01-01)
const MAX_DATE_SERIAL: f64 = 2_958_466.0;

/// A single worksheet value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub enum Cell {
    /// No underlying value
    #[default]
    Empty,
    /// Numeric value; dates arrive here as serial day numbers
    Number(f64),
    /// Text value
    Text(String),
    /// Boolean value
    Bool(bool),
}

impl Cell {
    /// Create a text cell
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Whether the cell carries no value
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Read the cell as a string, `None` when it has no value
    pub fn as_string(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) => Some(format_number(*n)),
            Cell::Bool(b) => Some(if *b { "TRUE" } else { "FALSE" }.to_string()),
        }
    }

    /// Read the cell as a trimmed string
    pub fn as_trimmed_string(&self) -> Option<String> {
        self.as_string().map(|s| s.trim().to_string())
    }

    /// Read the cell as a floating point number.
    ///
    /// Text is parsed with locale-invariant decimal rules. Booleans and
    /// unparseable text are treated like an empty cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            Cell::Text(s) => parse_decimal(s),
            Cell::Empty | Cell::Bool(_) => None,
        }
    }

    /// Read the cell as an integer, truncating toward zero. Defaults to 0.
    pub fn as_int(&self) -> i64 {
        // `as` saturates on overflow and maps NaN to 0
        self.as_number().map(|n| n.trunc() as i64).unwrap_or(0)
    }

    /// Read the cell as a serial date and render it with `format`
    pub fn as_date_string(&self, format: &str) -> Option<String> {
        self.as_number()
            .and_then(serial_to_date)
            .map(|date| date.format(format).to_string())
    }
}

/// Fetch a cell by 0-based column index, treating missing columns as empty
pub fn cell_at(row: &[Cell], column: usize) -> &Cell {
    const EMPTY: &Cell = &Cell::Empty;
    row.get(column).unwrap_or(EMPTY)
}

/// Render a number the way a spreadsheet displays a general-format value
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        value.to_string()
    }
}

/// Parse a decimal number independent of locale
fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

/// Convert a serial day number (1899-12-30 epoch) to a calendar date.
///
/// The fractional part is the time of day and does not move the date.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || !(MIN_DATE_SERIAL..MAX_DATE_SERIAL).contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    epoch.checked_add_signed(Duration::days(serial.trunc() as i64))
}

/// Format a 0-based (row, column) pair as an `A1`-style reference
pub fn cell_reference(row: usize, column: usize) -> String {
    let mut letters = Vec::new();
    let mut n = column + 1;
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(b'A' + rem as u8);
        n = (n - 1) / 26;
    }
    letters.reverse();
    format!("{}{}", String::from_utf8_lossy(&letters), row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_as_string() {
        assert_eq!(Cell::Empty.as_string(), None);
        assert_eq!(Cell::text("abc").as_string(), Some("abc".to_string()));
        assert_eq!(Cell::Number(42.0).as_string(), Some("42".to_string()));
        assert_eq!(Cell::Number(2.5).as_string(), Some("2.5".to_string()));
        assert_eq!(Cell::Bool(true).as_string(), Some("TRUE".to_string()));
    }

    #[test]
    fn test_trimmed_string_keeps_empty_text() {
        assert_eq!(Cell::text("  ").as_trimmed_string(), Some(String::new()));
        assert_eq!(Cell::Empty.as_trimmed_string(), None);
    }

    #[test]
    fn test_as_int_truncates_toward_zero() {
        assert_eq!(Cell::Number(3.9).as_int(), 3);
        assert_eq!(Cell::Number(-3.9).as_int(), -3);
        assert_eq!(Cell::text(" 7.2 ").as_int(), 7);
    }

    #[test]
    fn test_as_int_defaults_to_zero() {
        assert_eq!(Cell::Empty.as_int(), 0);
        assert_eq!(Cell::text("n/a").as_int(), 0);
        assert_eq!(Cell::text("").as_int(), 0);
        assert_eq!(Cell::Bool(true).as_int(), 0);
    }

    #[test]
    fn test_decimal_parsing_is_locale_invariant() {
        assert_eq!(Cell::text("1.5").as_number(), Some(1.5));
        assert_eq!(Cell::text("1,5").as_number(), None);
    }

    #[test]
    fn test_serial_to_date() {
        assert_eq!(serial_to_date(0.0), NaiveDate::from_ymd_opt(1899, 12, 30));
        assert_eq!(serial_to_date(1.0), NaiveDate::from_ymd_opt(1899, 12, 31));
        assert_eq!(serial_to_date(45000.75), NaiveDate::from_ymd_opt(2023, 3, 15));
        assert_eq!(serial_to_date(-1.5), NaiveDate::from_ymd_opt(1899, 12, 29));
    }

    #[test]
    fn test_serial_out_of_range() {
        assert_eq!(serial_to_date(3_000_000.0), None);
        assert_eq!(serial_to_date(-700_000.0), None);
        assert_eq!(serial_to_date(f64::NAN), None);
    }

    #[test]
    fn test_as_date_string() {
        let cell = Cell::Number(33000.0);
        assert_eq!(
            cell.as_date_string(DEFAULT_DATE_FORMAT),
            Some("07.05.1990".to_string())
        );
        assert_eq!(Cell::text("33000").as_date_string("%Y-%m-%d"), Some("1990-05-07".to_string()));
        assert_eq!(Cell::text("yesterday").as_date_string(DEFAULT_DATE_FORMAT), None);
        assert_eq!(Cell::Empty.as_date_string(DEFAULT_DATE_FORMAT), None);
    }

    #[test]
    fn test_cell_at_out_of_bounds() {
        let row = vec![Cell::text("a")];
        assert_eq!(cell_at(&row, 0), &Cell::text("a"));
        assert!(cell_at(&row, 5).is_empty());
    }

    #[test]
    fn test_cell_reference() {
        assert_eq!(cell_reference(0, 0), "A1");
        assert_eq!(cell_reference(9, 1), "B10");
        assert_eq!(cell_reference(0, 25), "Z1");
        assert_eq!(cell_reference(0, 26), "AA1");
        assert_eq!(cell_reference(4, 27), "AB5");
    }
}
