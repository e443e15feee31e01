//! Data source implementations.

pub mod workbook;

pub use workbook::WorkbookSource;

use taskload_core::RawRow;

use crate::error::Result;

/// A source of named sheets of raw rows
pub trait DataSource {
    /// Read every row of a sheet, starting with its header row.
    ///
    /// Column 0 of each row is spreadsheet column A.
    fn read_rows(&mut self, sheet: &str) -> Result<Vec<RawRow>>;

    /// List available sheets
    fn list_sheets(&self) -> Vec<String>;
}
