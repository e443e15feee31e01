//! Workbook data source using calamine.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use calamine::{open_workbook_auto, Data, Range, Reader, Sheets};
use taskload_core::cell::cell_reference;
use taskload_core::{Cell, RawRow};
use tracing::{debug, trace};

use crate::error::{DataError, Result};
use crate::sources::DataSource;

/// An open workbook. The file stays open until the source is dropped.
pub struct WorkbookSource {
    /// Path to the workbook
    path: PathBuf,
    /// Open workbook handle (format detected from the extension)
    workbook: Sheets<BufReader<File>>,
    /// Sheet names cache
    sheet_names: Vec<String>,
}

impl WorkbookSource {
    /// Open a workbook (`.xlsx`, `.xlsm`, `.xlsb`, `.xls` or `.ods`)
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(DataError::FileNotFound(path.display().to_string()));
        }

        let workbook = open_workbook_auto(path)
            .map_err(|e| DataError::WorkbookOpen(format!("{}: {}", path.display(), e)))?;
        let sheet_names = workbook.sheet_names().to_vec();

        debug!(path = %path.display(), sheets = ?sheet_names, "opened workbook");

        Ok(Self {
            path: path.to_path_buf(),
            workbook,
            sheet_names,
        })
    }

    /// Convert a calamine cell to a raw cell
    fn to_cell(data: &Data) -> Cell {
        match data {
            Data::Empty => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::Bool(b) => Cell::Bool(*b),
            // Serial day number, the same value the cell stores
            Data::DateTime(dt) => Cell::Number(dt.as_f64()),
            Data::DateTimeIso(s) => Cell::Text(s.clone()),
            Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(_) => Cell::Empty,
        }
    }

    /// Extract rows of the used range, addressing columns from column A
    fn extract_rows(range: &Range<Data>) -> Vec<RawRow> {
        let (Some((start_row, _)), Some((end_row, end_col))) = (range.start(), range.end()) else {
            return Vec::new();
        };

        (start_row..=end_row)
            .map(|row_idx| {
                (0..=end_col)
                    .map(|col_idx| match range.get_value((row_idx, col_idx)) {
                        Some(Data::Error(e)) => {
                            trace!(
                                cell = %cell_reference(row_idx as usize, col_idx as usize),
                                error = ?e,
                                "error cell read as empty"
                            );
                            Cell::Empty
                        }
                        Some(data) => Self::to_cell(data),
                        None => Cell::Empty,
                    })
                    .collect()
            })
            .collect()
    }
}

impl DataSource for WorkbookSource {
    fn read_rows(&mut self, sheet: &str) -> Result<Vec<RawRow>> {
        if !self.sheet_names.iter().any(|name| name == sheet) {
            return Err(DataError::SheetNotFound(format!(
                "'{}' in {} (available: {})",
                sheet,
                self.path.display(),
                self.sheet_names.join(", ")
            )));
        }

        let range = self.workbook.worksheet_range(sheet)?;
        let rows = Self::extract_rows(&range);
        debug!(sheet, rows = rows.len(), "read sheet");
        Ok(rows)
    }

    fn list_sheets(&self) -> Vec<String> {
        self.sheet_names.clone()
    }
}
