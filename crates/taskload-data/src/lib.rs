//! # taskload-data
//!
//! Workbook reading for taskload. A [`WorkbookSource`] opens the workbook
//! once, and yields each sheet as raw [`taskload_core::Cell`] rows for the
//! record extractor.
//!
//! ## Example
//!
//! ```rust,ignore
//! use taskload_core::SheetNames;
//! use taskload_data::{read_workload_sheets, WorkbookSource};
//!
//! let mut source = WorkbookSource::open("Data.xlsb")?;
//! let sheets = read_workload_sheets(&mut source, &SheetNames::default())?;
//! println!("{} employee rows", sheets.employees.len());
//! ```

pub mod error;
pub mod sources;

pub use error::{DataError, Result};
pub use sources::{DataSource, WorkbookSource};

use taskload_core::{RawRow, SheetNames};

/// Raw rows of the three input sheets, header rows included
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkloadSheets {
    pub employees: Vec<RawRow>,
    pub departments: Vec<RawRow>,
    pub tasks: Vec<RawRow>,
}

/// Read the employees, departments and tasks sheets from `source`
pub fn read_workload_sheets<S: DataSource>(
    source: &mut S,
    names: &SheetNames,
) -> Result<WorkloadSheets> {
    Ok(WorkloadSheets {
        employees: source.read_rows(&names.employees)?,
        departments: source.read_rows(&names.departments)?,
        tasks: source.read_rows(&names.tasks)?,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use taskload_core::Cell;

    use super::*;

    struct MemorySource {
        sheets: HashMap<String, Vec<RawRow>>,
    }

    impl DataSource for MemorySource {
        fn read_rows(&mut self, sheet: &str) -> Result<Vec<RawRow>> {
            self.sheets
                .get(sheet)
                .cloned()
                .ok_or_else(|| DataError::SheetNotFound(sheet.to_string()))
        }

        fn list_sheets(&self) -> Vec<String> {
            self.sheets.keys().cloned().collect()
        }
    }

    #[test]
    fn test_read_workload_sheets() {
        let mut sheets = HashMap::new();
        sheets.insert("Employees".to_string(), vec![vec![Cell::text("id")]]);
        sheets.insert("Departments".to_string(), vec![]);
        sheets.insert("Tasks".to_string(), vec![vec![Cell::Number(1.0)]]);
        let mut source = MemorySource { sheets };

        let read = read_workload_sheets(&mut source, &SheetNames::default()).unwrap();
        assert_eq!(read.employees, vec![vec![Cell::text("id")]]);
        assert!(read.departments.is_empty());
        assert_eq!(read.tasks.len(), 1);
    }

    #[test]
    fn test_read_workload_sheets_missing_sheet() {
        let mut source = MemorySource {
            sheets: HashMap::new(),
        };
        let err = read_workload_sheets(&mut source, &SheetNames::default()).unwrap_err();
        assert!(matches!(err, DataError::SheetNotFound(ref s) if s == "Employees"));
    }
}
