//! Record extraction from raw worksheet rows.
//!
//! Every sheet starts with a header row which is skipped. Column positions
//! are 0-based here; the sheet layout documents them 1-based (column 1 is A).

use std::collections::HashSet;

use tracing::debug;

use crate::cell::{cell_at, Cell, DEFAULT_DATE_FORMAT};
use crate::model::{Department, Employee};

/// Number of leading header rows in every sheet
const HEADER_ROWS: usize = 1;

mod employee_col {
    pub const ID: usize = 0;
    pub const LAST_NAME: usize = 1;
    pub const FIRST_NAME: usize = 2;
    pub const PATRONYMIC: usize = 3;
    pub const BIRTH_DATE: usize = 4;
    pub const DEPARTMENT_ID: usize = 5;
}

mod department_col {
    pub const ID: usize = 0;
    pub const NAME: usize = 1;
}

mod task_col {
    pub const EMPLOYEE_ID: usize = 1;
}

/// Options controlling record extraction
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// `chrono` format string for birth dates
    pub date_format: String,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

/// Parses worksheet rows into typed records
#[derive(Debug, Clone, Default)]
pub struct RecordExtractor {
    options: ExtractOptions,
}

impl RecordExtractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    /// Extract employees, dropping rows whose id is empty
    pub fn extract_employees(&self, rows: &[Vec<Cell>]) -> Vec<Employee> {
        let employees: Vec<Employee> = rows
            .iter()
            .skip(HEADER_ROWS)
            .map(|row| self.employee_from_row(row))
            .filter(|e| !e.employee_id.is_empty())
            .collect();

        debug!(
            rows = rows.len().saturating_sub(HEADER_ROWS),
            kept = employees.len(),
            "extracted employees"
        );
        employees
    }

    fn employee_from_row(&self, row: &[Cell]) -> Employee {
        Employee {
            employee_id: cell_at(row, employee_col::ID)
                .as_string()
                .unwrap_or_default(),
            last_name: cell_at(row, employee_col::LAST_NAME).as_trimmed_string(),
            first_name: cell_at(row, employee_col::FIRST_NAME).as_trimmed_string(),
            patronymic: cell_at(row, employee_col::PATRONYMIC).as_trimmed_string(),
            birth_date: cell_at(row, employee_col::BIRTH_DATE)
                .as_date_string(&self.options.date_format),
            department_id: cell_at(row, employee_col::DEPARTMENT_ID).as_int(),
        }
    }

    /// Extract departments. Every row after the header becomes a record,
    /// even if both fields are empty.
    pub fn extract_departments(&self, rows: &[Vec<Cell>]) -> Vec<Department> {
        rows.iter()
            .skip(HEADER_ROWS)
            .map(|row| Department {
                department_id: cell_at(row, department_col::ID).as_int(),
                department_name: cell_at(row, department_col::NAME).as_string(),
            })
            .collect()
    }

    /// Lazily yield the assigned employee id of each task row, keeping only
    /// ids that belong to a known employee.
    pub fn extract_task_employee_ids<'a>(
        &self,
        rows: &'a [Vec<Cell>],
        known_employees: &'a [Employee],
    ) -> impl Iterator<Item = String> + 'a {
        let known: HashSet<&'a str> = known_employees
            .iter()
            .map(|e| e.employee_id.as_str())
            .collect();

        rows.iter()
            .skip(HEADER_ROWS)
            .filter_map(|row| cell_at(row, task_col::EMPLOYEE_ID).as_string())
            .filter(move |id| known.contains(id.as_str()))
    }
}
