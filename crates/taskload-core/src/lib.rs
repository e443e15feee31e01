//! # taskload-core
//!
//! The data-shaping pipeline behind taskload reports:
//!
//! - [`extract`]: raw worksheet rows to typed [`Employee`] and [`Department`]
//!   records, plus the referentially filtered task stream
//! - [`aggregate`]: task counting and the ranked department/employee report
//! - [`layout`]: the immutable styled-table description of the document
//!
//! ## Example
//!
//! ```
//! use taskload_core::{
//!     build_layout, count_tasks_by_employee, rank_report, Cell, Language, RecordExtractor,
//!     ReportStyle,
//! };
//!
//! let employees = vec![
//!     vec![Cell::text("id"), Cell::text("last"), Cell::text("first")],
//!     vec![
//!         Cell::text("E1"),
//!         Cell::text("Smirnov"),
//!         Cell::text("Ivan"),
//!         Cell::Empty,
//!         Cell::Empty,
//!         Cell::Number(1.0),
//!     ],
//! ];
//! let departments = vec![
//!     vec![Cell::text("id"), Cell::text("name")],
//!     vec![Cell::Number(1.0), Cell::text("Sales")],
//! ];
//! let tasks = vec![
//!     vec![Cell::text("task"), Cell::text("employee")],
//!     vec![Cell::Number(1.0), Cell::text("E1")],
//! ];
//!
//! let extractor = RecordExtractor::default();
//! let employees = extractor.extract_employees(&employees);
//! let departments = extractor.extract_departments(&departments);
//! let counts = count_tasks_by_employee(extractor.extract_task_employee_ids(&tasks, &employees));
//!
//! let report = rank_report(&departments, &employees, &counts);
//! let layout = build_layout(&report, &Language::En.labels(), &ReportStyle::default());
//! assert_eq!(layout.table.texts()[2], vec!["Smirnov I. ", "1"]);
//! ```

pub mod aggregate;
pub mod cell;
pub mod extract;
pub mod labels;
pub mod layout;
pub mod model;

pub use aggregate::{
    count_tasks_by_employee, rank_report, DepartmentSummary, RankedEmployee, RankedReport,
    TaskCounts,
};
pub use cell::{Cell, RawRow, DEFAULT_DATE_FORMAT};
pub use extract::{ExtractOptions, RecordExtractor};
pub use labels::{Labels, Language, SheetNames};
pub use layout::{
    build_layout, Alignment, ReportLayout, ReportStyle, RowKind, StyledCell, StyledRow,
    StyledTable, Title,
};
pub use model::{Department, Employee};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
