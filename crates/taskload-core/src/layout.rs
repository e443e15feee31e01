//! Styled report layout.
//!
//! [`build_layout`] turns a [`RankedReport`] into an immutable description of
//! the document: a title block and a two-column table where every cell
//! already carries its final formatting. Writers render this description in
//! a single pass and make no styling decisions of their own.

use serde::{Deserialize, Serialize};

use crate::aggregate::RankedReport;
use crate::labels::Labels;

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

/// Fonts and colors of the report. Colors are RGB hex without `#`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportStyle {
    pub font: String,
    /// Title size in points
    pub title_size: u32,
    /// Table text size in points
    pub body_size: u32,
    pub header_fill: String,
    pub header_text: String,
    pub department_fill: String,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            font: "Calibri".to_string(),
            title_size: 14,
            body_size: 11,
            header_fill: "808080".to_string(),
            header_text: "FFFFFF".to_string(),
            department_fill: "D9D9D9".to_string(),
        }
    }
}

/// Centered heading above the table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Title {
    pub text: String,
    pub font: String,
    pub size: u32,
    pub align: Alignment,
}

/// What a table row represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RowKind {
    Header,
    Department,
    Employee,
}

/// A table cell with all formatting resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledCell {
    pub text: String,
    pub bold: bool,
    /// Text color, `None` for automatic
    pub color: Option<String>,
    /// Background fill
    pub shading: Option<String>,
    /// Paragraph alignment, `None` to inherit
    pub align: Option<Alignment>,
    pub font: String,
    pub size: u32,
    /// Whether the cell draws its borders
    pub borders: bool,
}

impl StyledCell {
    /// Whether the cell shows no visible text
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledRow {
    pub kind: RowKind,
    pub cells: Vec<StyledCell>,
}

impl StyledRow {
    /// Whether every cell in the row is blank
    pub fn is_blank(&self) -> bool {
        self.cells.iter().all(StyledCell::is_blank)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StyledTable {
    /// Column widths in twentieths of a point
    pub column_widths: Vec<u32>,
    /// Default text size in points
    pub body_size: u32,
    pub rows: Vec<StyledRow>,
}

impl StyledTable {
    pub fn has_blank_rows(&self) -> bool {
        self.rows.iter().any(StyledRow::is_blank)
    }

    /// Plain text of every row, for inspection and tests
    pub fn texts(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|r| r.cells.iter().map(|c| c.text.clone()).collect())
            .collect()
    }
}

/// Complete document description
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportLayout {
    pub title: Title,
    pub table: StyledTable,
}

const COLUMN_WIDTHS: [u32; 2] = [5400, 3600];

const NAME_COLUMN: usize = 0;

/// Build the styled layout of a ranked report.
///
/// Rows are allocated exactly: one header, then each department followed by
/// its employees in ranked order.
pub fn build_layout(report: &RankedReport, labels: &Labels, style: &ReportStyle) -> ReportLayout {
    let mut rows = Vec::with_capacity(report.row_count());

    rows.push(styled_row(
        RowKind::Header,
        [labels.department_header.to_string(), labels.task_count_header.to_string()],
        style,
    ));

    for summary in &report.departments {
        rows.push(styled_row(
            RowKind::Department,
            [
                summary.department.display_name().to_string(),
                summary.total.to_string(),
            ],
            style,
        ));

        for ranked in &summary.employees {
            rows.push(styled_row(
                RowKind::Employee,
                [ranked.employee.short_name(), ranked.task_count.to_string()],
                style,
            ));
        }
    }

    let table = StyledTable {
        column_widths: COLUMN_WIDTHS.to_vec(),
        body_size: style.body_size,
        rows,
    };
    debug_assert!(!table.has_blank_rows(), "layout produced a blank row");

    ReportLayout {
        title: Title {
            text: labels.title.to_string(),
            font: style.font.clone(),
            size: style.title_size,
            align: Alignment::Center,
        },
        table,
    }
}

fn styled_row(kind: RowKind, texts: [String; 2], style: &ReportStyle) -> StyledRow {
    StyledRow {
        kind,
        cells: texts
            .into_iter()
            .enumerate()
            .map(|(column, text)| style_cell(kind, column, text, style))
            .collect(),
    }
}

/// Apply every cell formatting rule for a cell at `column` of a `kind` row
fn style_cell(kind: RowKind, column: usize, text: String, style: &ReportStyle) -> StyledCell {
    let (bold, color, shading) = match kind {
        RowKind::Header => (
            true,
            Some(style.header_text.clone()),
            Some(style.header_fill.clone()),
        ),
        RowKind::Department => (true, None, Some(style.department_fill.clone())),
        RowKind::Employee => (false, None, None),
    };

    let align = match kind {
        RowKind::Header => None,
        RowKind::Department | RowKind::Employee if column == NAME_COLUMN => Some(Alignment::Left),
        _ => None,
    };

    let borders = !text.trim().is_empty();

    StyledCell {
        text,
        bold,
        color,
        shading,
        align,
        font: style.font.clone(),
        size: style.body_size,
        borders,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{count_tasks_by_employee, rank_report, TaskCounts};
    use crate::labels::Language;
    use crate::model::{Department, Employee};

    fn sample_report() -> RankedReport {
        let employees = vec![
            Employee::new("E1", 1).with_name("Smirnov", "Ivan"),
            Employee::new("E2", 1)
                .with_name("Ivanova", "Anna")
                .with_patronymic("Petrovna"),
            Employee::new("E3", 2).with_name("Orlov", "Pavel"),
            Employee::new("E4", 99).with_name("Nobody", "Nils"),
        ];
        let departments = vec![Department::new(1, "Sales"), Department::new(2, "Support")];
        let counts = count_tasks_by_employee(
            ["E1", "E2", "E1"].iter().map(|s| s.to_string()),
        );
        rank_report(&departments, &employees, &counts)
    }

    fn layout(report: &RankedReport) -> ReportLayout {
        build_layout(report, &Language::En.labels(), &ReportStyle::default())
    }

    #[test]
    fn test_layout_rows() {
        let report = sample_report();
        let layout = layout(&report);

        assert_eq!(
            layout.table.texts(),
            vec![
                vec!["Department", "Task count"],
                vec!["Sales", "3"],
                vec!["Smirnov I. ", "2"],
                vec!["Ivanova A. P.", "1"],
                vec!["Support", "0"],
                vec!["Orlov P. ", "0"],
            ]
        );
        assert_eq!(layout.table.rows.len(), report.row_count());
        assert!(!layout.table.has_blank_rows());
    }

    #[test]
    fn test_row_kinds() {
        let layout = layout(&sample_report());
        let kinds: Vec<RowKind> = layout.table.rows.iter().map(|r| r.kind).collect();
        assert_eq!(
            kinds,
            vec![
                RowKind::Header,
                RowKind::Department,
                RowKind::Employee,
                RowKind::Employee,
                RowKind::Department,
                RowKind::Employee,
            ]
        );
    }

    #[test]
    fn test_title() {
        let layout = build_layout(
            &RankedReport::default(),
            &Language::Ru.labels(),
            &ReportStyle::default(),
        );
        assert_eq!(layout.title.text, "Отчет по загрузке");
        assert_eq!(layout.title.align, Alignment::Center);
        assert_eq!(layout.title.size, 14);
        assert_eq!(layout.table.texts(), vec![vec!["Отдел", "Количество задач"]]);
    }

    #[test]
    fn test_header_style() {
        let layout = layout(&sample_report());
        for cell in &layout.table.rows[0].cells {
            assert!(cell.bold);
            assert_eq!(cell.color.as_deref(), Some("FFFFFF"));
            assert_eq!(cell.shading.as_deref(), Some("808080"));
            assert_eq!(cell.align, None);
        }
    }

    #[test]
    fn test_department_style() {
        let layout = layout(&sample_report());
        let row = &layout.table.rows[1];
        assert!(row.cells.iter().all(|c| c.bold));
        assert!(row
            .cells
            .iter()
            .all(|c| c.shading.as_deref() == Some("D9D9D9")));
        assert_eq!(row.cells[0].align, Some(Alignment::Left));
        assert_eq!(row.cells[1].align, None);
    }

    #[test]
    fn test_employee_style() {
        let layout = layout(&sample_report());
        let row = &layout.table.rows[2];
        assert!(row.cells.iter().all(|c| !c.bold && c.shading.is_none()));
        assert_eq!(row.cells[0].align, Some(Alignment::Left));
    }

    #[test]
    fn test_uniform_font() {
        let style = ReportStyle {
            font: "Arial".to_string(),
            body_size: 10,
            ..Default::default()
        };
        let layout = build_layout(&sample_report(), &Language::En.labels(), &style);
        assert!(layout
            .table
            .rows
            .iter()
            .flat_map(|r| &r.cells)
            .all(|c| c.font == "Arial" && c.size == 10));
        assert_eq!(layout.table.body_size, 10);
        assert_eq!(layout.title.font, "Arial");
    }

    #[test]
    fn test_borders_only_on_text() {
        let employees = vec![Employee::new("E1", 0)];
        let departments = vec![Department {
            department_id: 0,
            department_name: None,
        }];
        let report = rank_report(&departments, &employees, &TaskCounts::default());
        let layout = layout(&report);

        let unnamed = &layout.table.rows[1];
        assert_eq!(unnamed.cells[0].text, "");
        assert!(!unnamed.cells[0].borders);
        assert!(unnamed.cells[1].borders);
        assert!(!unnamed.is_blank());
    }

    #[test]
    fn test_empty_tasks_show_zero() {
        let employees = vec![Employee::new("a", 1).with_name("A", "B")];
        let departments = vec![Department::new(1, "X")];
        let report = rank_report(&departments, &employees, &TaskCounts::default());

        assert_eq!(
            layout(&report).table.texts(),
            vec![
                vec!["Department", "Task count"],
                vec!["X", "0"],
                vec!["A B. ", "0"],
            ]
        );
    }
}
