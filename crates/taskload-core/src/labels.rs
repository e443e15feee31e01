//! Fixed output labels for the two supported report languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Report language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ru,
}

impl Language {
    /// Labels printed into the report
    pub fn labels(self) -> Labels {
        match self {
            Language::En => Labels {
                title: "Workload report",
                department_header: "Department",
                task_count_header: "Task count",
                report_suffix: "Report",
            },
            Language::Ru => Labels {
                title: "Отчет по загрузке",
                department_header: "Отдел",
                task_count_header: "Количество задач",
                report_suffix: "Отчет",
            },
        }
    }

    /// Default worksheet names in this language
    pub fn sheet_names(self) -> SheetNames {
        match self {
            Language::En => SheetNames {
                employees: "Employees".to_string(),
                departments: "Departments".to_string(),
                tasks: "Tasks".to_string(),
            },
            Language::Ru => SheetNames {
                employees: "Сотрудники".to_string(),
                departments: "Отделы".to_string(),
                tasks: "Задачи".to_string(),
            },
        }
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "ru" | "russian" => Ok(Language::Ru),
            other => Err(format!("unsupported language '{}', expected 'en' or 'ru'", other)),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::En => write!(f, "en"),
            Language::Ru => write!(f, "ru"),
        }
    }
}

/// Text fragments used in the rendered document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub title: &'static str,
    pub department_header: &'static str,
    pub task_count_header: &'static str,
    /// File name stem of the saved document
    pub report_suffix: &'static str,
}

impl Labels {
    /// Default output file name, e.g. `Report.docx`
    pub fn file_name(&self) -> String {
        format!("{}.docx", self.report_suffix)
    }
}

/// Names of the three input worksheets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SheetNames {
    pub employees: String,
    pub departments: String,
    pub tasks: String,
}

impl Default for SheetNames {
    fn default() -> Self {
        Language::default().sheet_names()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!("en".parse::<Language>(), Ok(Language::En));
        assert_eq!("RU".parse::<Language>(), Ok(Language::Ru));
        assert_eq!("russian".parse::<Language>(), Ok(Language::Ru));
        assert!("de".parse::<Language>().is_err());
    }

    #[test]
    fn test_file_name() {
        assert_eq!(Language::En.labels().file_name(), "Report.docx");
        assert_eq!(Language::Ru.labels().file_name(), "Отчет.docx");
    }

    #[test]
    fn test_sheet_names() {
        assert_eq!(SheetNames::default().employees, "Employees");
        assert_eq!(Language::Ru.sheet_names().tasks, "Задачи");
    }
}
