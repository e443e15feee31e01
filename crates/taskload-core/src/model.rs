//! Typed records extracted from the workbook.

use serde::{Deserialize, Serialize};

/// An employee row from the employees sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique, non-empty identifier
    pub employee_id: String,
    /// Last name (trimmed)
    pub last_name: Option<String>,
    /// First name (trimmed)
    pub first_name: Option<String>,
    /// Patronymic (trimmed); `None` when the cell has no value
    pub patronymic: Option<String>,
    /// Birth date rendered as a short date string
    pub birth_date: Option<String>,
    /// Department foreign key; 0 or unmatched means orphaned
    pub department_id: i64,
}

impl Employee {
    /// Create an employee with only the fields needed for ranking
    pub fn new(employee_id: impl Into<String>, department_id: i64) -> Self {
        Self {
            employee_id: employee_id.into(),
            last_name: None,
            first_name: None,
            patronymic: None,
            birth_date: None,
            department_id,
        }
    }

    /// Set the last and first name
    pub fn with_name(mut self, last_name: &str, first_name: &str) -> Self {
        self.last_name = Some(last_name.to_string());
        self.first_name = Some(first_name.to_string());
        self
    }

    /// Set the patronymic
    pub fn with_patronymic(mut self, patronymic: &str) -> Self {
        self.patronymic = Some(patronymic.to_string());
        self
    }

    /// Short display name: `"Smirnova A. I."`, or `"Smirnova A. "` without a
    /// patronymic.
    ///
    /// Initials are taken per character, so Cyrillic names keep a whole
    /// letter. A missing name part leaves its segment empty.
    pub fn short_name(&self) -> String {
        let last_name = self.last_name.as_deref().unwrap_or("");
        let first_initial = initial(self.first_name.as_deref());

        match initial(self.patronymic.as_deref()) {
            Some(p) => format!(
                "{} {}. {}.",
                last_name,
                first_initial.map(String::from).unwrap_or_default(),
                p
            ),
            None => format!(
                "{} {}. ",
                last_name,
                first_initial.map(String::from).unwrap_or_default()
            ),
        }
    }
}

fn initial(part: Option<&str>) -> Option<char> {
    part.and_then(|s| s.chars().next())
}

/// A department row from the departments sheet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Department key
    pub department_id: i64,
    /// Display name
    pub department_name: Option<String>,
}

impl Department {
    pub fn new(department_id: i64, name: impl Into<String>) -> Self {
        Self {
            department_id,
            department_name: Some(name.into()),
        }
    }

    /// Name for display; empty when the cell had no value
    pub fn display_name(&self) -> &str {
        self.department_name.as_deref().unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name_without_patronymic() {
        let e = Employee::new("E1", 1).with_name("Smirnova", "Anna");
        assert_eq!(e.short_name(), "Smirnova A. ");
    }

    #[test]
    fn test_short_name_with_patronymic() {
        let e = Employee::new("E1", 1)
            .with_name("Smirnova", "Anna")
            .with_patronymic("Ivanovna");
        assert_eq!(e.short_name(), "Smirnova A. I.");
    }

    #[test]
    fn test_short_name_cyrillic() {
        let e = Employee::new("E1", 1)
            .with_name("Смирнова", "Анна")
            .with_patronymic("Ивановна");
        assert_eq!(e.short_name(), "Смирнова А. И.");
    }

    #[test]
    fn test_short_name_empty_patronymic_is_absent() {
        let e = Employee::new("E1", 1)
            .with_name("Petrov", "Oleg")
            .with_patronymic("");
        assert_eq!(e.short_name(), "Petrov O. ");
    }

    #[test]
    fn test_short_name_missing_first_name() {
        let mut e = Employee::new("E1", 1);
        e.last_name = Some("Petrov".to_string());
        assert_eq!(e.short_name(), "Petrov . ");
    }

    #[test]
    fn test_department_display_name() {
        assert_eq!(Department::new(1, "Sales").display_name(), "Sales");
        let unnamed = Department {
            department_id: 0,
            department_name: None,
        };
        assert_eq!(unnamed.display_name(), "");
    }
}
