//! Configuration Settings
//!
//! Settings are loaded from `taskload.toml` (or the file given with
//! `--config`). Every field is optional:
//!
//! ```toml
//! language = "ru"
//! date_format = "%d.%m.%Y"
//!
//! [sheets]
//! tasks = "Задачи 2024"
//!
//! [output]
//! file_name = "Загрузка.docx"
//! open_viewer = true
//!
//! [style]
//! font = "Arial"
//!
//! [save]
//! max_attempts = 3
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use taskload_core::{Labels, Language, ReportStyle, SheetNames, DEFAULT_DATE_FORMAT};
use tracing::debug;

/// File looked up in the current directory when `--config` is not given
pub const DEFAULT_CONFIG_FILE: &str = "taskload.toml";

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Report language
    pub language: Language,
    /// `chrono` format for birth dates
    pub date_format: String,
    /// Worksheet name overrides
    pub sheets: SheetSettings,
    /// Output file settings
    pub output: OutputSettings,
    /// Document styling
    pub style: ReportStyle,
    /// Save retry settings
    pub save: SaveSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            language: Language::default(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
            sheets: SheetSettings::default(),
            output: OutputSettings::default(),
            style: ReportStyle::default(),
            save: SaveSettings::default(),
        }
    }
}

impl Settings {
    /// Parse settings from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(toml_str)
    }

    /// Load settings from `explicit`, or from `taskload.toml` in the current
    /// directory if present, or fall back to defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if !default.is_file() {
                    debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let settings = Self::from_toml_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(settings)
    }

    /// Sheet names for `language`, with configured overrides applied
    pub fn sheet_names(&self, language: Language) -> SheetNames {
        let defaults = language.sheet_names();
        SheetNames {
            employees: self.sheets.employees.clone().unwrap_or(defaults.employees),
            departments: self.sheets.departments.clone().unwrap_or(defaults.departments),
            tasks: self.sheets.tasks.clone().unwrap_or(defaults.tasks),
        }
    }

    /// Output file name, derived from the labels unless configured
    pub fn file_name(&self, labels: &Labels) -> String {
        self.output
            .file_name
            .clone()
            .unwrap_or_else(|| labels.file_name())
    }
}

/// Worksheet name overrides; unset names follow the language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetSettings {
    pub employees: Option<String>,
    pub departments: Option<String>,
    pub tasks: Option<String>,
}

/// Output file configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSettings {
    /// File name inside the output directory
    pub file_name: Option<String>,
    /// Launch the system viewer after saving
    pub open_viewer: bool,
}

/// Save retry configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveSettings {
    /// Maximum save attempts, 0 for unbounded
    pub max_attempts: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let settings = Settings::from_toml_str("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.language, Language::En);
        assert_eq!(settings.date_format, "%d.%m.%Y");
        assert_eq!(settings.save.max_attempts, 0);
        assert!(!settings.output.open_viewer);
    }

    #[test]
    fn test_full_config() {
        let toml = r#"
language = "ru"
date_format = "%Y-%m-%d"

[sheets]
tasks = "Задачи 2024"

[output]
file_name = "Загрузка.docx"
open_viewer = true

[style]
font = "Arial"
title_size = 16

[save]
max_attempts = 3
"#;
        let settings = Settings::from_toml_str(toml).unwrap();
        assert_eq!(settings.language, Language::Ru);
        assert_eq!(settings.date_format, "%Y-%m-%d");
        assert_eq!(settings.style.font, "Arial");
        assert_eq!(settings.style.title_size, 16);
        assert_eq!(settings.style.body_size, 11);
        assert_eq!(settings.save.max_attempts, 3);
        assert!(settings.output.open_viewer);

        let sheets = settings.sheet_names(settings.language);
        assert_eq!(sheets.employees, "Сотрудники");
        assert_eq!(sheets.departments, "Отделы");
        assert_eq!(sheets.tasks, "Задачи 2024");
        assert_eq!(settings.file_name(&Language::Ru.labels()), "Загрузка.docx");
    }

    #[test]
    fn test_file_name_follows_language() {
        let settings = Settings::default();
        assert_eq!(settings.file_name(&Language::En.labels()), "Report.docx");
        assert_eq!(settings.file_name(&Language::Ru.labels()), "Отчет.docx");
    }

    #[test]
    fn test_unknown_language_rejected() {
        assert!(Settings::from_toml_str(r#"language = "de""#).is_err());
    }

    #[test]
    fn test_load_explicit_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[save]\nmax_attempts = 5\n").unwrap();

        let settings = Settings::load(Some(&path)).unwrap();
        assert_eq!(settings.save.max_attempts, 5);
    }

    #[test]
    fn test_load_missing_explicit_file_fails() {
        let dir = tempfile::TempDir::new().unwrap();
        assert!(Settings::load(Some(&dir.path().join("absent.toml"))).is_err());
    }
}
