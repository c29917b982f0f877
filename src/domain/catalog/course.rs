// ============================================================
// COURSE INPUT RECORD
// ============================================================
// Maps a parsed CSV row onto the fields the enrichment needs

use crate::domain::csv::CsvRow;
use crate::domain::error::{AppError, Result};

/// Cleaned header names accepted for each input column, first match wins
const TITLE_COLUMNS: &[&str] = &["name", "title", "course_name", "lessontitle"];
const LEVEL_COLUMNS: &[&str] = &["difficulty_level", "level"];
const ABOUT_COLUMNS: &[&str] = &["about", "short_description"];
const DESCRIPTION_COLUMNS: &[&str] = &["course_description", "description"];
const UNIVERSITY_COLUMNS: &[&str] = &["university", "institution"];
const LINK_COLUMNS: &[&str] = &["link", "url"];

/// Spreadsheet exports write missing cells as these literals
const NULL_MARKERS: &[&str] = &["nan", "null", "none", "n/a"];

/// One course read from the input catalog
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseRecord {
    pub title: String,
    pub level: String,
    pub about: String,
    pub description: String,
    pub university: String,
    pub link: String,
}

impl CourseRecord {
    /// Build a record from a row; absent or null-like values become empty strings.
    pub fn from_row(row: &CsvRow) -> Self {
        Self {
            title: Self::lookup(row, TITLE_COLUMNS),
            level: Self::lookup(row, LEVEL_COLUMNS),
            about: Self::lookup(row, ABOUT_COLUMNS),
            description: Self::lookup(row, DESCRIPTION_COLUMNS),
            university: Self::lookup(row, UNIVERSITY_COLUMNS),
            link: Self::lookup(row, LINK_COLUMNS),
        }
    }

    /// Fail when none of the accepted title headers is present.
    pub fn require_title_column(clean_headers: &[String]) -> Result<()> {
        let found = clean_headers
            .iter()
            .any(|h| TITLE_COLUMNS.contains(&h.as_str()));
        if found {
            Ok(())
        } else {
            Err(AppError::ValidationError(format!(
                "Input is missing a course title column (expected one of: {})",
                TITLE_COLUMNS.join(", ")
            )))
        }
    }

    fn lookup(row: &CsvRow, aliases: &[&str]) -> String {
        aliases
            .iter()
            .find_map(|alias| row.get(alias))
            .map(normalize_cell)
            .unwrap_or_default()
    }
}

fn normalize_cell(value: &str) -> String {
    let trimmed = value.trim();
    if NULL_MARKERS
        .iter()
        .any(|marker| trimmed.eq_ignore_ascii_case(marker))
    {
        String::new()
    } else {
        trimmed.to_string()
    }
}
