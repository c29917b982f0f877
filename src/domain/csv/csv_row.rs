// ============================================================
// CSV ROW TYPES
// ============================================================
// Data structures representing parsed CSV content

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single field in a CSV row
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvField {
    /// Original field name (header)
    pub name: String,

    /// Cleaned field name used for column lookups
    pub clean_name: String,

    /// Field value
    pub value: String,

    /// Whether the value is empty
    pub is_empty: bool,
}

impl CsvField {
    /// Create a new CSV field
    pub fn new(name: String, value: String) -> Self {
        let is_empty = value.trim().is_empty();
        let clean_name = Self::clean_field_name(&name);

        Self {
            name,
            clean_name,
            value,
            is_empty,
        }
    }

    /// Lower-case the header, turning every run of non-alphanumerics into one underscore.
    /// "Difficulty Level" -> "difficulty_level"
    pub fn clean_field_name(name: &str) -> String {
        name.chars()
            .map(|c| {
                if c.is_alphanumeric() {
                    c.to_ascii_lowercase()
                } else {
                    '_'
                }
            })
            .collect::<String>()
            .split('_')
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join("_")
    }
}

/// A single row in a CSV file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CsvRow {
    /// Row index (0-based, header excluded)
    pub index: usize,

    /// All fields in this row
    pub fields: Vec<CsvField>,

    /// Non-empty values keyed by cleaned field name
    pub field_map: HashMap<String, String>,
}

impl CsvRow {
    /// Create a new CSV row
    pub fn new(index: usize, fields: Vec<CsvField>) -> Self {
        let mut field_map = HashMap::new();
        for field in fields.iter().filter(|f| !f.is_empty) {
            // Duplicate headers: the first non-empty value wins
            field_map
                .entry(field.clean_name.clone())
                .or_insert_with(|| field.value.clone());
        }

        Self {
            index,
            fields,
            field_map,
        }
    }

    /// Non-empty value for a cleaned field name
    pub fn get(&self, clean_name: &str) -> Option<&str> {
        self.field_map.get(clean_name).map(String::as_str)
    }
}

/// A parsed file: headers plus rows
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CsvTable {
    /// Original headers in file order
    pub headers: Vec<String>,

    pub rows: Vec<CsvRow>,
}

impl CsvTable {
    pub fn clean_headers(&self) -> Vec<String> {
        self.headers
            .iter()
            .map(|h| CsvField::clean_field_name(h))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
