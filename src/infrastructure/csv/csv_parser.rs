// ============================================================
// CSV PARSER
// ============================================================
// Parse CSV files with encoding detection and error handling

use crate::domain::csv::{CsvField, CsvRow, CsvTable};
use crate::domain::error::{AppError, Result};
use csv::{ReaderBuilder, StringRecord, Trim};
use encoding_rs::WINDOWS_1252;
use std::path::Path;

/// CSV parser with encoding detection
pub struct CsvParser {
    /// Delimiter character (default: comma)
    delimiter: u8,

    /// Whether to trim whitespace from values
    trim: bool,
}

impl Default for CsvParser {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
        }
    }
}

impl CsvParser {
    /// Create a new CSV parser with default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Set custom delimiter
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Parse a CSV file into headers and rows
    pub fn parse_file(&self, path: &Path) -> Result<CsvTable> {
        let content = Self::read_with_encoding_detection(path)?;
        self.parse_content(&content)
    }

    /// Parse CSV content from string
    pub fn parse_content(&self, content: &str) -> Result<CsvTable> {
        let mut reader = ReaderBuilder::new()
            .delimiter(self.delimiter)
            .trim(if self.trim { Trim::All } else { Trim::None })
            .flexible(true) // Allow rows with different lengths
            .from_reader(content.as_bytes());

        let headers = reader
            .headers()
            .map_err(|e| AppError::ParseError(format!("Failed to read CSV headers: {}", e)))?
            .clone();

        let mut rows = Vec::new();
        for (index, result) in reader.records().enumerate() {
            let record = result.map_err(|e| {
                AppError::ParseError(format!("Failed to parse CSV row {}: {}", index + 1, e))
            })?;
            rows.push(Self::parse_row(index, &headers, &record));
        }

        Ok(CsvTable {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows,
        })
    }

    /// Read the whole file, decoding as UTF-8 and falling back to Windows-1252
    fn read_with_encoding_detection(path: &Path) -> Result<String> {
        let buffer = std::fs::read(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => {
                AppError::NotFound(format!("Input file {} does not exist", path.display()))
            }
            _ => AppError::IoError(format!("Failed to read {}: {}", path.display(), e)),
        })?;

        // Excel likes to prepend a BOM
        let bytes = buffer
            .strip_prefix(&[0xEF, 0xBB, 0xBF])
            .unwrap_or(buffer.as_slice());

        match std::str::from_utf8(bytes) {
            Ok(content) => Ok(content.to_string()),
            Err(_) => {
                tracing::warn!(
                    path = %path.display(),
                    "Input is not valid UTF-8, decoding as Windows-1252"
                );
                let (decoded, _, _) = WINDOWS_1252.decode(bytes);
                Ok(decoded.into_owned())
            }
        }
    }

    /// Parse a single CSV row; short records are padded with empty values
    fn parse_row(index: usize, headers: &StringRecord, record: &StringRecord) -> CsvRow {
        let fields = headers
            .iter()
            .enumerate()
            .map(|(idx, header)| {
                let value = record.get(idx).unwrap_or("").to_string();
                CsvField::new(header.to_string(), value)
            })
            .collect();

        CsvRow::new(index, fields)
    }

    /// Detect delimiter from content (comma, semicolon, tab, pipe)
    pub fn detect_delimiter(content: &str) -> u8 {
        let candidates = [b',', b';', b'\t', b'|'];
        let sample_lines: Vec<_> = content.lines().take(10).collect();
        if sample_lines.is_empty() {
            return b',';
        }

        let mut best_delimiter = b',';
        let mut best_score = 0.0f32;

        for &delimiter in &candidates {
            let field_counts: Vec<usize> = sample_lines
                .iter()
                .map(|line| line.bytes().filter(|&b| b == delimiter).count())
                .collect();

            // Score by consistency (low standard deviation) and frequency
            let avg = field_counts.iter().sum::<usize>() as f32 / field_counts.len() as f32;
            let variance = field_counts
                .iter()
                .map(|&x| (x as f32 - avg).powi(2))
                .sum::<f32>()
                / field_counts.len() as f32;

            let score = avg / (1.0 + variance.sqrt());

            if score > best_score {
                best_score = score;
                best_delimiter = delimiter;
            }
        }

        best_delimiter
    }

    /// Parse CSV file with automatic delimiter detection
    pub fn parse_file_auto_detect(path: &Path) -> Result<CsvTable> {
        let content = Self::read_with_encoding_detection(path)?;
        let delimiter = Self::detect_delimiter(&content);
        Self::default()
            .with_delimiter(delimiter)
            .parse_content(&content)
    }
}
