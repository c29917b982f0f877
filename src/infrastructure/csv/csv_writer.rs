// ============================================================
// CSV WRITER
// ============================================================
// Serialize enriched records, overwriting the destination

use crate::domain::catalog::{OutputRecord, OUTPUT_COLUMNS};
use crate::domain::error::{AppError, Result};
use csv::WriterBuilder;
use std::path::Path;

pub struct CsvRecordWriter;

impl CsvRecordWriter {
    /// Write all records with a header row. The header is emitted even for an empty batch.
    pub fn write_file(path: &Path, records: &[OutputRecord]) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut writer = WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(|e| {
                AppError::IoError(format!("Failed to create {}: {}", path.display(), e))
            })?;

        writer.write_record(OUTPUT_COLUMNS)?;
        for record in records {
            writer.serialize(record)?;
        }

        writer
            .flush()
            .map_err(|e| AppError::IoError(format!("Failed to flush {}: {}", path.display(), e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::RecordStatus;
    use crate::infrastructure::csv::CsvParser;

    fn sample_record(id: &str) -> OutputRecord {
        OutputRecord {
            id: id.to_string(),
            lessontitle: "Intro, with a comma".to_string(),
            content_title: vec!["Introduction to Course".to_string(), "Basic \"Concepts\"".to_string()],
            skill_name: "Programming".to_string(),
            level: "Beginner".to_string(),
            category_id: "cat001".to_string(),
            cat_name: "Computer Science".to_string(),
            sub_cat_name: "Introduction".to_string(),
            cover_image_id: "img_00000000".to_string(),
            preview_video_id: "vid_00000000".to_string(),
            created_at: "2025-01-01 10:00:00".to_string(),
            updated_at: "2025-01-02 10:00:00".to_string(),
            deleted_at: None,
            status: RecordStatus::Draft,
            short_description: String::new(),
            description: String::new(),
            university: "MIT".to_string(),
            link: "https://example.org".to_string(),
        }
    }

    #[test]
    fn test_write_then_read_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("COURSE_CATALOG.csv");

        CsvRecordWriter::write_file(&path, &[sample_record("a"), sample_record("b")]).unwrap();

        let table = CsvParser::new().parse_file(&path).unwrap();
        assert_eq!(table.headers, OUTPUT_COLUMNS.to_vec());
        assert_eq!(table.len(), 2);

        let row = &table.rows[0];
        assert_eq!(row.get("lessontitle"), Some("Intro, with a comma"));
        assert_eq!(row.get("status"), Some("draft"));
        assert_eq!(row.get("deletedat"), None);

        let titles: Vec<String> = serde_json::from_str(row.get("contenttitle").unwrap()).unwrap();
        assert_eq!(titles[1], "Basic \"Concepts\"");
    }

    #[test]
    fn test_empty_batch_still_has_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.csv");

        CsvRecordWriter::write_file(&path, &[]).unwrap();

        let table = CsvParser::new().parse_file(&path).unwrap();
        assert_eq!(table.headers.len(), OUTPUT_COLUMNS.len());
        assert!(table.is_empty());
    }
}
