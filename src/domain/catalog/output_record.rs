// ============================================================
// ENRICHED OUTPUT TYPES
// ============================================================

use super::CategoryDef;
use serde::{Serialize, Serializer};
use std::fmt;

/// Output columns, in the order they are written
pub const OUTPUT_COLUMNS: [&str; 18] = [
    "id",
    "lessontitle",
    "contentTitle",
    "skillName",
    "level",
    "categoryId",
    "catName",
    "subCatName",
    "coverImageId",
    "previewVideoId",
    "createdAt",
    "updatedAt",
    "deletedAt",
    "status",
    "shortDescription",
    "description",
    "university",
    "link",
];

/// Format of `createdAt` / `updatedAt` (Bangkok local time, no offset suffix)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Outcome of classifying one course
#[derive(Debug, Clone, PartialEq)]
pub struct ClassificationResult {
    pub category: &'static CategoryDef,
    pub subcategory: String,
    pub skill: String,
}

/// Which strategy produced a row's content titles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleSource {
    Remote,
    Template,
}

/// Ordered content titles plus their provenance
#[derive(Debug, Clone, PartialEq)]
pub struct ContentTitleSet {
    pub titles: Vec<String>,
    pub source: TitleSource,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Active,
    Draft,
    Archived,
}

impl RecordStatus {
    pub const ALL: [RecordStatus; 3] = [
        RecordStatus::Active,
        RecordStatus::Draft,
        RecordStatus::Archived,
    ];
}

impl fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordStatus::Active => write!(f, "active"),
            RecordStatus::Draft => write!(f, "draft"),
            RecordStatus::Archived => write!(f, "archived"),
        }
    }
}

/// One enriched row; field order matches `OUTPUT_COLUMNS`
#[derive(Debug, Clone, Serialize)]
pub struct OutputRecord {
    pub id: String,
    pub lessontitle: String,
    #[serde(rename = "contentTitle", serialize_with = "serialize_json_list")]
    pub content_title: Vec<String>,
    #[serde(rename = "skillName")]
    pub skill_name: String,
    pub level: String,
    #[serde(rename = "categoryId")]
    pub category_id: String,
    #[serde(rename = "catName")]
    pub cat_name: String,
    #[serde(rename = "subCatName")]
    pub sub_cat_name: String,
    #[serde(rename = "coverImageId")]
    pub cover_image_id: String,
    #[serde(rename = "previewVideoId")]
    pub preview_video_id: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
    #[serde(rename = "updatedAt")]
    pub updated_at: String,
    /// Always empty; kept for the downstream schema
    #[serde(rename = "deletedAt")]
    pub deleted_at: Option<String>,
    pub status: RecordStatus,
    #[serde(rename = "shortDescription")]
    pub short_description: String,
    pub description: String,
    pub university: String,
    pub link: String,
}

#[allow(clippy::ptr_arg)]
fn serialize_json_list<S>(titles: &Vec<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let encoded = serde_json::to_string(titles).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&encoded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display_matches_serde() {
        for status in RecordStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status));
        }
    }
}
