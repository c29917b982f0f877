// ============================================================
// CATALOG DOMAIN LAYER
// ============================================================
// Static taxonomy and the per-row value types of the enrichment
// No I/O, no async

mod category;
mod course;
mod language;
mod output_record;

pub use category::{
    category_by_id, category_by_name, default_category, CategoryDef, SubcategoryDef, CATEGORIES,
    DEFAULT_SUBCATEGORY, GENERIC_TEMPLATE, TOPIC_PLACEHOLDER,
};
pub use course::CourseRecord;
pub use language::{detect_language_track, LanguageTrack, LANGUAGE_TRACKS};
pub use output_record::{
    ClassificationResult, ContentTitleSet, OutputRecord, RecordStatus, TitleSource,
    OUTPUT_COLUMNS, TIMESTAMP_FORMAT,
};
