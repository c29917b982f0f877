// ============================================================
// RECORD ASSEMBLER
// ============================================================
// Ids, audit timestamps and status for enriched rows

use crate::domain::catalog::{
    ClassificationResult, ContentTitleSet, CourseRecord, OutputRecord, RecordStatus,
    TIMESTAMP_FORMAT,
};
use chrono::{DateTime, Duration, FixedOffset, Offset, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

const BANGKOK_OFFSET_SECS: i32 = 7 * 3600;
const MEDIA_SUFFIX_LEN: usize = 8;

pub struct RecordAssembler {
    rng: StdRng,

    /// Captured once per batch so every row shares the same reference point
    now: DateTime<FixedOffset>,
}

impl RecordAssembler {
    /// A fixed `seed` makes timestamps and statuses reproducible; ids never are.
    pub fn new(seed: Option<u64>, now: DateTime<FixedOffset>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng, now }
    }

    /// Current wall-clock time in Bangkok (UTC+07:00)
    pub fn bangkok_now() -> DateTime<FixedOffset> {
        let offset = FixedOffset::east_opt(BANGKOK_OFFSET_SECS).unwrap_or_else(|| Utc.fix());
        Utc::now().with_timezone(&offset)
    }

    /// Time-ordered UUID in hyphenated form
    pub fn next_id(&self) -> String {
        Uuid::now_v7().to_string()
    }

    /// `(coverImageId, previewVideoId)` derived from the last 8 hex chars of `id`
    pub fn media_ids(id: &str) -> (String, String) {
        let hex: String = id.chars().filter(|c| c.is_ascii_hexdigit()).collect();
        let suffix = &hex[hex.len().saturating_sub(MEDIA_SUFFIX_LEN)..];
        (format!("img_{}", suffix), format!("vid_{}", suffix))
    }

    /// `(createdAt, updatedAt)`: now minus 1-365 days, then plus 0-30 days
    pub fn timestamps(&mut self) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
        let created = self.now - Duration::days(self.rng.gen_range(1..=365));
        let updated = created + Duration::days(self.rng.gen_range(0..=30));
        (created, updated)
    }

    pub fn status(&mut self) -> RecordStatus {
        RecordStatus::ALL
            .choose(&mut self.rng)
            .copied()
            .unwrap_or(RecordStatus::Active)
    }

    /// Combine a source course with its classification and titles into one output row
    pub fn assemble(
        &mut self,
        course: &CourseRecord,
        classification: &ClassificationResult,
        titles: ContentTitleSet,
    ) -> OutputRecord {
        let id = self.next_id();
        let (cover_image_id, preview_video_id) = Self::media_ids(&id);
        let (created, updated) = self.timestamps();
        let status = self.status();

        OutputRecord {
            id,
            lessontitle: course.title.clone(),
            content_title: titles.titles,
            skill_name: classification.skill.clone(),
            level: course.level.clone(),
            category_id: classification.category.id.to_string(),
            cat_name: classification.category.name.to_string(),
            sub_cat_name: classification.subcategory.clone(),
            cover_image_id,
            preview_video_id,
            created_at: created.format(TIMESTAMP_FORMAT).to_string(),
            updated_at: updated.format(TIMESTAMP_FORMAT).to_string(),
            deleted_at: None,
            status,
            short_description: course.about.clone(),
            description: course.description.clone(),
            university: course.university.clone(),
            link: course.link.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{default_category, TitleSource, DEFAULT_SUBCATEGORY};
    use chrono::{NaiveDateTime, TimeZone};
    use std::collections::HashSet;

    fn fixed_now() -> DateTime<FixedOffset> {
        FixedOffset::east_opt(BANGKOK_OFFSET_SECS)
            .unwrap()
            .with_ymd_and_hms(2024, 6, 15, 10, 30, 0)
            .unwrap()
    }

    fn classification() -> ClassificationResult {
        ClassificationResult {
            category: default_category(),
            subcategory: DEFAULT_SUBCATEGORY.to_string(),
            skill: "Programming".to_string(),
        }
    }

    fn titles() -> ContentTitleSet {
        ContentTitleSet {
            titles: vec!["A".to_string(), "B".to_string()],
            source: TitleSource::Template,
        }
    }

    #[test]
    fn test_ids_are_unique_v7() {
        let assembler = RecordAssembler::new(Some(1), fixed_now());
        let ids: Vec<String> = (0..1000).map(|_| assembler.next_id()).collect();
        let unique: HashSet<&String> = ids.iter().collect();

        assert_eq!(unique.len(), ids.len());
        let parsed = Uuid::parse_str(&ids[0]).unwrap();
        assert_eq!(parsed.get_version_num(), 7);
    }

    #[test]
    fn test_media_ids_share_id_suffix() {
        let (cover, preview) =
            RecordAssembler::media_ids("01890a5d-ac96-774b-bcce-b302099a8057");
        assert_eq!(cover, "img_099a8057");
        assert_eq!(preview, "vid_099a8057");
    }

    #[test]
    fn test_timestamps_within_ranges() {
        let now = fixed_now();
        let mut assembler = RecordAssembler::new(None, now);

        for _ in 0..500 {
            let (created, updated) = assembler.timestamps();
            let age = (now - created).num_days();
            let gap = (updated - created).num_days();
            assert!((1..=365).contains(&age), "age {age}");
            assert!((0..=30).contains(&gap), "gap {gap}");
        }
    }

    #[test]
    fn test_formatted_created_not_after_updated() {
        let mut assembler = RecordAssembler::new(None, fixed_now());
        let course = CourseRecord::default();

        for _ in 0..200 {
            let record = assembler.assemble(&course, &classification(), titles());
            let created =
                NaiveDateTime::parse_from_str(&record.created_at, TIMESTAMP_FORMAT).unwrap();
            let updated =
                NaiveDateTime::parse_from_str(&record.updated_at, TIMESTAMP_FORMAT).unwrap();
            assert!(created <= updated);
        }
    }

    #[test]
    fn test_seed_reproduces_timestamps_and_status() {
        let mut first = RecordAssembler::new(Some(42), fixed_now());
        let mut second = RecordAssembler::new(Some(42), fixed_now());

        for _ in 0..20 {
            assert_eq!(first.timestamps(), second.timestamps());
            assert_eq!(first.status(), second.status());
        }
    }

    #[test]
    fn test_every_status_is_reachable() {
        let mut assembler = RecordAssembler::new(Some(7), fixed_now());
        let seen: HashSet<RecordStatus> = (0..300).map(|_| assembler.status()).collect();
        assert_eq!(seen.len(), RecordStatus::ALL.len());
    }

    #[test]
    fn test_assemble_copies_course_fields() {
        let course = CourseRecord {
            title: "Calculus".to_string(),
            level: "Introductory".to_string(),
            about: "Limits".to_string(),
            description: "Limits and derivatives".to_string(),
            university: "MITx".to_string(),
            link: "https://example.org/calculus".to_string(),
        };
        let mut assembler = RecordAssembler::new(Some(3), fixed_now());
        let record = assembler.assemble(&course, &classification(), titles());

        assert_eq!(record.lessontitle, "Calculus");
        assert_eq!(record.category_id, "cat001");
        assert_eq!(record.cat_name, "Computer Science");
        assert_eq!(record.short_description, "Limits");
        assert_eq!(record.content_title, vec!["A", "B"]);
        assert!(record.deleted_at.is_none());
        assert!(record.cover_image_id.ends_with(&record.id[record.id.len() - 8..]));
    }
}
