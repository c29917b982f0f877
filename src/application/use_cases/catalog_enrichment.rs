// ============================================================
// CATALOG ENRICHMENT USE CASE
// ============================================================
// Read a course export, classify and title every row, write the catalog

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Instant;

use serde::Serialize;

use super::classifier::CourseClassifier;
use super::record_assembler::RecordAssembler;
use super::title_synthesizer::TitleSynthesizer;
use crate::domain::catalog::{CourseRecord, TitleSource};
use crate::domain::error::Result;
use crate::infrastructure::csv::{CsvParser, CsvRecordWriter};

/// Summary of one batch run
#[derive(Debug, Clone, Default, Serialize)]
pub struct EnrichmentReport {
    pub rows: usize,
    pub remote_titles: usize,
    pub template_titles: usize,
    /// Row count per category name
    pub per_category: BTreeMap<String, usize>,
    pub processing_time_ms: u64,
}

pub struct CatalogEnrichmentUseCase {
    synthesizer: TitleSynthesizer,
    seed: Option<u64>,
}

impl CatalogEnrichmentUseCase {
    pub fn new(synthesizer: TitleSynthesizer, seed: Option<u64>) -> Self {
        Self { synthesizer, seed }
    }

    /// Enrich every row of `input` and write the result to `output`.
    ///
    /// Rows are processed in order, one at a time. Only a missing/unreadable
    /// input, a missing title column, or a write failure abort the batch.
    pub async fn execute(&self, input: &Path, output: &Path) -> Result<EnrichmentReport> {
        let start = Instant::now();

        let table = CsvParser::parse_file_auto_detect(input)?;
        CourseRecord::require_title_column(&table.clean_headers())?;
        tracing::info!(path = %input.display(), rows = table.len(), "Loaded course export");

        let mut assembler = RecordAssembler::new(self.seed, RecordAssembler::bangkok_now());
        let mut report = EnrichmentReport::default();
        let mut records = Vec::with_capacity(table.len());

        for row in &table.rows {
            let course = CourseRecord::from_row(row);
            if course.title.is_empty() {
                tracing::debug!(row = row.index + 1, "Row has no title, using generic titles");
            }

            let classification = CourseClassifier::classify(&course);
            let titles = self
                .synthesizer
                .generate_content_titles(&course, classification.category)
                .await;

            match titles.source {
                TitleSource::Remote => report.remote_titles += 1,
                TitleSource::Template => report.template_titles += 1,
            }
            *report
                .per_category
                .entry(classification.category.name.to_string())
                .or_default() += 1;

            tracing::debug!(
                row = row.index + 1,
                category = classification.category.name,
                subcategory = %classification.subcategory,
                "Row enriched"
            );
            records.push(assembler.assemble(&course, &classification, titles));
        }

        CsvRecordWriter::write_file(output, &records)?;

        report.rows = records.len();
        report.processing_time_ms = start.elapsed().as_millis() as u64;
        tracing::info!(
            output = %output.display(),
            rows = report.rows,
            remote = report.remote_titles,
            template = report.template_titles,
            per_category = ?report.per_category,
            "Catalog enrichment complete"
        );

        Ok(report)
    }
}
