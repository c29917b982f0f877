pub mod use_cases;

pub use use_cases::catalog_enrichment::{CatalogEnrichmentUseCase, EnrichmentReport};
pub use use_cases::classifier::CourseClassifier;
pub use use_cases::record_assembler::RecordAssembler;
pub use use_cases::title_synthesizer::TitleSynthesizer;
