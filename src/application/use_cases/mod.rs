pub mod catalog_enrichment;
pub mod classifier;
pub mod record_assembler;
pub mod title_synthesizer;
