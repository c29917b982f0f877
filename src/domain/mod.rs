pub mod catalog;
pub mod csv;
pub mod error;
pub mod llm_config;
