// src/extractors/mod.rs
pub mod job_card;
pub mod markers;
pub mod query;

// Re-export key extraction types for convenience
pub use job_card::{ExtractorConfig, JobExtractor, JobRecord};
