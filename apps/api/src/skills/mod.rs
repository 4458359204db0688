// Skill matching engine.
// Dictionary extraction, optional LLM enrichment and classification, weighted scoring.
// LLM calls go through llm_client only.

mod catalog;
pub mod classifier;
pub mod dictionary;
pub mod enrichment;
pub mod extractor;
pub mod handlers;
pub mod normalizer;
pub mod pipeline;
pub mod prompts;
pub mod scoring;
