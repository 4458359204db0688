//! Skill enrichment: best-effort extra skill phrases from the LLM.
//!
//! `AppState` holds an `Arc<dyn SkillEnricher>` chosen at startup: `LlmSkillEnricher`
//! when an API key is configured, `NoopEnricher` otherwise. Callers never branch on
//! whether the key exists.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::llm_client::prompts::fill_template;
use crate::llm_client::LlmClient;
use crate::skills::prompts::{ENRICH_PROMPT_TEMPLATE, ENRICH_SYSTEM};

/// Free text → raw skill phrases. Infallible: any failure yields an empty list.
#[async_trait]
pub trait SkillEnricher: Send + Sync {
    async fn enrich(&self, text: &str) -> Vec<String>;

    /// "llm" | "noop", used in logs and API transparency.
    fn backend(&self) -> &'static str;
}

pub struct LlmSkillEnricher(pub LlmClient);

#[async_trait]
impl SkillEnricher for LlmSkillEnricher {
    async fn enrich(&self, text: &str) -> Vec<String> {
        if text.trim().is_empty() {
            return vec![];
        }

        let prompt = fill_template(ENRICH_PROMPT_TEMPLATE, &[("text", text)]);
        match self.0.call_string_list(&prompt, ENRICH_SYSTEM).await {
            Ok(skills) => {
                debug!("LLM enrichment returned {} raw skills", skills.len());
                skills
            }
            Err(e) => {
                warn!("LLM skill enrichment failed, continuing without it: {e}");
                vec![]
            }
        }
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Enricher used when no LLM is configured.
pub struct NoopEnricher;

#[async_trait]
impl SkillEnricher for NoopEnricher {
    async fn enrich(&self, _text: &str) -> Vec<String> {
        vec![]
    }

    fn backend(&self) -> &'static str {
        "noop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::llm_client::stub;

    #[tokio::test]
    async fn test_noop_enricher_returns_nothing() {
        assert!(NoopEnricher.enrich("Rust and Python").await.is_empty());
        assert_eq!(NoopEnricher.backend(), "noop");
    }

    #[tokio::test]
    async fn test_llm_enricher_skips_blank_text_without_calling_out() {
        let client = LlmClient::new("test-key".to_string(), Duration::from_millis(10)).unwrap();
        let enricher = LlmSkillEnricher(client);
        assert!(enricher.enrich("   ").await.is_empty());
        assert_eq!(enricher.backend(), "llm");
    }

    #[tokio::test]
    async fn test_llm_enricher_returns_reply_items() {
        let client = stub::client_replying(r#"Here you go: ["PostgreSQL", "Kubernetes"]"#).await;
        let skills = LlmSkillEnricher(client).enrich("Ran Postgres on k8s").await;
        assert_eq!(skills, vec!["PostgreSQL", "Kubernetes"]);
    }

    #[tokio::test]
    async fn test_llm_enricher_yields_nothing_on_reply_without_array() {
        let client = stub::client_replying("I could not find any skills in this text.").await;
        assert!(LlmSkillEnricher(client).enrich("Ran Postgres on k8s").await.is_empty());
    }

    #[tokio::test]
    async fn test_llm_enricher_yields_nothing_on_api_error() {
        let client = stub::client_answering(
            axum::http::StatusCode::UNAUTHORIZED,
            serde_json::json!({ "error": { "message": "API key not valid" } }),
        )
        .await;
        assert!(LlmSkillEnricher(client).enrich("Ran Postgres on k8s").await.is_empty());
    }
}
