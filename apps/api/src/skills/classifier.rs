//! Classifier Adapter: splits a job's skills into required / preferred / soft.
//!
//! The semantic judgment is delegated to the LLM. Whenever that is unavailable or its
//! output does not parse as the three-bucket object, every skill lands in `required`,
//! so the scoring engine always gets a well-formed bundle and no requirement is lost.

use std::collections::BTreeSet;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::llm_client::prompts::{fill_template, JSON_ONLY_SYSTEM};
use crate::llm_client::LlmClient;
use crate::skills::dictionary::normalize_term;
use crate::skills::prompts::CLASSIFY_PROMPT_TEMPLATE;

/// A job's skills partitioned by importance. A skill sits in at most one bucket.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedSkills {
    pub required: BTreeSet<String>,
    pub preferred: BTreeSet<String>,
    pub soft: BTreeSet<String>,
}

/// Bucket object exactly as the model is asked to return it.
#[derive(Debug, Deserialize)]
struct RawClassification {
    required: Vec<String>,
    preferred: Vec<String>,
    soft: Vec<String>,
}

impl ClassifiedSkills {
    /// Fallback bundle: everything required.
    pub fn all_required(skills: &BTreeSet<String>) -> Self {
        Self {
            required: skills.clone(),
            ..Self::default()
        }
    }

    /// Reconciles model output with the skills that were actually asked about.
    ///
    /// - entries are trimmed + lower-cased, unknown entries dropped
    /// - a skill in several buckets keeps the most important one (required > preferred > soft)
    /// - skills the model left out go to `required`
    fn reconcile(raw: RawClassification, skills: &BTreeSet<String>) -> Self {
        let keep = |bucket: Vec<String>| -> BTreeSet<String> {
            bucket
                .iter()
                .map(|s| normalize_term(s))
                .filter(|s| skills.contains(s))
                .collect()
        };

        let mut required = keep(raw.required);
        let preferred: BTreeSet<String> = keep(raw.preferred)
            .into_iter()
            .filter(|s| !required.contains(s))
            .collect();
        let soft: BTreeSet<String> = keep(raw.soft)
            .into_iter()
            .filter(|s| !required.contains(s) && !preferred.contains(s))
            .collect();

        for skill in skills {
            if !preferred.contains(skill) && !soft.contains(skill) {
                required.insert(skill.clone());
            }
        }

        Self {
            required,
            preferred,
            soft,
        }
    }
}

/// Pluggable classifier. Infallible: implementations apply the fallback themselves.
#[async_trait]
pub trait SkillClassifier: Send + Sync {
    async fn classify(&self, job_text: &str, skills: &BTreeSet<String>) -> ClassifiedSkills;

    /// "llm" | "fallback"
    fn backend(&self) -> &'static str;
}

pub struct LlmSkillClassifier(pub LlmClient);

#[async_trait]
impl SkillClassifier for LlmSkillClassifier {
    async fn classify(&self, job_text: &str, skills: &BTreeSet<String>) -> ClassifiedSkills {
        if skills.is_empty() {
            return ClassifiedSkills::default();
        }

        let skills_json = match serde_json::to_string(skills) {
            Ok(json) => json,
            Err(e) => {
                warn!("Could not serialize skills for classification: {e}");
                return ClassifiedSkills::all_required(skills);
            }
        };
        let prompt = fill_template(
            CLASSIFY_PROMPT_TEMPLATE,
            &[("skills_json", skills_json.as_str()), ("job_text", job_text)],
        );

        match self
            .0
            .call_json::<RawClassification>(&prompt, JSON_ONLY_SYSTEM)
            .await
        {
            Ok(raw) => {
                let bundle = ClassifiedSkills::reconcile(raw, skills);
                debug!(
                    "Classified {} skills: required={}, preferred={}, soft={}",
                    skills.len(),
                    bundle.required.len(),
                    bundle.preferred.len(),
                    bundle.soft.len()
                );
                bundle
            }
            Err(e) => {
                warn!("LLM skill classification failed, treating all skills as required: {e}");
                ClassifiedSkills::all_required(skills)
            }
        }
    }

    fn backend(&self) -> &'static str {
        "llm"
    }
}

/// Deterministic classifier used when no LLM is configured.
pub struct FallbackClassifier;

#[async_trait]
impl SkillClassifier for FallbackClassifier {
    async fn classify(&self, _job_text: &str, skills: &BTreeSet<String>) -> ClassifiedSkills {
        ClassifiedSkills::all_required(skills)
    }

    fn backend(&self) -> &'static str {
        "fallback"
    }
}
