//! Match pipeline: hybrid extraction on both texts, classification, scoring.
//!
//! Flow: (dictionary ∪ normalized enrichment) for résumé and job, concurrently →
//!       classify job skills → score_match.

use std::collections::BTreeSet;
use std::sync::Arc;

use tracing::debug;

use crate::skills::classifier::{ClassifiedSkills, SkillClassifier};
use crate::skills::dictionary::SkillDictionary;
use crate::skills::enrichment::SkillEnricher;
use crate::skills::extractor::DictionaryExtractor;
use crate::skills::normalizer::normalize_terms;
use crate::skills::scoring::{score_match, MatchResult, ScoringWeights};

/// Everything needed to turn two texts into a `MatchResult`. Cheap to clone.
#[derive(Clone)]
pub struct SkillMatcher {
    extractor: Arc<DictionaryExtractor>,
    enricher: Arc<dyn SkillEnricher>,
    classifier: Arc<dyn SkillClassifier>,
    weights: ScoringWeights,
}

impl SkillMatcher {
    pub fn new(
        extractor: Arc<DictionaryExtractor>,
        enricher: Arc<dyn SkillEnricher>,
        classifier: Arc<dyn SkillClassifier>,
    ) -> Self {
        Self {
            extractor,
            enricher,
            classifier,
            weights: ScoringWeights::default(),
        }
    }

    pub fn dictionary(&self) -> &SkillDictionary {
        self.extractor.dictionary()
    }

    pub fn enricher_backend(&self) -> &'static str {
        self.enricher.backend()
    }

    pub fn classifier_backend(&self) -> &'static str {
        self.classifier.backend()
    }

    /// Dictionary hits plus normalized enrichment phrases.
    pub async fn extract_skills(&self, text: &str) -> BTreeSet<String> {
        let mut skills = self.extractor.extract(text);
        let dictionary_hits = skills.len();

        let enriched = self.enricher.enrich(text).await;
        skills.extend(normalize_terms(self.dictionary(), &enriched));

        debug!(
            "Extracted {} skills ({} from dictionary, {} raw from {} enricher)",
            skills.len(),
            dictionary_hits,
            enriched.len(),
            self.enricher.backend()
        );
        skills
    }

    pub async fn classify(&self, job_text: &str, skills: &BTreeSet<String>) -> ClassifiedSkills {
        self.classifier.classify(job_text, skills).await
    }

    /// Full match of a résumé against a job description.
    pub async fn match_texts(&self, resume_text: &str, job_text: &str) -> MatchResult {
        let (resume_skills, job_skills) = tokio::join!(
            self.extract_skills(resume_text),
            self.extract_skills(job_text)
        );

        let bundle = self.classify(job_text, &job_skills).await;
        score_match(self.dictionary(), &resume_skills, &bundle, &self.weights)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    use crate::skills::classifier::FallbackClassifier;
    use crate::skills::enrichment::NoopEnricher;
    use crate::skills::extractor::shared_builtin;

    /// Returns a fixed list regardless of input.
    struct FixedEnricher(Vec<&'static str>);

    #[async_trait]
    impl SkillEnricher for FixedEnricher {
        async fn enrich(&self, _text: &str) -> Vec<String> {
            self.0.iter().map(|s| s.to_string()).collect()
        }

        fn backend(&self) -> &'static str {
            "fixed"
        }
    }

    /// Marks any skill named in `preferred` as preferred, the rest required.
    struct SplitClassifier {
        preferred: Vec<&'static str>,
    }

    #[async_trait]
    impl SkillClassifier for SplitClassifier {
        async fn classify(&self, _job_text: &str, skills: &BTreeSet<String>) -> ClassifiedSkills {
            let (preferred, required) = skills
                .iter()
                .cloned()
                .partition(|s| self.preferred.contains(&s.as_str()));
            ClassifiedSkills {
                required,
                preferred,
                soft: BTreeSet::new(),
            }
        }

        fn backend(&self) -> &'static str {
            "split"
        }
    }

    fn extractor() -> Arc<DictionaryExtractor> {
        shared_builtin()
    }

    fn deterministic() -> SkillMatcher {
        SkillMatcher::new(extractor(), Arc::new(NoopEnricher), Arc::new(FallbackClassifier))
    }

    const RESUME: &str = "Backend engineer: Python, Django, PostgreSQL and MySQL on AWS.";
    const JOB: &str = "Required: Python, PostgreSQL, MySQL, React. Experience with AWS.";

    #[tokio::test]
    async fn test_match_texts_without_llm() {
        let result = deterministic().match_texts(RESUME, JOB).await;
        assert!(result.matched_skills.contains(&"python".to_string()));
        assert!(result.matched_skills.contains(&"postgresql".to_string()));
        assert_eq!(result.missing_skills, vec!["react"]);
        assert!(result.score > 0.0 && result.score < 100.0);
    }

    #[tokio::test]
    async fn test_match_texts_is_deterministic() {
        let matcher = deterministic();
        let a = matcher.match_texts(RESUME, JOB).await;
        let b = matcher.match_texts(RESUME, JOB).await;
        assert_eq!(a, b);
    }

    #[tokio::test]
    async fn test_enrichment_is_normalized_and_unioned() {
        let matcher = SkillMatcher::new(
            extractor(),
            Arc::new(FixedEnricher(vec!["K8s", "Domain-Driven Design", "  "])),
            Arc::new(FallbackClassifier),
        );
        let skills = matcher.extract_skills("Python developer").await;
        assert!(skills.contains("python"));
        assert!(skills.contains("kubernetes"));
        assert!(skills.contains("domain-driven design"));
        assert_eq!(skills.len(), 3);
    }

    #[tokio::test]
    async fn test_classifier_changes_weighting() {
        let matcher = SkillMatcher::new(
            extractor(),
            Arc::new(NoopEnricher),
            Arc::new(SplitClassifier {
                preferred: vec!["react"],
            }),
        );
        // required python (matched), preferred react (unmatched): 3.0 / 3.5
        let result = matcher
            .match_texts("Python engineer", "Python required, React nice to have")
            .await;
        assert!(result.missing_skills.is_empty());
        assert_eq!(result.score, 85.71);
    }

    #[tokio::test]
    async fn test_custom_weights_are_applied() {
        let matcher = SkillMatcher {
            weights: ScoringWeights {
                required: 1.0,
                preferred: 1.0,
                soft: 1.0,
                synergy: 0.0,
            },
            ..SkillMatcher::new(
                extractor(),
                Arc::new(NoopEnricher),
                Arc::new(SplitClassifier {
                    preferred: vec!["react"],
                }),
            )
        };
        let result = matcher
            .match_texts("Python engineer", "Python required, React nice to have")
            .await;
        assert_eq!(result.score, 50.0);
    }

    #[tokio::test]
    async fn test_empty_texts_score_zero() {
        let result = deterministic().match_texts("", "").await;
        assert_eq!(result.score, 0.0);
        assert!(result.matched_skills.is_empty());
    }

    #[test]
    fn test_backends_are_reported() {
        let matcher = deterministic();
        assert_eq!(matcher.enricher_backend(), "noop");
        assert_eq!(matcher.classifier_backend(), "fallback");
    }
}
