//! Dictionary Extractor: finds canonical skills mentioned in free text.
//!
//! Multi-word synonyms match as literal substrings of the lower-cased text.
//! Single-token synonyms match only as whole words, so "java" never fires inside
//! "javascript" and "c#" still matches in "c# developer".

use std::collections::BTreeSet;
use std::sync::Arc;

use regex::{RegexSet, RegexSetBuilder};

use crate::skills::dictionary::SkillDictionary;

/// Room for a few hundred alternations wrapped in Unicode `\W` boundaries.
const TOKEN_SET_SIZE_LIMIT: usize = 256 * (1 << 20);

/// Compiled matchers for every dictionary entry. Build once, share freely.
pub struct DictionaryExtractor {
    dictionary: Arc<SkillDictionary>,
    /// One whole-word alternation per entry that has single-token synonyms.
    tokens: RegexSet,
    /// `tokens` pattern index → entry index.
    token_owner: Vec<usize>,
    /// Multi-word synonyms, parallel to `dictionary.entries()`.
    phrases: Vec<Vec<String>>,
}

impl DictionaryExtractor {
    pub fn new(dictionary: Arc<SkillDictionary>) -> Result<Self, regex::Error> {
        let mut patterns = Vec::new();
        let mut token_owner = Vec::new();
        let mut phrases = Vec::with_capacity(dictionary.len());

        for (idx, entry) in dictionary.entries().iter().enumerate() {
            let (multi, single): (Vec<&String>, Vec<&String>) =
                entry.synonyms.iter().partition(|s| s.contains(' '));
            phrases.push(multi.into_iter().cloned().collect());

            if !single.is_empty() {
                let alternation = single
                    .iter()
                    .map(|s| regex::escape(s))
                    .collect::<Vec<_>>()
                    .join("|");
                // Boundary = start/end of text or a non-word character on that side.
                patterns.push(format!(r"(?:^|\W)(?:{alternation})(?:\W|$)"));
                token_owner.push(idx);
            }
        }

        let tokens = RegexSetBuilder::new(&patterns)
            .size_limit(TOKEN_SET_SIZE_LIMIT)
            .build()?;

        Ok(Self {
            dictionary,
            tokens,
            token_owner,
            phrases,
        })
    }

    /// Canonical skills with at least one synonym present in `text`.
    pub fn extract(&self, text: &str) -> BTreeSet<String> {
        let text_lower = text.to_lowercase();
        if text_lower.trim().is_empty() {
            return BTreeSet::new();
        }

        let entries = self.dictionary.entries();
        let mut hit = vec![false; entries.len()];
        for pattern in self.tokens.matches(&text_lower).iter() {
            hit[self.token_owner[pattern]] = true;
        }

        entries
            .iter()
            .zip(&self.phrases)
            .enumerate()
            .filter(|(idx, (_, phrases))| {
                hit[*idx] || phrases.iter().any(|p| text_lower.contains(p.as_str()))
            })
            .map(|(_, (entry, _))| entry.canonical.clone())
            .collect()
    }

    pub fn dictionary(&self) -> &Arc<SkillDictionary> {
        &self.dictionary
    }
}

/// Built-in extractor compiled once per test binary.
#[cfg(test)]
pub(crate) fn shared_builtin() -> Arc<DictionaryExtractor> {
    use std::sync::OnceLock;

    static SHARED: OnceLock<Arc<DictionaryExtractor>> = OnceLock::new();
    SHARED
        .get_or_init(|| {
            Arc::new(DictionaryExtractor::new(Arc::new(SkillDictionary::builtin())).unwrap())
        })
        .clone()
}
