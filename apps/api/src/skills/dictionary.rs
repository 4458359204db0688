//! Skill Dictionary: canonical skill ids, their surface forms, and the category table.
//!
//! Built once at startup and shared read-only (`Arc<SkillDictionary>`) by the extractor,
//! the normalizer and the scoring engine.

use std::collections::{HashMap, HashSet};

use tracing::warn;

use crate::skills::catalog::{SKILL_CATEGORIES, SKILL_SYNONYMS};

/// One canonical skill and its surface forms.
///
/// `synonyms` is lower-cased, de-duplicated, and always starts with the canonical id.
#[derive(Debug, Clone)]
pub struct SkillEntry {
    pub canonical: String,
    pub synonyms: Vec<String>,
}

/// Immutable synonym + category tables.
#[derive(Debug, Clone)]
pub struct SkillDictionary {
    entries: Vec<SkillEntry>,
    /// surface form → index into `entries`
    lookup: HashMap<String, usize>,
    /// canonical id → category label
    categories: HashMap<String, String>,
}

impl SkillDictionary {
    /// Dictionary backed by the built-in catalog.
    pub fn builtin() -> Self {
        Self::from_tables(SKILL_SYNONYMS, SKILL_CATEGORIES)
    }

    /// Builds a dictionary from `(canonical, synonyms)` and `(category, skills)` tables.
    ///
    /// Inconsistent tables never fail the build: a category member missing from the
    /// synonym table is skipped, and a skill listed under two categories keeps the first.
    pub fn from_tables(synonyms: &[(&str, &[&str])], categories: &[(&str, &[&str])]) -> Self {
        let mut entries: Vec<SkillEntry> = Vec::with_capacity(synonyms.len());
        let mut index_of: HashMap<String, usize> = HashMap::new();

        for (canonical, forms) in synonyms {
            let canonical = normalize_term(canonical);
            if canonical.is_empty() {
                warn!("Skipping skill entry with an empty canonical id");
                continue;
            }

            let mut seen = HashSet::new();
            let merged: Vec<String> = std::iter::once(canonical.as_str())
                .chain(forms.iter().copied())
                .map(normalize_term)
                .filter(|s| !s.is_empty() && seen.insert(s.clone()))
                .collect();

            match index_of.get(&canonical) {
                // Repeated canonical id: fold the extra forms into the first entry.
                Some(&idx) => {
                    let entry = &mut entries[idx];
                    for form in merged {
                        if !entry.synonyms.contains(&form) {
                            entry.synonyms.push(form);
                        }
                    }
                }
                None => {
                    index_of.insert(canonical.clone(), entries.len());
                    entries.push(SkillEntry {
                        canonical,
                        synonyms: merged,
                    });
                }
            }
        }

        // Canonical ids take precedence over synonyms; among synonyms the first entry wins.
        let mut lookup = index_of.clone();
        for (idx, entry) in entries.iter().enumerate() {
            for form in &entry.synonyms {
                lookup.entry(form.clone()).or_insert(idx);
            }
        }

        let mut category_of: HashMap<String, String> = HashMap::new();
        for (category, members) in categories {
            for member in members.iter() {
                let skill = normalize_term(member);
                if !index_of.contains_key(&skill) {
                    warn!("Category '{category}' lists unknown skill '{skill}'; ignoring");
                    continue;
                }
                if let Some(existing) = category_of.get(&skill) {
                    warn!(
                        "Skill '{skill}' is listed under '{existing}' and '{category}'; keeping '{existing}'"
                    );
                    continue;
                }
                category_of.insert(skill, category.to_string());
            }
        }

        Self {
            entries,
            lookup,
            categories: category_of,
        }
    }

    /// Maps any surface form to its canonical id (exact, case-insensitive).
    pub fn find_standard_skill(&self, text: &str) -> Option<&str> {
        let key = normalize_term(text);
        if key.is_empty() {
            return None;
        }
        self.lookup
            .get(&key)
            .map(|&idx| self.entries[idx].canonical.as_str())
    }

    /// Surface forms of a canonical skill (empty if unknown).
    pub fn synonyms_of(&self, canonical: &str) -> &[String] {
        self.lookup
            .get(&normalize_term(canonical))
            .map(|&idx| &self.entries[idx])
            .filter(|entry| entry.canonical == normalize_term(canonical))
            .map(|entry| entry.synonyms.as_slice())
            .unwrap_or(&[])
    }

    /// Category of a canonical skill. Unknown skills and fallback tokens have none.
    pub fn category_of(&self, skill: &str) -> Option<&str> {
        self.categories.get(skill).map(String::as_str)
    }

    /// Every searchable token: all synonyms, then canonical ids, de-duplicated in order.
    pub fn all_skills(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.entries
            .iter()
            .flat_map(|e| e.synonyms.iter())
            .chain(self.entries.iter().map(|e| &e.canonical))
            .map(String::as_str)
            .filter(|s| seen.insert(*s))
            .collect()
    }

    pub fn entries(&self) -> &[SkillEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn category_count(&self) -> usize {
        self.categories
            .values()
            .collect::<HashSet<_>>()
            .len()
    }
}

/// Trim + lower-case. The one normalization every surface form goes through.
pub fn normalize_term(text: &str) -> String {
    text.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_canonical_key_resolves_to_itself() {
        let dict = SkillDictionary::builtin();
        for entry in dict.entries() {
            assert_eq!(
                dict.find_standard_skill(&entry.canonical),
                Some(entry.canonical.as_str()),
                "canonical '{}' did not round-trip",
                entry.canonical
            );
        }
    }

    #[test]
    fn test_find_standard_skill_is_case_insensitive() {
        let dict = SkillDictionary::builtin();
        assert_eq!(dict.find_standard_skill("  PostgreS "), Some("postgresql"));
        assert_eq!(dict.find_standard_skill("K8s"), Some("kubernetes"));
        assert_eq!(dict.find_standard_skill("Python"), Some("python"));
    }

    #[test]
    fn test_find_standard_skill_unknown_and_blank() {
        let dict = SkillDictionary::builtin();
        assert_eq!(dict.find_standard_skill("unknown_xyz"), None);
        assert_eq!(dict.find_standard_skill("   "), None);
        assert_eq!(dict.find_standard_skill(""), None);
    }

    #[test]
    fn test_canonical_key_beats_synonym_of_earlier_entry() {
        // "spring" is a synonym of "java" (listed first) but also a canonical id.
        let dict = SkillDictionary::builtin();
        assert_eq!(dict.find_standard_skill("spring"), Some("spring"));
    }

    #[test]
    fn test_shared_synonym_resolves_to_first_entry() {
        // "spring boot" is listed under both "java" and "spring".
        let dict = SkillDictionary::builtin();
        assert_eq!(dict.find_standard_skill("spring boot"), Some("java"));
    }

    #[test]
    fn test_synonyms_start_with_canonical_and_are_deduplicated() {
        let dict = SkillDictionary::from_tables(
            &[("golang_x", &["Go Lang", "go lang", "  GOLANG_X "])],
            &[],
        );
        assert_eq!(dict.synonyms_of("golang_x"), &["golang_x", "go lang"]);
    }

    #[test]
    fn test_synonyms_of_unknown_is_empty() {
        let dict = SkillDictionary::builtin();
        assert!(dict.synonyms_of("not-a-skill").is_empty());
        // A synonym is not itself a canonical key.
        assert!(dict.synonyms_of("k8s").is_empty());
    }

    #[test]
    fn test_category_lookup() {
        let dict = SkillDictionary::builtin();
        assert_eq!(dict.category_of("postgresql"), Some("database"));
        assert_eq!(dict.category_of("mysql"), Some("database"));
        assert_eq!(dict.category_of("communication"), Some("soft_skills"));
        assert_eq!(dict.category_of("some raw token"), None);
    }

    #[test]
    fn test_every_builtin_skill_has_exactly_one_category() {
        let mut owners: HashMap<&str, Vec<&str>> = HashMap::new();
        for (category, members) in SKILL_CATEGORIES {
            for m in members.iter() {
                owners.entry(*m).or_default().push(*category);
            }
        }
        let dict = SkillDictionary::builtin();
        for entry in dict.entries() {
            let cats = owners.get(entry.canonical.as_str()).cloned().unwrap_or_default();
            assert_eq!(cats.len(), 1, "'{}' categories: {:?}", entry.canonical, cats);
        }
    }

    #[test]
    fn test_duplicate_category_keeps_first() {
        let dict = SkillDictionary::from_tables(
            &[("kafka", &["apache kafka"])],
            &[("streaming", &["kafka"]), ("data_engineering", &["kafka"])],
        );
        assert_eq!(dict.category_of("kafka"), Some("streaming"));
    }

    #[test]
    fn test_category_with_unknown_skill_is_ignored() {
        let dict = SkillDictionary::from_tables(
            &[("kafka", &["apache kafka"])],
            &[("streaming", &["kafka", "pulsar"])],
        );
        assert_eq!(dict.category_of("pulsar"), None);
        assert_eq!(dict.category_count(), 1);
    }

    #[test]
    fn test_all_skills_contains_synonyms_and_keys_once() {
        let dict = SkillDictionary::builtin();
        let all = dict.all_skills();
        let unique: HashSet<_> = all.iter().collect();
        assert_eq!(all.len(), unique.len());
        assert!(all.contains(&"k8s"));
        assert!(all.contains(&"oracle_db"));
    }

    #[test]
    fn test_builtin_is_nonempty() {
        let dict = SkillDictionary::builtin();
        assert!(!dict.is_empty());
        assert_eq!(dict.len(), SKILL_SYNONYMS.len());
    }
}
