//! Enrichment Normalizer: maps untrusted free-text skill phrases onto canonical ids.
//!
//! Unrecognized phrases are kept as lower-cased tokens rather than dropped.

use std::collections::BTreeSet;

use crate::skills::dictionary::{normalize_term, SkillDictionary};

pub fn normalize_terms<S: AsRef<str>>(
    dictionary: &SkillDictionary,
    raw_terms: &[S],
) -> BTreeSet<String> {
    raw_terms
        .iter()
        .filter_map(|raw| {
            let term = normalize_term(raw.as_ref());
            if term.is_empty() {
                return None;
            }
            Some(
                dictionary
                    .find_standard_skill(&term)
                    .map(str::to_string)
                    .unwrap_or(term),
            )
        })
        .collect()
}
