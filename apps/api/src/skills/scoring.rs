//! Scoring Engine: weighted match score between a résumé skill set and a classified job.
//!
//! Algorithm:
//! 1. Soft skills count only if the résumé has at least one of them.
//! 2. matched = résumé ∩ (required ∪ preferred ∪ soft-if-counted); missing = required − matched
//! 3. Each counted skill adds its bucket weight to `max_score`, and to `score` if matched
//! 4. Synergy: per category with n > 1 matched skills, add (n − 1) × synergy to both sides
//! 5. final = score / max_score × 100, clamped to [0, 100], two decimals; 0 if max_score = 0
//! 6. Each missing skill sharing a category with a matched skill yields one suggestion
//!
//! Pure and synchronous. Every well-formed input produces a result.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::skills::classifier::ClassifiedSkills;
use crate::skills::dictionary::SkillDictionary;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringWeights {
    pub required: f64,
    pub preferred: f64,
    pub soft: f64,
    /// Credit per extra matched skill within one category.
    pub synergy: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            required: 3.0,
            preferred: 0.5,
            soft: 0.2,
            synergy: 0.25,
        }
    }
}

/// Result handed to the HTTP layer. Skill lists are sorted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: f64,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub suggestions: Vec<String>,
}

pub fn score_match(
    dictionary: &SkillDictionary,
    resume_skills: &BTreeSet<String>,
    bundle: &ClassifiedSkills,
    weights: &ScoringWeights,
) -> MatchResult {
    let count_soft = bundle.soft.iter().any(|s| resume_skills.contains(s));

    let mut buckets: Vec<(&BTreeSet<String>, f64)> = vec![
        (&bundle.required, weights.required),
        (&bundle.preferred, weights.preferred),
    ];
    if count_soft {
        buckets.push((&bundle.soft, weights.soft));
    }

    let mut matched: BTreeSet<&str> = BTreeSet::new();
    let mut score = 0.0_f64;
    let mut max_score = 0.0_f64;

    for (skills, weight) in &buckets {
        for skill in skills.iter() {
            max_score += weight;
            if resume_skills.contains(skill) {
                score += weight;
                matched.insert(skill.as_str());
            }
        }
    }

    let missing: BTreeSet<&str> = bundle
        .required
        .iter()
        .map(String::as_str)
        .filter(|s| !matched.contains(s))
        .collect();

    // category → matched skills in that category (sorted)
    let mut by_category: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for skill in &matched {
        if let Some(category) = dictionary.category_of(skill) {
            by_category.entry(category).or_default().push(*skill);
        }
    }

    for skills in by_category.values() {
        if skills.len() > 1 {
            let bonus = (skills.len() - 1) as f64 * weights.synergy;
            score += bonus;
            max_score += bonus;
        }
    }

    let suggestions = missing
        .iter()
        .filter_map(|skill| {
            let category = dictionary.category_of(skill)?;
            let related = by_category.get(category)?.first()?;
            Some(format!(
                "Missing '{skill}', but your experience with '{related}' ({category}) is transferable. Highlight it."
            ))
        })
        .collect();

    MatchResult {
        score: final_percentage(score, max_score),
        matched_skills: matched.into_iter().map(String::from).collect(),
        missing_skills: missing.into_iter().map(String::from).collect(),
        suggestions,
    }
}

fn final_percentage(score: f64, max_score: f64) -> f64 {
    if max_score <= 0.0 {
        return 0.0;
    }
    let pct = (score / max_score * 100.0).clamp(0.0, 100.0);
    (pct * 100.0).round() / 100.0
}
