//! Fuzzy field-name suggestion engine.
//!
//! Ranks catalog field names and access paths against a free-text token
//! using normalized Levenshtein similarity blended with usage frequency and
//! availability statistics. Consults only the compiled-in catalog, performs
//! no I/O, and holds no mutable state, so every call is independent and
//! repeatable.
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

use serde::Serialize;
use thiserror::Error;
use tracing::warn;

use crate::catalog::{self, EntityType, SuggestionData};
use crate::fields::model::UsageFrequency;

/// Errors from the suggestion engine.
#[derive(Error, Debug)]
pub enum SuggestError {
    #[error("unsupported entity type {0:?}, expected one of: issue, project, user, agile")]
    UnsupportedEntityType(String),
}

// ── Scoring constants ────────────────────────────────────────────────

const SIMILARITY_WEIGHT: f64 = 0.6;
const FREQUENCY_WEIGHT: f64 = 0.25;
const AVAILABILITY_WEIGHT: f64 = 0.15;

// Used for candidates absent from the usage statistics table.
const NEUTRAL_FREQUENCY: f64 = 0.5;
const NEUTRAL_AVAILABILITY: f64 = 0.5;

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.3;

// ── Result types ─────────────────────────────────────────────────────

/// One ranked suggestion with its score breakdown.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuggestionCandidate {
    pub field: String,
    pub score: f64,
    pub metadata: CandidateMetadata,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateMetadata {
    pub similarity: f64,
    pub frequency: f64,
    pub availability: f64,
}

/// Custom-field id pattern hint matched by keyword.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomFieldHint {
    pub keyword: String,
    pub pattern: String,
}

// Case-folded typo tables, built once so the exact-match shortcut is a
// single hash lookup.
static TYPO_INDEX: LazyLock<HashMap<EntityType, HashMap<String, &'static str>>> =
    LazyLock::new(|| {
        EntityType::ALL
            .iter()
            .map(|&entity| {
                let table = catalog::suggestion_data(entity)
                    .typo_corrections
                    .iter()
                    .map(|(typo, fix)| (typo.to_lowercase(), *fix))
                    .collect();
                (entity, table)
            })
            .collect()
    });

// ── Engine ───────────────────────────────────────────────────────────

/// Stateless ranking engine; construct once and share freely.
pub struct SuggestionEngine {
    similarity_threshold: f64,
}

impl SuggestionEngine {
    pub fn new(similarity_threshold: f64) -> Self {
        let similarity_threshold = if (0.0..=1.0).contains(&similarity_threshold) {
            similarity_threshold
        } else {
            warn!(
                similarity_threshold,
                "similarity threshold outside [0, 1], using default"
            );
            DEFAULT_SIMILARITY_THRESHOLD
        };
        Self { similarity_threshold }
    }

    /// Ranked field names for a free-text token.
    ///
    /// An unsupported entity type is a caller defect and returns an error;
    /// an empty token or non-positive limit is merely a no-op and returns
    /// an empty list.
    pub fn suggest(
        &self,
        entity_type: &str,
        input: &str,
        max_suggestions: usize,
    ) -> Result<Vec<String>, SuggestError> {
        Ok(self
            .suggest_detailed(entity_type, input, max_suggestions)?
            .into_iter()
            .map(|candidate| candidate.field)
            .collect())
    }

    /// Like [`suggest`](Self::suggest) but exposes per-candidate scores.
    pub fn suggest_detailed(
        &self,
        entity_type: &str,
        input: &str,
        max_suggestions: usize,
    ) -> Result<Vec<SuggestionCandidate>, SuggestError> {
        let entity = EntityType::from_name(entity_type)
            .ok_or_else(|| SuggestError::UnsupportedEntityType(entity_type.to_string()))?;

        let input = input.trim();
        if input.is_empty() || max_suggestions == 0 {
            return Ok(Vec::new());
        }
        let folded = input.to_lowercase();

        let data = catalog::suggestion_data(entity);
        let correction = TYPO_INDEX[&entity].get(&folded).copied();

        let mut ranked: Vec<SuggestionCandidate> = candidate_pool(entity)
            .into_iter()
            .filter(|candidate| Some(*candidate) != correction)
            .filter_map(|candidate| self.score_candidate(&folded, candidate, data))
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then_with(|| contextual_rank(data, &a.field).cmp(&contextual_rank(data, &b.field)))
                .then_with(|| a.field.cmp(&b.field))
        });

        // A known typo always yields its correction as the top result.
        if let Some(fix) = correction {
            ranked.insert(0, exact_candidate(fix, data));
        }

        ranked.truncate(max_suggestions);
        Ok(ranked)
    }

    /// Custom-field id patterns whose keyword occurs in the token.
    pub fn custom_field_hints(
        &self,
        entity_type: &str,
        input: &str,
    ) -> Result<Vec<CustomFieldHint>, SuggestError> {
        let entity = EntityType::from_name(entity_type)
            .ok_or_else(|| SuggestError::UnsupportedEntityType(entity_type.to_string()))?;

        let folded = input.trim().to_lowercase();
        if folded.is_empty() {
            return Ok(Vec::new());
        }

        Ok(catalog::suggestion_data(entity)
            .custom_field_patterns
            .iter()
            .filter(|(keyword, _)| folded.contains(keyword))
            .map(|(keyword, pattern)| CustomFieldHint {
                keyword: (*keyword).to_string(),
                pattern: (*pattern).to_string(),
            })
            .collect())
    }

    fn score_candidate(
        &self,
        folded_input: &str,
        candidate: &str,
        data: &SuggestionData,
    ) -> Option<SuggestionCandidate> {
        let sim = similarity(folded_input, candidate);
        if sim < self.similarity_threshold {
            return None;
        }
        let (frequency, availability) = usage_weights(data, candidate);
        Some(SuggestionCandidate {
            field: candidate.to_string(),
            score: composite_score(sim, frequency, availability),
            metadata: CandidateMetadata {
                similarity: sim,
                frequency,
                availability,
            },
        })
    }
}

impl Default for SuggestionEngine {
    fn default() -> Self {
        Self::new(DEFAULT_SIMILARITY_THRESHOLD)
    }
}

// ── Ranking helpers ──────────────────────────────────────────────────

/// Union of contextual suggestions, usage-statistics keys, and every known
/// nested access path. Deduplicated and ordered so ranking input is stable.
fn candidate_pool(entity: EntityType) -> Vec<&'static str> {
    let data = catalog::suggestion_data(entity);
    let mut pool: BTreeSet<&'static str> = BTreeSet::new();
    pool.extend(data.contextual_suggestions.iter().copied());
    pool.extend(data.usage_statistics.iter().map(|(field, _)| *field));
    for field in catalog::static_fields(entity) {
        for access_path in field.access_paths {
            pool.insert(access_path.path);
        }
    }
    pool.into_iter().collect()
}

fn composite_score(similarity: f64, frequency: f64, availability: f64) -> f64 {
    SIMILARITY_WEIGHT * similarity
        + FREQUENCY_WEIGHT * frequency
        + AVAILABILITY_WEIGHT * availability
}

fn usage_weights(data: &SuggestionData, candidate: &str) -> (f64, f64) {
    data.usage_statistics
        .iter()
        .find(|(field, _)| *field == candidate)
        .map(|(_, usage)| (frequency_weight(usage.frequency), usage.availability))
        .unwrap_or((NEUTRAL_FREQUENCY, NEUTRAL_AVAILABILITY))
}

fn frequency_weight(frequency: UsageFrequency) -> f64 {
    match frequency {
        UsageFrequency::High => 1.0,
        UsageFrequency::Medium => 0.7,
        UsageFrequency::Low => 0.4,
    }
}

fn contextual_rank(data: &SuggestionData, field: &str) -> usize {
    data.contextual_suggestions
        .iter()
        .position(|s| *s == field)
        .unwrap_or(usize::MAX)
}

fn exact_candidate(field: &'static str, data: &SuggestionData) -> SuggestionCandidate {
    let (frequency, availability) = usage_weights(data, field);
    SuggestionCandidate {
        field: field.to_string(),
        score: composite_score(1.0, frequency, availability),
        metadata: CandidateMetadata {
            similarity: 1.0,
            frequency,
            availability,
        },
    }
}

// ── String similarity ────────────────────────────────────────────────

/// Normalized, case-insensitive Levenshtein similarity in 0..1.
///
/// `1 - distance / max(len)`, so identical strings (including two empty
/// strings) score 1.0, an empty string against a non-empty one scores 0.0,
/// and the function is symmetric.
#[must_use]
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.to_lowercase().chars().collect();
    let b: Vec<char> = b.to_lowercase().chars().collect();
    if a == b {
        return 1.0;
    }
    let max_len = a.len().max(b.len());
    1.0 - levenshtein(&a, &b) as f64 / max_len as f64
}

/// Classic two-row edit distance over chars.
fn levenshtein(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_similarity_identity() {
        for s in ["", "status", "assignee.displayName", "日本語"] {
            assert_eq!(similarity(s, s), 1.0, "similarity({s:?}, {s:?})");
        }
    }

    #[test]
    fn test_similarity_empty_vs_nonempty_is_zero() {
        assert_eq!(similarity("", "status"), 0.0);
        assert_eq!(similarity("status", ""), 0.0);
    }

    #[test]
    fn test_similarity_symmetric() {
        let pairs = [
            ("stat", "status"),
            ("summary", "sumary"),
            ("a", "b"),
            ("priority", "priority.name"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a), "sim({a}, {b})");
        }
    }

    #[test]
    fn test_similarity_case_insensitive() {
        assert_eq!(similarity("STATUS", "status"), 1.0);
        assert_eq!(similarity("Sprint", "sprint"), 1.0);
    }

    #[test]
    fn test_similarity_known_distance() {
        // One edit over six chars.
        let sim = similarity("statos", "status");
        assert!((sim - (1.0 - 1.0 / 6.0)).abs() < 1e-9);
    }

    #[test]
    fn test_typo_table_hit_ranks_first() {
        let engine = SuggestionEngine::default();
        let got = engine.suggest("issue", "stat", 5).unwrap();
        assert_eq!(got[0], "status");
    }

    #[test]
    fn test_typo_hit_not_duplicated() {
        let engine = SuggestionEngine::default();
        let got = engine.suggest("issue", "stat", 10).unwrap();
        let hits = got.iter().filter(|f| f.as_str() == "status").count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_empty_input_and_zero_max_return_empty() {
        let engine = SuggestionEngine::default();
        assert!(engine.suggest("issue", "", 5).unwrap().is_empty());
        assert!(engine.suggest("issue", "   ", 5).unwrap().is_empty());
        assert!(engine.suggest("issue", "status", 0).unwrap().is_empty());
    }

    #[test]
    fn test_unsupported_entity_type_is_an_error() {
        let engine = SuggestionEngine::default();
        let err = engine.suggest("sprintboard", "status", 5).unwrap_err();
        assert!(matches!(err, SuggestError::UnsupportedEntityType(_)));
        assert!(err.to_string().contains("sprintboard"));
    }

    #[test]
    fn test_exact_name_ranks_first_case_insensitive() {
        let engine = SuggestionEngine::default();
        let got = engine.suggest("issue", "STATUS", 5).unwrap();
        assert_eq!(got[0], "status");
    }

    #[test]
    fn test_truncates_to_max_suggestions() {
        let engine = SuggestionEngine::default();
        let got = engine.suggest("issue", "s", 3).unwrap();
        assert!(got.len() <= 3);
    }

    #[test]
    fn test_no_match_below_threshold() {
        let engine = SuggestionEngine::new(0.5);
        assert!(engine.suggest("issue", "zzzzzz", 5).unwrap().is_empty());
    }

    #[test]
    fn test_detailed_scores_descend_after_top() {
        let engine = SuggestionEngine::default();
        let got = engine.suggest_detailed("issue", "statu", 8).unwrap();
        assert!(!got.is_empty());
        // Past the guaranteed top slot the ranking is score-ordered.
        for pair in got[1..].windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
        for candidate in &got {
            assert!((0.0..=1.0).contains(&candidate.metadata.similarity));
            assert!((0.0..=1.0).contains(&candidate.metadata.frequency));
            assert!((0.0..=1.0).contains(&candidate.metadata.availability));
        }
    }

    #[test]
    fn test_deterministic_across_calls_and_instances() {
        let a = SuggestionEngine::default();
        let b = SuggestionEngine::default();
        for _ in 0..3 {
            assert_eq!(
                a.suggest("issue", "asignee", 5).unwrap(),
                b.suggest("issue", "asignee", 5).unwrap()
            );
            assert_eq!(
                a.suggest("agile", "sprnt", 4).unwrap(),
                b.suggest("agile", "sprnt", 4).unwrap()
            );
        }
    }

    #[test]
    fn test_access_paths_are_candidates() {
        let engine = SuggestionEngine::default();
        let got = engine.suggest("issue", "status.nam", 5).unwrap();
        assert_eq!(got[0], "status.name");
    }

    #[test]
    fn test_custom_field_hints_match_keywords() {
        let engine = SuggestionEngine::default();
        let hints = engine.custom_field_hints("issue", "the sprint field").unwrap();
        assert_eq!(hints.len(), 1);
        assert_eq!(hints[0].keyword, "sprint");

        assert!(engine.custom_field_hints("issue", "nothing here").unwrap().is_empty());
        assert!(engine.custom_field_hints("issue", "").unwrap().is_empty());
        assert!(engine.custom_field_hints("nope", "sprint").is_err());
    }

    #[test]
    fn test_invalid_threshold_falls_back_to_default() {
        // Out-of-range thresholds behave like the default engine.
        let weird = SuggestionEngine::new(7.5);
        let normal = SuggestionEngine::default();
        assert_eq!(
            weird.suggest("issue", "statu", 5).unwrap(),
            normal.suggest("issue", "statu", 5).unwrap()
        );
    }
}
