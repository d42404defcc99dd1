//! Compiled-in field catalog for the supported tracker entity types.
//!
//! Each entity type carries two immutable tables: the known field
//! definitions (with nested access paths) and the suggestion data used by
//! the fuzzy field-name engine (typo corrections, usage statistics, ordered
//! contextual suggestions, custom-field keyword patterns).
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::fields::model::{
    AccessPath, Confidence, FieldDefinition, FieldSource, FieldType, UsageFrequency,
};

mod agile;
mod issue;
mod project;
mod user;

/// The closed set of entity types this server knows how to describe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Issue,
    Project,
    User,
    Agile,
}

impl EntityType {
    pub const ALL: [EntityType; 4] = [
        EntityType::Issue,
        EntityType::Project,
        EntityType::User,
        EntityType::Agile,
    ];

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityType::Issue => "issue",
            EntityType::Project => "project",
            EntityType::User => "user",
            EntityType::Agile => "agile",
        }
    }

    /// Case-insensitive lookup. Returns `None` for anything outside the
    /// supported set.
    #[must_use]
    pub fn from_name(name: &str) -> Option<EntityType> {
        match name.trim().to_lowercase().as_str() {
            "issue" => Some(EntityType::Issue),
            "project" => Some(EntityType::Project),
            "user" => Some(EntityType::User),
            "agile" => Some(EntityType::Agile),
            _ => None,
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Static table types ───────────────────────────────────────────────

pub struct StaticAccessPath {
    pub path: &'static str,
    pub value_type: FieldType,
    pub frequency: UsageFrequency,
}

pub struct StaticField {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub field_type: FieldType,
    pub access_paths: &'static [StaticAccessPath],
    pub examples: &'static [&'static str],
    pub common_usage: &'static [&'static [&'static str]],
}

/// Frequency and availability statistics for one catalog field.
pub struct FieldUsage {
    pub frequency: UsageFrequency,
    /// Fraction of entities on which the field is populated, 0..1.
    pub availability: f64,
}

/// Immutable per-entity suggestion data, loaded once at compile time.
pub struct SuggestionData {
    /// Common misspellings mapped to the canonical field name.
    pub typo_corrections: &'static [(&'static str, &'static str)],
    pub usage_statistics: &'static [(&'static str, FieldUsage)],
    /// Curated, ordered default candidate list. Position doubles as the
    /// tie-break ordering during ranking.
    pub contextual_suggestions: &'static [&'static str],
    /// Heuristic keyword to custom-field id pattern hints.
    pub custom_field_patterns: &'static [(&'static str, &'static str)],
    pub last_analyzed: &'static str,
}

impl StaticField {
    /// Materialize the compiled-in entry as a full `FieldDefinition`.
    #[must_use]
    pub fn to_definition(&self) -> FieldDefinition {
        FieldDefinition {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            field_type: self.field_type,
            access_paths: self
                .access_paths
                .iter()
                .map(|ap| AccessPath {
                    path: ap.path.to_string(),
                    value_type: ap.value_type,
                    frequency: ap.frequency,
                })
                .collect(),
            examples: self.examples.iter().map(|e| (*e).to_string()).collect(),
            common_usage: self
                .common_usage
                .iter()
                .map(|combo| combo.iter().map(|p| (*p).to_string()).collect())
                .collect(),
            source: FieldSource::Static,
            confidence: Confidence::High,
        }
    }
}

// ── Lookup ───────────────────────────────────────────────────────────

#[must_use]
pub fn static_fields(entity: EntityType) -> &'static [StaticField] {
    match entity {
        EntityType::Issue => issue::FIELDS,
        EntityType::Project => project::FIELDS,
        EntityType::User => user::FIELDS,
        EntityType::Agile => agile::FIELDS,
    }
}

#[must_use]
pub fn suggestion_data(entity: EntityType) -> &'static SuggestionData {
    match entity {
        EntityType::Issue => &issue::SUGGESTION_DATA,
        EntityType::Project => &project::SUGGESTION_DATA,
        EntityType::User => &user::SUGGESTION_DATA,
        EntityType::Agile => &agile::SUGGESTION_DATA,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_type_from_name() {
        assert_eq!(EntityType::from_name("issue"), Some(EntityType::Issue));
        assert_eq!(EntityType::from_name("  Project "), Some(EntityType::Project));
        assert_eq!(EntityType::from_name("USER"), Some(EntityType::User));
        assert_eq!(EntityType::from_name("agile"), Some(EntityType::Agile));
        assert_eq!(EntityType::from_name("epic"), None);
        assert_eq!(EntityType::from_name(""), None);
    }

    #[test]
    fn test_all_entities_have_static_data() {
        for entity in EntityType::ALL {
            assert!(
                !static_fields(entity).is_empty(),
                "{entity} should have static fields"
            );
            let data = suggestion_data(entity);
            assert!(
                !data.contextual_suggestions.is_empty(),
                "{entity} should have contextual suggestions"
            );
            assert!(!data.last_analyzed.is_empty());
        }
    }

    #[test]
    fn test_static_field_ids_unique_per_entity() {
        for entity in EntityType::ALL {
            let fields = static_fields(entity);
            for (i, a) in fields.iter().enumerate() {
                for b in &fields[i + 1..] {
                    assert_ne!(a.id, b.id, "duplicate id {} in {entity}", a.id);
                }
            }
        }
    }

    #[test]
    fn test_to_definition_marks_static_high_confidence() {
        let field = &static_fields(EntityType::Issue)[0];
        let def = field.to_definition();
        assert_eq!(def.source, FieldSource::Static);
        assert_eq!(def.confidence, Confidence::High);
        assert_eq!(def.access_paths.len(), field.access_paths.len());
    }

    #[test]
    fn test_typo_corrections_point_at_known_candidates() {
        // Every correction target should be rankable: either a catalog
        // field name, a contextual suggestion, or a known access path.
        for entity in EntityType::ALL {
            let data = suggestion_data(entity);
            for (typo, correction) in data.typo_corrections {
                let known = data.contextual_suggestions.contains(correction)
                    || data.usage_statistics.iter().any(|(f, _)| f == correction)
                    || static_fields(entity).iter().any(|f| {
                        f.id == *correction
                            || f.access_paths.iter().any(|ap| ap.path == *correction)
                    });
                assert!(known, "{entity}: typo {typo} corrects to unknown {correction}");
            }
        }
    }

    #[test]
    fn test_availability_in_unit_range() {
        for entity in EntityType::ALL {
            for (field, usage) in suggestion_data(entity).usage_statistics {
                assert!(
                    (0.0..=1.0).contains(&usage.availability),
                    "{entity}.{field} availability out of range"
                );
            }
        }
    }
}
