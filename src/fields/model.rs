//! Shared field-schema types serialized into MCP resource payloads.
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Value shape of a field or of one of its access paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    String,
    Object,
    Array,
}

/// Where a field definition came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldSource {
    Static,
    Dynamic,
}

/// How much the definition can be trusted to match the live tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

/// Observed usage frequency of a field or access path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UsageFrequency {
    High,
    Medium,
    Low,
}

/// One dot-notation path into a field's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPath {
    pub path: String,
    #[serde(rename = "type")]
    pub value_type: FieldType,
    pub frequency: UsageFrequency,
}

/// A named, typed description of one attribute of a tracked entity,
/// including every known path to reach nested values within it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDefinition {
    pub id: String,
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub access_paths: Vec<AccessPath>,
    pub examples: Vec<String>,
    pub common_usage: Vec<Vec<String>>,
    pub source: FieldSource,
    pub confidence: Confidence,
}

/// Fused static + dynamic field schema for one entity type.
///
/// Freshly constructed on every read, never mutated in place. `fields` and
/// `path_index` are ordered maps so the serialized document is stable across
/// identical reads.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDocument {
    pub entity_type: String,
    pub total_fields: usize,
    pub fields: BTreeMap<String, FieldDefinition>,
    /// Access path to owning field id. On a literal path collision the
    /// later write wins, so dynamic paths can shadow static ones.
    pub path_index: BTreeMap<String, String>,
    pub dynamic_fields: usize,
    pub last_dynamic_update: Option<DateTime<Utc>>,
}

impl FieldDefinition {
    /// Whether this definition was discovered from the live tracker.
    #[must_use]
    pub fn is_dynamic(&self) -> bool {
        self.source == FieldSource::Dynamic
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_field() -> FieldDefinition {
        FieldDefinition {
            id: "status".to_string(),
            name: "Status".to_string(),
            description: "Workflow state".to_string(),
            field_type: FieldType::Object,
            access_paths: vec![AccessPath {
                path: "status.name".to_string(),
                value_type: FieldType::String,
                frequency: UsageFrequency::High,
            }],
            examples: vec!["status.name".to_string()],
            common_usage: vec![vec!["status.name".to_string()]],
            source: FieldSource::Static,
            confidence: Confidence::High,
        }
    }

    #[test]
    fn test_field_definition_serializes_camel_case() {
        let json = serde_json::to_value(sample_field()).unwrap();
        assert_eq!(json["id"], "status");
        assert_eq!(json["type"], "object");
        assert_eq!(json["accessPaths"][0]["path"], "status.name");
        assert_eq!(json["accessPaths"][0]["type"], "string");
        assert_eq!(json["source"], "static");
        assert_eq!(json["confidence"], "high");
    }

    #[test]
    fn test_is_dynamic() {
        let mut field = sample_field();
        assert!(!field.is_dynamic());
        field.source = FieldSource::Dynamic;
        assert!(field.is_dynamic());
    }

    #[test]
    fn test_resource_document_counts_serialize() {
        let field = sample_field();
        let mut fields = BTreeMap::new();
        fields.insert(field.id.clone(), field);
        let doc = ResourceDocument {
            entity_type: "issue".to_string(),
            total_fields: fields.len(),
            fields,
            path_index: BTreeMap::new(),
            dynamic_fields: 0,
            last_dynamic_update: None,
        };
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["entityType"], "issue");
        assert_eq!(json["totalFields"], 1);
        assert_eq!(json["dynamicFields"], 0);
        assert!(json["lastDynamicUpdate"].is_null());
    }
}
