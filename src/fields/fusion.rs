//! Fuses the compiled-in catalog with dynamically-discovered custom fields
//! into one resource document per entity type.
use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::{self, EntityType};
use crate::fields::cache::DynamicFieldCache;
use crate::fields::model::{FieldDefinition, ResourceDocument};

/// Builds `ResourceDocument`s. Holds no state of its own beyond the cache
/// handle; every document is freshly constructed per read.
pub struct FusionLayer {
    cache: Arc<DynamicFieldCache>,
}

impl FusionLayer {
    pub fn new(cache: Arc<DynamicFieldCache>) -> Self {
        Self { cache }
    }

    /// Build the fused field schema for `entity_type`.
    ///
    /// The static catalog is always the base; when `dynamic_enabled`,
    /// discovered custom fields are merged in by id with the static entry
    /// winning any collision. Unknown entity types yield an empty base set
    /// rather than an error, since readers may probe arbitrary type
    /// strings. Discovery failures have already degraded to an empty list
    /// inside the cache, so this never fails.
    pub async fn build_resource_document(
        &self,
        entity_type: &str,
        dynamic_enabled: bool,
    ) -> ResourceDocument {
        let trimmed = entity_type.trim();

        // Static base, in catalog order.
        let mut ordered: Vec<FieldDefinition> = match EntityType::from_name(trimmed) {
            Some(entity) => catalog::static_fields(entity)
                .iter()
                .map(|f| f.to_definition())
                .collect(),
            None => Vec::new(),
        };

        let mut dynamic_count = 0;
        let mut last_dynamic_update = None;
        if dynamic_enabled {
            let discovered = self.cache.discover(trimmed).await;
            last_dynamic_update = self.cache.last_refresh(trimmed).await;
            for def in discovered {
                if ordered.iter().any(|existing| existing.id == def.id) {
                    debug!(id = %def.id, "dynamic field shadowed by static catalog entry");
                    continue;
                }
                dynamic_count += 1;
                ordered.push(def);
            }
        }

        let path_index = build_path_index(&ordered);
        let fields: BTreeMap<String, FieldDefinition> =
            ordered.into_iter().map(|def| (def.id.clone(), def)).collect();

        ResourceDocument {
            entity_type: trimmed.to_string(),
            total_fields: fields.len(),
            fields,
            path_index,
            dynamic_fields: dynamic_count,
            last_dynamic_update,
        }
    }
}

/// Record `path -> field id` for every access path, static fields first.
/// Later writes overwrite earlier ones, so a dynamic path can shadow a
/// static one with the same literal path string even though ids never do.
fn build_path_index(ordered: &[FieldDefinition]) -> BTreeMap<String, String> {
    let mut index = BTreeMap::new();
    for def in ordered {
        for ap in &def.access_paths {
            index.insert(ap.path.clone(), def.id.clone());
        }
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::model::{AccessPath, Confidence, FieldSource, FieldType, UsageFrequency};
    use crate::tracker::mock::MockTracker;

    fn fusion_with(tracker: MockTracker) -> FusionLayer {
        let cache = Arc::new(DynamicFieldCache::new(Arc::new(tracker), 60, 8));
        FusionLayer::new(cache)
    }

    fn definition(id: &str, paths: &[&str]) -> FieldDefinition {
        FieldDefinition {
            id: id.to_string(),
            name: id.to_string(),
            description: String::new(),
            field_type: FieldType::String,
            access_paths: paths
                .iter()
                .map(|p| AccessPath {
                    path: (*p).to_string(),
                    value_type: FieldType::String,
                    frequency: UsageFrequency::Medium,
                })
                .collect(),
            examples: Vec::new(),
            common_usage: Vec::new(),
            source: FieldSource::Dynamic,
            confidence: Confidence::High,
        }
    }

    #[tokio::test]
    async fn test_static_only_document() {
        let fusion = fusion_with(MockTracker::new());
        let doc = fusion.build_resource_document("issue", false).await;

        assert!(doc.total_fields > 0);
        assert_eq!(doc.total_fields, doc.fields.len());
        assert_eq!(doc.dynamic_fields, 0);
        assert!(doc.last_dynamic_update.is_none());
        assert!(doc.fields.contains_key("status"));
        assert_eq!(doc.path_index.get("status.name"), Some(&"status".to_string()));
    }

    #[tokio::test]
    async fn test_dynamic_fields_merged_and_counted() {
        let tracker = MockTracker::with_fields(vec![
            MockTracker::custom_field("customfield_10016", "Story Points"),
            MockTracker::custom_field("customfield_10020", "Sprint"),
        ]);
        let fusion = fusion_with(tracker);

        let doc = fusion.build_resource_document("issue", true).await;
        assert_eq!(doc.dynamic_fields, 2);
        assert_eq!(doc.total_fields, doc.fields.len());
        assert!(doc.fields.contains_key("customfield_10016"));
        assert!(doc.last_dynamic_update.is_some());
        assert_eq!(
            doc.path_index.get("customfield_10016"),
            Some(&"customfield_10016".to_string())
        );
    }

    #[tokio::test]
    async fn test_static_wins_id_collision() {
        // A discovered field claiming a static id must not replace it.
        let tracker = MockTracker::with_fields(vec![
            MockTracker::custom_field("status", "Rogue Status"),
            MockTracker::custom_field("customfield_1", "Fine"),
        ]);
        let fusion = fusion_with(tracker);

        let doc = fusion.build_resource_document("issue", true).await;
        assert_eq!(doc.dynamic_fields, 1);
        let status = &doc.fields["status"];
        assert_eq!(status.source, FieldSource::Static);
        assert_eq!(status.name, "Status");
    }

    #[tokio::test]
    async fn test_discovery_failure_degrades_to_static_only() {
        let tracker = MockTracker::new();
        tracker.push_err("tracker down");
        let fusion = fusion_with(tracker);

        let doc = fusion.build_resource_document("issue", true).await;
        assert!(doc.total_fields > 0);
        assert_eq!(doc.dynamic_fields, 0);
        assert!(doc.last_dynamic_update.is_none());
    }

    #[tokio::test]
    async fn test_unknown_entity_type_yields_empty_base() {
        let tracker = MockTracker::with_fields(vec![MockTracker::custom_field(
            "customfield_7",
            "Anything",
        )]);
        let fusion = fusion_with(tracker);

        // Unknown types are probed leniently: no static base, but dynamic
        // discovery still applies.
        let doc = fusion.build_resource_document("mystery", true).await;
        assert_eq!(doc.total_fields, 1);
        assert_eq!(doc.dynamic_fields, 1);

        let empty = fusion.build_resource_document("mystery", false).await;
        assert_eq!(empty.total_fields, 0);
    }

    #[test]
    fn test_path_index_last_write_wins() {
        let a = definition("alpha", &["shared.path", "alpha.only"]);
        let b = definition("beta", &["shared.path"]);

        let index = build_path_index(&[a, b]);
        assert_eq!(index.get("shared.path"), Some(&"beta".to_string()));
        assert_eq!(index.get("alpha.only"), Some(&"alpha".to_string()));
    }
}
