/// End-to-end integration tests for the field resolution pipeline.
///
/// Tests the complete flow:
///   Config → Tracker → Cache → Fusion → Suggestions
use std::sync::Arc;

use fieldscope::config::Config;
use fieldscope::fields::cache::DynamicFieldCache;
use fieldscope::fields::fusion::FusionLayer;
use fieldscope::fields::suggest::{SuggestionEngine, similarity};
use fieldscope::tracker::mock::MockTracker;

fn pipeline(tracker: MockTracker) -> (Arc<DynamicFieldCache>, FusionLayer) {
    let cache = Arc::new(DynamicFieldCache::new(Arc::new(tracker), 300, 8));
    let fusion = FusionLayer::new(cache.clone());
    (cache, fusion)
}

/// Full pipeline: discover → fuse → read counts → invalidate → re-fuse
#[tokio::test]
async fn test_full_pipeline() {
    let tracker = MockTracker::with_fields(vec![
        MockTracker::custom_field("customfield_10016", "Story Points"),
        MockTracker::custom_field("customfield_10020", "Sprint"),
        MockTracker::custom_field("", "Broken Record"),
        MockTracker::builtin_field("summary", "Summary"),
    ]);
    let (cache, fusion) = pipeline(tracker);

    // 1. Fused document merges static catalog with the two valid custom fields
    let doc = fusion.build_resource_document("issue", true).await;
    assert_eq!(doc.entity_type, "issue");
    assert_eq!(doc.dynamic_fields, 2);
    assert_eq!(doc.total_fields, doc.fields.len(), "counts must be consistent");
    assert!(doc.fields.contains_key("status"), "static catalog present");
    assert!(doc.fields.contains_key("customfield_10016"), "dynamic field fused");
    assert!(!doc.fields.contains_key("summary"), "built-in remote fields are not custom");
    assert!(doc.last_dynamic_update.is_some());

    // 2. The path index covers both sources
    assert_eq!(doc.path_index.get("status.name"), Some(&"status".to_string()));
    assert_eq!(
        doc.path_index.get("customfield_10020"),
        Some(&"customfield_10020".to_string())
    );

    // 3. The document is JSON-serializable with stable counts
    let json = serde_json::to_value(&doc).unwrap();
    assert_eq!(json["totalFields"].as_u64().unwrap() as usize, doc.fields.len());
    assert_eq!(json["dynamicFields"], 2);

    // 4. A second read is served from cache
    let doc2 = fusion.build_resource_document("issue", true).await;
    assert_eq!(doc2.total_fields, doc.total_fields);

    // 5. Invalidation forces re-discovery on the next read
    assert!(cache.invalidate("issue").await);
    let doc3 = fusion.build_resource_document("issue", true).await;
    assert_eq!(doc3.dynamic_fields, 2);

    let stats = cache.stats().await;
    assert_eq!(stats.entries.len(), 1);
    assert_eq!(stats.entries[0].key, "issue-fields");
    assert_eq!(stats.entries[0].field_count, 2);
}

/// Upstream failure must degrade to a static-only document, then recover.
#[tokio::test]
async fn test_failure_recovery_pipeline() {
    let tracker = MockTracker::new();
    tracker.push_err("tracker unavailable");
    tracker.push_ok(vec![MockTracker::custom_field("customfield_1", "Team")]);
    let (cache, fusion) = pipeline(tracker);

    let degraded = fusion.build_resource_document("issue", true).await;
    assert_eq!(degraded.dynamic_fields, 0);
    assert!(degraded.total_fields > 0, "static catalog still served");

    // The failed call was not cached, so this read re-fetches and succeeds.
    let recovered = fusion.build_resource_document("issue", true).await;
    assert_eq!(recovered.dynamic_fields, 1);
    assert_eq!(cache.stats().await.entries.len(), 1);
}

/// Static catalog is authoritative for colliding ids.
#[tokio::test]
async fn test_static_authority_end_to_end() {
    let tracker = MockTracker::with_fields(vec![MockTracker::custom_field("status", "Impostor")]);
    let (_cache, fusion) = pipeline(tracker);

    let doc = fusion.build_resource_document("issue", true).await;
    assert_eq!(doc.dynamic_fields, 0);
    assert_eq!(doc.fields["status"].name, "Status");
}

/// Suggestion flows an MCP client would exercise.
#[test]
fn test_suggestion_flows() {
    let engine = SuggestionEngine::default();

    // Typo-table hit ranks first
    assert_eq!(engine.suggest("issue", "stat", 5).unwrap()[0], "status");

    // Guesses resolve to close catalog names
    let got = engine.suggest("issue", "asignee", 5).unwrap();
    assert_eq!(got[0], "assignee");

    // Degenerate inputs are no-ops, not errors
    assert!(engine.suggest("issue", "", 5).unwrap().is_empty());
    assert!(engine.suggest("issue", "status", 0).unwrap().is_empty());

    // Unknown entity types are a caller defect
    assert!(engine.suggest("wormhole", "status", 5).is_err());

    // Detailed variant exposes the score breakdown
    let detailed = engine.suggest_detailed("agile", "sprnt", 3).unwrap();
    assert_eq!(detailed[0].field, "sprint");
    assert!(detailed[0].metadata.similarity > 0.0);
}

/// Repeated suggestion calls across fresh engines are identical.
#[test]
fn test_suggestion_determinism() {
    let reference = SuggestionEngine::default()
        .suggest_detailed("issue", "priorty", 6)
        .unwrap();
    for _ in 0..5 {
        let run = SuggestionEngine::default()
            .suggest_detailed("issue", "priorty", 6)
            .unwrap();
        let fields: Vec<&str> = run.iter().map(|c| c.field.as_str()).collect();
        let expected: Vec<&str> = reference.iter().map(|c| c.field.as_str()).collect();
        assert_eq!(fields, expected);
    }
}

/// Similarity conventions hold at the crate boundary.
#[test]
fn test_similarity_contract() {
    assert_eq!(similarity("", ""), 1.0);
    assert_eq!(similarity("status", "status"), 1.0);
    assert_eq!(similarity("", "status"), 0.0);
    assert_eq!(similarity("stat", "status"), similarity("status", "stat"));
}

/// Config defaults and validation
#[test]
fn test_config_defaults_and_validation() {
    let mut config = Config::default();
    config.dynamic_discovery_enabled = false;

    assert_eq!(config.cache_ttl_seconds, 300);
    assert_eq!(config.cache_max_entries, 16);
    assert!((config.similarity_threshold - 0.3).abs() < f64::EPSILON);
    assert!(config.validate().is_ok());

    // Invalid config
    let mut bad_config = config.clone();
    bad_config.cache_ttl_seconds = 0;
    assert!(bad_config.validate().is_err());
}

/// Isolated cache instances share no state.
#[tokio::test]
async fn test_cache_instances_are_isolated() {
    let a_tracker = MockTracker::with_fields(vec![MockTracker::custom_field("customfield_1", "A")]);
    let b_tracker = MockTracker::new();
    let (a_cache, a_fusion) = pipeline(a_tracker);
    let (b_cache, b_fusion) = pipeline(b_tracker);

    let a_doc = a_fusion.build_resource_document("issue", true).await;
    let b_doc = b_fusion.build_resource_document("issue", true).await;

    assert_eq!(a_doc.dynamic_fields, 1);
    assert_eq!(b_doc.dynamic_fields, 0);
    assert_eq!(a_cache.stats().await.entries.len(), 1);
    assert_eq!(b_cache.stats().await.entries.len(), 1);
}
