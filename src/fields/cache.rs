//! Dynamic field cache over the tracker boundary.
//!
//! Returns the current set of dynamically-discovered custom fields for an
//! entity type while keeping upstream calls to a minimum: fresh entries are
//! served from memory, expired entries trigger one re-fetch, concurrent
//! misses for the same key share a single in-flight request, and a full
//! cache evicts the least-recently-accessed entry.
use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::{Mutex, broadcast};
use tokio::time::{Duration, Instant};
use tracing::{debug, warn};

use crate::fields::model::{AccessPath, Confidence, FieldDefinition, FieldSource, FieldType, UsageFrequency};
use crate::tracker::{RemoteField, RemoteFieldSchema, TrackerClient};

/// Lower bound on the configured TTL, in whole seconds.
pub const MIN_TTL_SECS: u64 = 1;

const KEY_SUFFIX: &str = "-fields";

struct CacheEntry {
    fields: Vec<FieldDefinition>,
    /// Creation time; expiry is judged by this alone.
    created: Instant,
    /// Updated on every hit; eviction is judged by this alone.
    last_accessed: Instant,
    fetched_at: DateTime<Utc>,
}

struct CacheState {
    entries: HashMap<String, CacheEntry>,
    /// In-flight request registry: one sender per key currently being
    /// fetched. Removed unconditionally once the fetch settles.
    pending: HashMap<String, broadcast::Sender<Vec<FieldDefinition>>>,
}

/// Read-only cache introspection, serialized into MCP tool responses.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    pub entries: Vec<CacheEntryStats>,
    pub pending_requests: usize,
    pub max_entries: usize,
    pub ttl_seconds: u64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheEntryStats {
    pub key: String,
    pub field_count: usize,
    pub age_seconds: u64,
    pub idle_seconds: u64,
    pub expired: bool,
}

/// LRU + TTL cache of dynamically-discovered custom fields.
///
/// State is owned exclusively by one instance; separate instances are fully
/// isolated, so tests can run in parallel without shared globals.
pub struct DynamicFieldCache {
    tracker: Arc<dyn TrackerClient>,
    ttl: Duration,
    max_entries: usize,
    state: Mutex<CacheState>,
}

impl DynamicFieldCache {
    pub fn new(tracker: Arc<dyn TrackerClient>, ttl_seconds: u64, max_entries: usize) -> Self {
        let ttl_seconds = if ttl_seconds < MIN_TTL_SECS {
            warn!(ttl_seconds, "cache TTL below minimum, clamping to {MIN_TTL_SECS}s");
            MIN_TTL_SECS
        } else {
            ttl_seconds
        };
        let max_entries = max_entries.max(1);

        Self {
            tracker,
            ttl: Duration::from_secs(ttl_seconds),
            max_entries,
            state: Mutex::new(CacheState {
                entries: HashMap::new(),
                pending: HashMap::new(),
            }),
        }
    }

    /// Return the current custom fields for `entity_type`.
    ///
    /// Blank input returns an empty list without touching the tracker.
    /// Upstream failures also return an empty list; they are logged but
    /// never cached and never propagated.
    pub async fn discover(&self, entity_type: &str) -> Vec<FieldDefinition> {
        let trimmed = entity_type.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }
        let key = cache_key(trimmed);

        let receiver = {
            let mut state = self.state.lock().await;

            let mut expired = false;
            if let Some(entry) = state.entries.get_mut(&key) {
                if entry.created.elapsed() < self.ttl {
                    entry.last_accessed = Instant::now();
                    debug!(key = %key, "field cache hit");
                    return entry.fields.clone();
                }
                expired = true;
            }
            if expired {
                debug!(key = %key, "field cache entry expired");
                state.entries.remove(&key);
            }

            match state.pending.get(&key) {
                Some(tx) => Some(tx.subscribe()),
                None => {
                    let (tx, _) = broadcast::channel(1);
                    state.pending.insert(key.clone(), tx);
                    None
                }
            }
        };

        match receiver {
            // Another caller owns the in-flight fetch; share its outcome.
            Some(mut rx) => rx.recv().await.unwrap_or_default(),
            None => self.fetch_and_store(trimmed, &key).await,
        }
    }

    /// Wall-clock time of the last successful discovery for `entity_type`,
    /// if an entry is currently cached. Does not count as an access.
    pub async fn last_refresh(&self, entity_type: &str) -> Option<DateTime<Utc>> {
        let trimmed = entity_type.trim();
        if trimmed.is_empty() {
            return None;
        }
        let state = self.state.lock().await;
        state.entries.get(&cache_key(trimmed)).map(|e| e.fetched_at)
    }

    /// Drop the cached entry for `entity_type`. Returns whether one existed.
    pub async fn invalidate(&self, entity_type: &str) -> bool {
        let trimmed = entity_type.trim();
        if trimmed.is_empty() {
            return false;
        }
        let key = cache_key(trimmed);
        let mut state = self.state.lock().await;
        state.entries.remove(&key).is_some()
    }

    /// Drop every cached entry. Returns how many were removed.
    pub async fn clear(&self) -> usize {
        let mut state = self.state.lock().await;
        let removed = state.entries.len();
        state.entries.clear();
        removed
    }

    pub async fn stats(&self) -> CacheStats {
        let state = self.state.lock().await;
        let mut entries: Vec<CacheEntryStats> = state
            .entries
            .iter()
            .map(|(key, entry)| CacheEntryStats {
                key: key.clone(),
                field_count: entry.fields.len(),
                age_seconds: entry.created.elapsed().as_secs(),
                idle_seconds: entry.last_accessed.elapsed().as_secs(),
                expired: entry.created.elapsed() >= self.ttl,
            })
            .collect();
        entries.sort_by(|a, b| a.key.cmp(&b.key));

        CacheStats {
            entries,
            pending_requests: state.pending.len(),
            max_entries: self.max_entries,
            ttl_seconds: self.ttl.as_secs(),
        }
    }

    async fn fetch_and_store(&self, entity_type: &str, key: &str) -> Vec<FieldDefinition> {
        let result = self.tracker.fetch_remote_fields(entity_type).await;

        let mut state = self.state.lock().await;
        let tx = state.pending.remove(key);

        let fields = match result {
            Ok(remote) => {
                let fields = map_custom_fields(remote);
                debug!(
                    key = %key,
                    count = fields.len(),
                    "caching discovered custom fields"
                );
                self.insert_entry(&mut state, key, fields.clone());
                fields
            }
            Err(e) => {
                warn!(
                    entity_type,
                    error = %e,
                    "dynamic field discovery failed, serving static catalog only"
                );
                Vec::new()
            }
        };

        if let Some(tx) = tx {
            // A send error only means no other caller is waiting.
            let _ = tx.send(fields.clone());
        }

        fields
    }

    fn insert_entry(&self, state: &mut CacheState, key: &str, fields: Vec<FieldDefinition>) {
        if !state.entries.contains_key(key) && state.entries.len() >= self.max_entries {
            // Evict by oldest last access, not by creation order. Ties fall
            // back to the lexicographically smallest key.
            let victim = state
                .entries
                .iter()
                .min_by(|(ka, a), (kb, b)| {
                    a.last_accessed
                        .cmp(&b.last_accessed)
                        .then_with(|| ka.cmp(kb))
                })
                .map(|(k, _)| k.clone());
            if let Some(victim) = victim {
                debug!(key = %victim, "evicting least recently used cache entry");
                state.entries.remove(&victim);
            }
        }

        let now = Instant::now();
        state.entries.insert(
            key.to_string(),
            CacheEntry {
                fields,
                created: now,
                last_accessed: now,
                fetched_at: Utc::now(),
            },
        );
    }
}

fn cache_key(entity_type: &str) -> String {
    format!("{}{KEY_SUFFIX}", entity_type.to_lowercase())
}

/// Keep only well-formed custom field records and map them to definitions.
///
/// Records missing an id or name are skipped individually so one bad
/// record cannot fail the whole discovery batch.
fn map_custom_fields(remote: Vec<RemoteField>) -> Vec<FieldDefinition> {
    let mut fields = Vec::new();
    for raw in remote.into_iter().filter(|f| f.custom) {
        if raw.id.trim().is_empty() || raw.name.trim().is_empty() {
            warn!(
                id = %raw.id,
                name = %raw.name,
                "skipping custom field with missing id or name"
            );
            continue;
        }

        let field_type = map_field_type(raw.schema.as_ref());
        let mut access_paths = vec![AccessPath {
            path: raw.id.clone(),
            value_type: field_type,
            frequency: UsageFrequency::Medium,
        }];
        if field_type == FieldType::Object {
            access_paths.push(AccessPath {
                path: format!("{}.value", raw.id),
                value_type: FieldType::String,
                frequency: UsageFrequency::Medium,
            });
        }

        fields.push(FieldDefinition {
            description: format!("Custom field: {}", raw.name),
            id: raw.id,
            name: raw.name,
            field_type,
            access_paths,
            examples: Vec::new(),
            common_usage: Vec::new(),
            source: FieldSource::Dynamic,
            confidence: Confidence::High,
        });
    }
    fields
}

fn map_field_type(schema: Option<&RemoteFieldSchema>) -> FieldType {
    match schema.map(|s| s.field_type.as_str()) {
        Some("array") => FieldType::Array,
        Some("object" | "option" | "user" | "priority" | "version") => FieldType::Object,
        _ => FieldType::String,
    }
}
