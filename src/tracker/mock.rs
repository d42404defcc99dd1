/// Scriptable tracker double for testing.
///
/// Counts upstream calls and replays queued responses, so tests can assert
/// coalescing, TTL refresh, and failure-recovery behavior without a live
/// tracker.
use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;

use super::{RemoteField, RemoteFieldSchema, TrackerClient, TrackerError};

#[derive(Default)]
pub struct MockTracker {
    /// Served whenever no scripted response is queued.
    default_fields: Vec<RemoteField>,
    scripted: Mutex<VecDeque<Result<Vec<RemoteField>, String>>>,
    delay: Option<Duration>,
    calls: AtomicUsize,
}

impl MockTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_fields(fields: Vec<RemoteField>) -> Self {
        Self {
            default_fields: fields,
            ..Self::default()
        }
    }

    /// Delay every fetch, useful for holding a request in flight while
    /// other callers pile up behind it.
    #[must_use]
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Queue a successful response for the next fetch.
    pub fn push_ok(&self, fields: Vec<RemoteField>) {
        self.scripted.lock().unwrap().push_back(Ok(fields));
    }

    /// Queue a rejection for the next fetch.
    pub fn push_err(&self, message: &str) {
        self.scripted
            .lock()
            .unwrap()
            .push_back(Err(message.to_string()));
    }

    #[must_use]
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// Build a plausible custom field record.
    #[must_use]
    pub fn custom_field(id: &str, name: &str) -> RemoteField {
        RemoteField {
            id: id.to_string(),
            name: name.to_string(),
            custom: true,
            schema: Some(RemoteFieldSchema {
                field_type: "string".to_string(),
            }),
        }
    }

    /// Build a built-in (non-custom) field record.
    #[must_use]
    pub fn builtin_field(id: &str, name: &str) -> RemoteField {
        RemoteField {
            id: id.to_string(),
            name: name.to_string(),
            custom: false,
            schema: None,
        }
    }
}

#[async_trait]
impl TrackerClient for MockTracker {
    async fn fetch_remote_fields(
        &self,
        _entity_type: &str,
    ) -> Result<Vec<RemoteField>, TrackerError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let scripted = self.scripted.lock().unwrap().pop_front();
        match scripted {
            Some(Ok(fields)) => Ok(fields),
            Some(Err(message)) => Err(TrackerError::Api(message)),
            None => Ok(self.default_fields.clone()),
        }
    }
}
