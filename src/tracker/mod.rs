/// Upstream tracker API boundary.
///
/// The field cache only depends on the `TrackerClient` trait; the live
/// REST implementation and the scriptable test double both live here.
pub mod http;
pub mod mock;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while talking to the remote tracker.
#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("tracker API error: {0}")]
    Api(String),

    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("invalid response payload: {0}")]
    InvalidPayload(String),
}

/// One field record as returned by the tracker's field-listing endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoteField {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub custom: bool,
    #[serde(default)]
    pub schema: Option<RemoteFieldSchema>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RemoteFieldSchema {
    #[serde(rename = "type", default)]
    pub field_type: String,
}

/// Trait for tracker API implementations.
///
/// All implementations must be `Send + Sync` to allow concurrent use
/// behind `Arc`.
#[async_trait]
pub trait TrackerClient: Send + Sync {
    /// List every field the tracker knows about, custom and built-in.
    ///
    /// A rejection here is a recoverable condition for callers; the cache
    /// layer degrades to an empty result instead of propagating it.
    async fn fetch_remote_fields(&self, entity_type: &str)
    -> Result<Vec<RemoteField>, TrackerError>;
}
