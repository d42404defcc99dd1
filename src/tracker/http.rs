/// REST implementation of the tracker boundary.
///
/// Thin pass-through over the tracker's field-listing endpoint; all retry
/// and degradation policy lives with the callers.
use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use super::{RemoteField, TrackerClient, TrackerError};

const FIELD_ENDPOINT: &str = "/rest/api/2/field";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Tracker client backed by `reqwest` with basic auth.
pub struct HttpTracker {
    client: reqwest::Client,
    base_url: String,
    email: String,
    api_token: String,
}

impl HttpTracker {
    pub fn new(base_url: &str, email: &str, api_token: &str) -> Result<Self, TrackerError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("fieldscope/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            email: email.to_string(),
            api_token: api_token.to_string(),
        })
    }
}

#[async_trait]
impl TrackerClient for HttpTracker {
    // The field listing is account-global upstream; entity scoping happens
    // in the catalog and fusion layers.
    async fn fetch_remote_fields(
        &self,
        entity_type: &str,
    ) -> Result<Vec<RemoteField>, TrackerError> {
        let url = format!("{}{FIELD_ENDPOINT}", self.base_url);
        debug!(entity_type, url = %url, "fetching remote field listing");

        let resp = self
            .client
            .get(&url)
            .basic_auth(&self.email, Some(&self.api_token))
            .header("Accept", "application/json")
            .send()
            .await?;

        if !resp.status().is_success() {
            return Err(TrackerError::Api(format!(
                "field listing returned status {}",
                resp.status()
            )));
        }

        let fields: Vec<RemoteField> = resp
            .json()
            .await
            .map_err(|e| TrackerError::InvalidPayload(e.to_string()))?;

        debug!(count = fields.len(), "remote field listing fetched");
        Ok(fields)
    }
}
