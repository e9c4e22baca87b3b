use std::time::Duration;

use crate::errors::AppError;
use crate::models::GraphProfile;

/// Client for Graph user lookups.
///
/// One unauthenticated GET per uid, best effort, fail fast: no retries and
/// no redirect handling beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct GraphClient {
    client: reqwest::Client,
    base_url: String,
}

impl GraphClient {
    /// Creates a new `GraphClient` against the given base host.
    ///
    /// # Arguments
    ///
    /// * `base_url` - The Graph host, without a trailing slash.
    pub fn new(base_url: impl Into<String>) -> Result<Self, AppError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| AppError::Network(format!("failed to create graph client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.into(),
        })
    }

    /// Returns the Graph URL for a uid.
    pub fn user_url(&self, uid: u64) -> String {
        format!("{}/{}", self.base_url, uid)
    }

    /// Fetches one uid from the Graph and decodes the body.
    ///
    /// The HTTP status is not inspected: the Graph embeds failures as an
    /// error object in the JSON body, which conversion inspects later.
    /// Transport failures surface as `Network`, malformed bodies as
    /// `Decode`.
    pub async fn fetch_profile(&self, uid: u64) -> Result<GraphProfile, AppError> {
        let url = self.user_url(uid);
        tracing::debug!("fetching {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::Network(format!("request for uid {} failed: {}", uid, e)))?;

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(format!("reading body for uid {}: {}", uid, e)))?;

        serde_json::from_str(&body)
            .map_err(|e| AppError::Decode(format!("malformed payload for uid {}: {}", uid, e)))
    }
}
