use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use review_common::error::ReviewError;

/// Source of raw homework status payloads.
#[async_trait]
pub trait ReviewSource: Send + Sync {
    /// Fetch homework statuses changed since `timestamp` (unix seconds).
    ///
    /// The payload is returned as parsed, without shape validation.
    async fn get_api_answer(&self, timestamp: i64) -> Result<Value, ReviewError>;
}

/// HTTP client for the homework status endpoint.
pub struct PracticumClient {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl PracticumClient {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            token: token.into(),
        }
    }

    fn authorization(&self) -> String {
        format!("OAuth {}", self.token)
    }
}

#[async_trait]
impl ReviewSource for PracticumClient {
    async fn get_api_answer(&self, timestamp: i64) -> Result<Value, ReviewError> {
        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, self.authorization())
            .query(&[("from_date", timestamp)])
            .send()
            .await
            .map_err(|e| {
                tracing::error!(endpoint = %self.endpoint, error = %e, "Request to the endpoint failed");
                ReviewError::BadRequest
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!(
                endpoint = %self.endpoint,
                status = status.as_u16(),
                "Endpoint returned an unexpected status"
            );
            return Err(ReviewError::BadRequest);
        }

        let body = response.text().await.map_err(|e| {
            tracing::error!(endpoint = %self.endpoint, error = %e, "Failed to read response body");
            ReviewError::BadRequest
        })?;

        serde_json::from_str(&body).map_err(|e| {
            tracing::error!(endpoint = %self.endpoint, error = %e, "Response body is not valid JSON");
            ReviewError::InvalidJson
        })
    }
}
