//! REST client for the Outreach backend
//!
//! Thin wrapper over reqwest that normalizes every exchange into the
//! [`ApiError`] taxonomy. One request per call, no retries; the only timeout
//! policy is the one configured on the underlying client.

use super::error::{decode_field_errors, ApiError};
use super::traits::ApiClientTrait;
use super::Health;
use anyhow::Context;
use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;

/// Default backend address
const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/api";

/// Request timeout applied to every exchange
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Form submission endpoints, relative to the base URL
pub mod endpoints {
    pub const DONATIONS: &str = "/donations/";
    pub const VOLUNTEERS: &str = "/volunteers/";
    pub const CONTACT_MESSAGES: &str = "/contact/messages/";
    pub const NEWSLETTER_SUBSCRIBE: &str = "/contact/newsletter/subscribe/";
}

/// `GET /data` body
#[derive(Debug, Deserialize)]
struct DataResponse {
    data: Vec<f64>,
}

/// Client for the Outreach REST backend
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a new client. The base URL is taken from the
    /// `OUTREACH_API_URL` environment variable, then the user config, then
    /// the default local address.
    pub fn new(configured_url: Option<&str>) -> anyhow::Result<Self> {
        let base_url = std::env::var("OUTREACH_API_URL")
            .ok()
            .or_else(|| configured_url.map(str::to_string))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .context("failed to build HTTP client")?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .send()
            .await
            .map_err(|e| ApiError::NetworkUnavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::UnexpectedResponse(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::UnexpectedResponse(format!(
                "GET {path} returned {status}"
            )));
        }

        serde_json::from_str(&body)
            .map_err(|e| ApiError::UnexpectedResponse(format!("GET {path}: {e}")))
    }
}

#[async_trait]
impl ApiClientTrait for ApiClient {
    async fn check_health(&self) -> Result<Health, ApiError> {
        self.get_json("/health").await
    }

    async fn fetch_data(&self) -> Result<Vec<f64>, ApiError> {
        let response: DataResponse = self.get_json("/data").await?;
        Ok(response.data)
    }

    async fn submit(&self, endpoint: &str, payload: Value) -> Result<Value, ApiError> {
        tracing::debug!(endpoint, "submitting form payload");

        let response = self
            .http
            .post(self.url(endpoint))
            .json(&payload)
            .send()
            .await
            .map_err(|e| ApiError::NetworkUnavailable(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::UnexpectedResponse(e.to_string()))?;

        if status.is_success() {
            return serde_json::from_str(&body).map_err(|e| {
                ApiError::UnexpectedResponse(format!("POST {endpoint}: undecodable body: {e}"))
            });
        }

        match decode_field_errors(&body) {
            Some(errors) => {
                tracing::warn!(endpoint, %status, "submission rejected by server");
                Err(ApiError::ValidationRejected(errors))
            }
            None => Err(ApiError::UnexpectedResponse(format!(
                "POST {endpoint} returned {status}"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn explicit_url_overrides_default() {
        // OUTREACH_API_URL would win, but it is not set under test.
        if std::env::var("OUTREACH_API_URL").is_err() {
            let client = ApiClient::new(Some("http://10.0.0.5:8000/api")).unwrap();
            assert_eq!(client.base_url(), "http://10.0.0.5:8000/api");
        }
    }

    #[test]
    fn no_config_falls_back_to_default() {
        if std::env::var("OUTREACH_API_URL").is_err() {
            let client = ApiClient::new(None).unwrap();
            assert_eq!(client.base_url(), DEFAULT_BASE_URL);
        }
    }

    #[test]
    fn url_joins_base_and_path() {
        if std::env::var("OUTREACH_API_URL").is_err() {
            let client = ApiClient::new(Some("http://localhost:8000/api")).unwrap();
            assert_eq!(
                client.url(endpoints::DONATIONS),
                "http://localhost:8000/api/donations/"
            );
        }
    }

    #[test]
    fn construction_succeeds_with_the_default_timeout() {
        assert!(ApiClient::new(None).is_ok());
    }

    #[test]
    fn data_response_decodes() {
        let parsed: DataResponse = serde_json::from_str(r#"{"data": [12.0, 300, 4500]}"#).unwrap();
        assert_eq!(parsed.data, vec![12.0, 300.0, 4500.0]);
    }
}
