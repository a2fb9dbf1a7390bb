//! Trait abstraction for the backend client to enable mocking in tests

use super::error::ApiError;
use super::Health;
use async_trait::async_trait;
use serde_json::Value;

/// Trait for backend REST operations, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClientTrait: Send + Sync {
    /// Check whether the backend is reachable (`GET /health`)
    async fn check_health(&self) -> Result<Health, ApiError>;

    /// Fetch the site statistics series (`GET /data`)
    async fn fetch_data(&self) -> Result<Vec<f64>, ApiError>;

    /// Post a JSON payload to a form endpoint and return the response body
    async fn submit(&self, endpoint: &str, payload: Value) -> Result<Value, ApiError>;
}
