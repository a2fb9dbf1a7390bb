//! Backend communication: REST client, error taxonomy, and the mockable
//! trait seam the coordinator is tested against.

pub mod client;
pub mod error;
pub mod traits;

pub use client::{endpoints, ApiClient};
pub use error::{ApiError, FieldErrors};
pub use traits::ApiClientTrait;

#[cfg(test)]
pub use traits::MockApiClientTrait;

use serde::Deserialize;

/// `GET /health` body
#[derive(Debug, Clone, Deserialize)]
pub struct Health {
    pub status: String,
}
