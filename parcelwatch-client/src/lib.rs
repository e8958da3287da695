//! Parcelwatch HTTP Client
//!
//! A thin, typed client for the PostNord track-and-trace REST endpoint.
//!
//! One GET per call. The raw JSON body is returned untouched so that shape
//! validation in `parcelwatch-core` decides what to trust; this crate only
//! distinguishes transport-level success from failure.
//!
//! # Example
//!
//! ```no_run
//! use parcelwatch_client::{TrackingApi, TrackingClient};
//!
//! #[tokio::main]
//! async fn main() -> parcelwatch_client::Result<()> {
//!     let client = TrackingClient::new("my-api-key");
//!     let payload = client.fetch_tracking("ABC123", "en").await?;
//!     println!("{payload}");
//!     Ok(())
//! }
//! ```

pub mod error;

pub use error::{ClientError, Result};

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::debug;

/// Production endpoint for shipment lookups by identifier.
pub const DEFAULT_BASE_URL: &str =
    "https://api2.postnord.com/rest/shipment/v1/trackandtrace/findByIdentifier.json";

/// Interface the poller uses to obtain tracking payloads.
///
/// Fronts [`TrackingClient`] so the polling loop can be exercised against a
/// stub without any HTTP.
#[async_trait]
pub trait TrackingApi: Send + Sync {
    /// Fetches the current tracking payload for a shipment.
    ///
    /// # Arguments
    /// * `shipment_id` - Opaque shipment identifier
    /// * `locale` - Language code for event descriptions (e.g. "en")
    async fn fetch_tracking(&self, shipment_id: &str, locale: &str) -> Result<Value>;
}

/// HTTP client for the track-and-trace API
#[derive(Debug, Clone)]
pub struct TrackingClient {
    /// Base URL of the lookup endpoint
    base_url: String,
    /// Opaque API credential, passed through as a query parameter
    api_key: String,
    /// HTTP client instance
    client: Client,
}

impl TrackingClient {
    /// Create a new tracking client against the production endpoint
    ///
    /// # Arguments
    /// * `api_key` - API credential token; may be empty when the endpoint
    ///   does not require one
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    /// Create a tracking client against a custom endpoint
    ///
    /// Mainly useful for pointing the client at a local test server.
    pub fn with_base_url(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            client: Client::new(),
        }
    }

    /// Get the base URL of the tracking endpoint
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds the lookup URL for a shipment and locale.
    fn request_url(&self, shipment_id: &str, locale: &str) -> String {
        format!(
            "{}?id={}&locale={}&apikey={}",
            self.base_url, shipment_id, locale, self.api_key
        )
    }
}

#[async_trait]
impl TrackingApi for TrackingClient {
    async fn fetch_tracking(&self, shipment_id: &str, locale: &str) -> Result<Value> {
        let url = self.request_url(shipment_id, locale);

        debug!(shipment_id, locale, "Fetching tracking payload");

        let response = self.client.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::api(status.as_u16(), message));
        }

        let text = response.text().await?;

        // A body that is not JSON at all flows through as a JSON string, so
        // shape validation reports it as malformed instead of killing the
        // poller.
        Ok(serde_json::from_str(&text).unwrap_or(Value::String(text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_uses_production_endpoint() {
        let client = TrackingClient::new("key");
        assert_eq!(client.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let client = TrackingClient::with_base_url("http://localhost:8080/", "key");
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn test_request_url_carries_id_locale_and_key() {
        let client = TrackingClient::with_base_url("http://localhost:8080", "secret");
        assert_eq!(
            client.request_url("ABC123", "sv"),
            "http://localhost:8080?id=ABC123&locale=sv&apikey=secret"
        );
    }

    #[test]
    fn test_request_url_with_empty_key() {
        let client = TrackingClient::with_base_url("http://localhost:8080", "");
        assert_eq!(
            client.request_url("ABC123", "en"),
            "http://localhost:8080?id=ABC123&locale=en&apikey="
        );
    }
}
