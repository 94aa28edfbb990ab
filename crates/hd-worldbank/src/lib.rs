//! # hd-worldbank
//!
//! HTTP client for the World Bank v2 API (`https://api.worldbank.org/v2`).
//!
//! Covers the two collaborators reconciliation needs:
//! - the entity directory (`/country`, `/region`);
//! - indicator observations (`/country/{ids}/indicator/{code}`), including
//!   the chunked regional fetch that splits long country lists into
//!   concurrent batches.
//!
//! No caching and no pagination: each request asks for one page of a fixed
//! size and logs a warning when the API reports more.

pub mod chunked;
pub mod directory;
pub mod envelope;
pub mod indicators;
pub mod source;

mod error;
mod http;

pub use chunked::{chunk_ids, fetch_chunked, region_observations};
pub use error::WorldBankError;
pub use indicators::DatePeriod;
pub use source::{EntityDirectory, ObservationSource};

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::http::check_response;

/// Default API root.
pub const DEFAULT_BASE_URL: &str = "https://api.worldbank.org/v2";

/// Request parameters shared by every call the client makes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub base_url: String,
    pub user_agent: String,
    pub timeout: Duration,
    /// Page size for `/country` and `/region` listings.
    pub directory_page_size: u32,
    /// Page size for a single country's date-range series.
    pub series_page_size: u32,
    /// Page size for each regional batch request.
    pub snapshot_page_size: u32,
    /// Maximum number of country ids per regional batch request.
    pub chunk_size: usize,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: String::from("happydata/0.1"),
            timeout: Duration::from_secs(10),
            directory_page_size: 300,
            series_page_size: 100,
            snapshot_page_size: 500,
            chunk_size: 30,
        }
    }
}

/// HTTP client for the World Bank API.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct WorldBankClient {
    http: reqwest::Client,
    settings: ClientSettings,
}

impl WorldBankClient {
    /// Build a client with the given settings.
    ///
    /// # Errors
    ///
    /// Returns [`WorldBankError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(settings: ClientSettings) -> Result<Self, WorldBankError> {
        let http = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .timeout(settings.timeout)
            .build()?;
        Ok(Self { http, settings })
    }

    #[must_use]
    pub const fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.settings.base_url.trim_end_matches('/'), path)
    }

    /// GET `url` and decode the records of its envelope.
    async fn fetch_records<T: DeserializeOwned>(&self, url: &str) -> Result<Vec<T>, WorldBankError> {
        let result = async {
            let resp = check_response(self.http.get(url).send().await?).await?;
            let body: serde_json::Value = resp.json().await?;
            envelope::decode::<T>(body)
        }
        .await;

        let page = result.inspect_err(|e| tracing::warn!(url, %e, "World Bank request failed"))?;

        if let Some(meta) = page.meta.filter(envelope::PageMeta::is_truncated) {
            tracing::warn!(
                url,
                pages = meta.pages,
                total = meta.total,
                per_page = meta.per_page,
                "response spans several pages; only the first page was fetched"
            );
        }
        tracing::debug!(url, records = page.records.len(), "fetched World Bank records");
        Ok(page.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_match_api_limits() {
        let settings = ClientSettings::default();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.chunk_size, 30);
        assert_eq!(settings.snapshot_page_size, 500);
    }

    #[test]
    fn endpoint_joins_without_double_slash() {
        let client = WorldBankClient::new(ClientSettings {
            base_url: "http://localhost:8080/v2/".into(),
            ..ClientSettings::default()
        })
        .unwrap();
        assert_eq!(client.endpoint("region"), "http://localhost:8080/v2/region");
    }

    #[tokio::test]
    async fn unreachable_host_is_http_error() {
        let client = WorldBankClient::new(ClientSettings {
            base_url: "http://127.0.0.1:1".into(),
            timeout: Duration::from_secs(2),
            ..ClientSettings::default()
        })
        .unwrap();
        let err = client.list_countries().await.unwrap_err();
        assert!(matches!(err, WorldBankError::Http(_)));
    }
}
