//! World Bank API connection settings.

use serde::{Deserialize, Serialize};

/// Default API root.
fn default_base_url() -> String {
    String::from("https://api.worldbank.org/v2")
}

fn default_user_agent() -> String {
    String::from("happydata/0.1")
}

const fn default_timeout_secs() -> u64 {
    10
}

const fn default_directory_page_size() -> u32 {
    300
}

const fn default_series_page_size() -> u32 {
    100
}

const fn default_snapshot_page_size() -> u32 {
    500
}

/// Countries per regional batch; longer id lists overflow the request URL.
const fn default_chunk_size() -> usize {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Page size for country and region listings.
    #[serde(default = "default_directory_page_size")]
    pub directory_page_size: u32,

    /// Page size for one country's date-range series.
    #[serde(default = "default_series_page_size")]
    pub series_page_size: u32,

    /// Page size for each regional batch.
    #[serde(default = "default_snapshot_page_size")]
    pub snapshot_page_size: u32,

    /// Maximum country ids per regional batch.
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            directory_page_size: default_directory_page_size(),
            series_page_size: default_series_page_size(),
            snapshot_page_size: default_snapshot_page_size(),
            chunk_size: default_chunk_size(),
        }
    }
}
