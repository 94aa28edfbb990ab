use std::time::Duration;

use anyhow::Context;
use hd_config::HappyConfig;
use hd_core::{Catalog, SecondaryDataset};
use hd_worldbank::{ClientSettings, WorldBankClient};

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: HappyConfig,
    pub catalog: Catalog,
    pub dataset: SecondaryDataset,
    pub client: WorldBankClient,
}

impl AppContext {
    /// Build the API client and load the happiness dataset.
    pub fn init(config: HappyConfig) -> anyhow::Result<Self> {
        let client = WorldBankClient::new(client_settings(&config))
            .context("failed to build World Bank client")?;

        let dataset = match config.dataset.override_path() {
            Some(path) => SecondaryDataset::load(&path)
                .with_context(|| format!("failed to load happiness dataset from {}", path.display()))?,
            None => SecondaryDataset::bundled().context("bundled happiness dataset is invalid")?,
        };

        Ok(Self {
            config,
            catalog: Catalog::builtin(),
            dataset,
            client,
        })
    }
}

fn client_settings(config: &HappyConfig) -> ClientSettings {
    let api = &config.api;
    ClientSettings {
        base_url: api.base_url.clone(),
        user_agent: api.user_agent.clone(),
        timeout: Duration::from_secs(api.timeout_secs),
        directory_page_size: api.directory_page_size,
        series_page_size: api.series_page_size,
        snapshot_page_size: api.snapshot_page_size,
        chunk_size: api.chunk_size,
    }
}
