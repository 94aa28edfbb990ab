use anyhow::Context;
use hd_config::HappyConfig;

/// Load `.env` from the working directory, then the layered configuration.
pub fn load_config() -> anyhow::Result<HappyConfig> {
    HappyConfig::load_with_dotenv().context("failed to load happydata configuration")
}
