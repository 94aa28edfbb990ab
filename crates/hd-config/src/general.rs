//! Default selections for the views.

use serde::{Deserialize, Serialize};

fn default_country() -> String {
    String::from("USA")
}

fn default_indicator() -> String {
    String::from("NY.GDP.PCAP.CD")
}

fn default_region() -> String {
    String::from("ECA")
}

const fn default_series_start() -> i32 {
    2000
}

const fn default_series_end() -> i32 {
    2023
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Country preselected in the series view (three-letter id).
    #[serde(default = "default_country")]
    pub default_country: String,

    /// Indicator preselected in both views.
    #[serde(default = "default_indicator")]
    pub default_indicator: String,

    /// Region preselected in the snapshot view.
    #[serde(default = "default_region")]
    pub default_region: String,

    /// First year of the series view's date range.
    #[serde(default = "default_series_start")]
    pub series_start: i32,

    /// Last year of the series view's date range.
    #[serde(default = "default_series_end")]
    pub series_end: i32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_country: default_country(),
            default_indicator: default_indicator(),
            default_region: default_region(),
            series_start: default_series_start(),
            series_end: default_series_end(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = GeneralConfig::default();
        assert_eq!(config.default_country, "USA");
        assert_eq!(config.default_indicator, "NY.GDP.PCAP.CD");
        assert_eq!(config.default_region, "ECA");
        assert_eq!(config.series_start, 2000);
        assert_eq!(config.series_end, 2023);
    }
}
