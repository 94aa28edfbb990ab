//! Predefined indicators, regions, and year choices.
//!
//! The catalog is an explicit value handed to views and commands rather than
//! a set of globals, so callers can substitute their own tables in tests.

use serde::{Deserialize, Serialize};

use crate::entities::{Group, Indicator};
use crate::errors::CoreError;

/// Identifier used for the bundled happiness metric in output labels.
pub const HAPPINESS_INDICATOR_ID: &str = "WHR_HAPPINESS_SCORE";

/// Display name of the bundled happiness metric.
pub const HAPPINESS_INDICATOR_NAME: &str = "Happiness Score";

/// Number of selectable years in the regional view.
pub const YEAR_CHOICES: i32 = 25;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub indicators: Vec<Indicator>,
    pub groups: Vec<Group>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

impl Catalog {
    /// The indicator and region tables shipped with HappyData.
    ///
    /// Region codes are the current World Bank codes; the legacy `EAS`/`ECS`
    /// family is rejected by the API.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            indicators: vec![
                Indicator::new("SP.POP.TOTL", "Population, total"),
                Indicator::new("NY.GDP.PCAP.CD", "GDP per capita (current US$)"),
                Indicator::new("SP.DYN.LE00.IN", "Life expectancy at birth, total (years)"),
                Indicator::new("SE.PRM.ENRR", "School enrollment, primary (% gross)"),
                Indicator::new(
                    "SH.H2O.BASW.ZS",
                    "People using basic drinking water services (% of population)",
                ),
                Indicator::new(
                    "EG.USE.ELEC.KH.PC",
                    "Electric power consumption (kWh per capita)",
                ),
            ],
            groups: vec![
                Group::new("SSF", "Sub-Saharan Africa"),
                Group::new("EAP", "East Asia & Pacific"),
                Group::new("ECA", "Europe & Central Asia"),
                Group::new("LCR", "Latin America & Caribbean"),
                Group::new("MNA", "Middle East & North Africa"),
                Group::new("NAC", "North America"),
                Group::new("SAS", "South Asia"),
            ],
        }
    }

    #[must_use]
    pub fn indicator(&self, id: &str) -> Option<&Indicator> {
        self.indicators.iter().find(|indicator| indicator.id == id)
    }

    #[must_use]
    pub fn group(&self, code: &str) -> Option<&Group> {
        self.groups.iter().find(|group| group.code == code)
    }

    /// Look up an indicator, failing for codes outside the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownSelection`] if `id` is not in the catalog.
    pub fn require_indicator(&self, id: &str) -> Result<&Indicator, CoreError> {
        self.indicator(id).ok_or_else(|| CoreError::UnknownSelection {
            kind: "indicator",
            id: id.to_string(),
        })
    }

    /// Look up a region, failing for codes outside the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownSelection`] if `code` is not in the catalog.
    pub fn require_group(&self, code: &str) -> Result<&Group, CoreError> {
        self.group(code).ok_or_else(|| CoreError::UnknownSelection {
            kind: "region",
            id: code.to_string(),
        })
    }
}

/// Years offered by the regional view: the [`YEAR_CHOICES`] years before
/// `current_year`, newest first.
#[must_use]
pub fn year_choices(current_year: i32) -> Vec<i32> {
    (1..=YEAR_CHOICES).map(|back| current_year - back).collect()
}

/// Default regional-view year: the second entry of [`year_choices`], since
/// the most recent year is rarely populated yet.
#[must_use]
pub const fn default_year(current_year: i32) -> i32 {
    current_year - 2
}

/// Current calendar year in UTC.
#[must_use]
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Utc::now().year()
}
