//! Entity records exchanged with the World Bank API and the bundled dataset.
//!
//! Field names follow the World Bank JSON payloads (`iso2Code`,
//! `countryiso3code`, `obs_status`) so records deserialize directly from the
//! API envelope without an intermediate mapping layer.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Region `iso2code` the World Bank directory uses to mark non-geographic
/// aggregates (income groups, "World", regional totals).
pub const AGGREGATE_REGION_CODE: &str = "NA";

/// Reference to a directory grouping embedded in a country record.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GroupRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub iso2code: String,
    #[serde(default)]
    pub value: String,
}

/// A country (or aggregate) from the World Bank entity directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Country {
    /// Three-letter identifier, the join key for observations and scores.
    pub id: String,
    #[serde(rename = "iso2Code", default)]
    pub iso2_code: String,
    pub name: String,
    #[serde(default)]
    pub region: GroupRef,
}

impl Country {
    /// Whether the directory marks this record as a non-geographic aggregate.
    #[must_use]
    pub fn is_aggregate(&self) -> bool {
        self.region.iso2code == AGGREGATE_REGION_CODE
    }
}

/// A region grouping selectable in the regional view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Group {
    pub code: String,
    pub name: String,
}

impl Group {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// A statistical indicator, identified by its World Bank code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Indicator {
    pub id: String,
    pub name: String,
}

impl Indicator {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// `{ id, value }` pair the data API uses for the country and indicator of
/// an observation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LabelRef {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub value: String,
}

/// One indicator data point for one country and one period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Observation {
    #[serde(default)]
    pub indicator: LabelRef,
    #[serde(default)]
    pub country: LabelRef,
    #[serde(default)]
    pub countryiso3code: String,
    /// Period of the observation; a four-digit year for annual indicators.
    pub date: String,
    /// `None` when the source has no value for this country and period.
    pub value: Option<f64>,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub obs_status: String,
    #[serde(default)]
    pub decimal: i64,
}

impl Observation {
    /// Minimal observation carrying only the fields reconciliation reads.
    pub fn new(iso3: impl Into<String>, date: impl Into<String>, value: Option<f64>) -> Self {
        Self {
            indicator: LabelRef::default(),
            country: LabelRef::default(),
            countryiso3code: iso3.into(),
            date: date.into(),
            value,
            unit: String::new(),
            obs_status: String::new(),
            decimal: 0,
        }
    }
}

/// A bundled happiness score for one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScorePoint {
    pub year: i32,
    pub score: f64,
}

impl ScorePoint {
    #[must_use]
    pub const fn new(year: i32, score: f64) -> Self {
        Self { year, score }
    }
}
