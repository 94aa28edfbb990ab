//! Bundled secondary dataset: happiness scores keyed by country.
//!
//! The table ships as JSON inside the binary (`data/happiness.json`) and can
//! be replaced at runtime with a file of the same shape:
//!
//! ```json
//! { "FIN": [{ "year": 2018, "score": 7.63 }, { "year": 2019, "score": 7.77 }] }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entities::ScorePoint;
use crate::errors::CoreError;

const BUNDLED_HAPPINESS: &str = include_str!("../data/happiness.json");

/// Happiness scores per three-letter country id, each an ordered series.
///
/// A missing country or year means "no score", never zero.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SecondaryDataset {
    series: BTreeMap<String, Vec<ScorePoint>>,
}

impl SecondaryDataset {
    /// The dataset compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Dataset`] if the bundled JSON is malformed.
    pub fn bundled() -> Result<Self, CoreError> {
        Self::from_json_str(BUNDLED_HAPPINESS)
    }

    /// Parse a dataset from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::Dataset`] if `json` does not match the dataset shape.
    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let mut dataset: Self = serde_json::from_str(json)?;
        for points in dataset.series.values_mut() {
            points.sort_by_key(|point| point.year);
        }
        Ok(dataset)
    }

    /// Load a dataset file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::DatasetIo`] if the file cannot be read, or
    /// [`CoreError::Dataset`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, CoreError> {
        let raw = std::fs::read_to_string(path).map_err(|source| CoreError::DatasetIo {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_json_str(&raw)?;
        tracing::debug!(path = %path.display(), countries = dataset.len(), "loaded secondary dataset");
        Ok(dataset)
    }

    /// Build a dataset from in-memory series.
    pub fn from_series<I, K>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, Vec<ScorePoint>)>,
        K: Into<String>,
    {
        let mut series = BTreeMap::new();
        for (id, mut points) in entries {
            points.sort_by_key(|point| point.year);
            series.insert(id.into(), points);
        }
        Self { series }
    }

    /// Score series for a country, empty when the country is not covered.
    #[must_use]
    pub fn series(&self, country_id: &str) -> &[ScorePoint] {
        self.series.get(country_id).map_or(&[], Vec::as_slice)
    }

    /// Score for a country in the year spelled by `year` (for example `"2020"`).
    #[must_use]
    pub fn score_for(&self, country_id: &str, year: &str) -> Option<f64> {
        let year = year.trim();
        self.series(country_id)
            .iter()
            .find(|point| point.year.to_string() == year)
            .map(|point| point.score)
    }

    pub fn country_ids(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }
}
