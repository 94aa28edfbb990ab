//! Per-country time series: indicator values and happiness scores by year.

use std::collections::HashMap;

use hd_core::{Observation, ScorePoint};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::order::{RowMetrics, compare_years};

/// One year of a country's series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SeriesRow {
    pub year: String,
    pub value: Option<f64>,
    pub happiness_score: Option<f64>,
}

impl SeriesRow {
    fn empty(year: String) -> Self {
        Self {
            year,
            value: None,
            happiness_score: None,
        }
    }
}

impl RowMetrics for SeriesRow {
    fn indicator_value(&self) -> Option<f64> {
        self.value
    }

    fn happiness_score(&self) -> Option<f64> {
        self.happiness_score
    }
}

/// Merge a country's observations with its happiness series.
///
/// Observations without a value are skipped. Each source fills its own
/// field of the row for that year, so the result does not depend on which
/// source is merged first. Rows come back in ascending numeric year order.
///
/// Every row that has a year is kept, including rows where neither metric
/// is present; [`reconcile_entity_snapshot`](crate::reconcile_entity_snapshot)
/// drops such rows.
#[must_use]
pub fn reconcile_entity_series(
    observations: &[Observation],
    secondary: &[ScorePoint],
) -> Vec<SeriesRow> {
    let mut rows: HashMap<String, SeriesRow> = HashMap::new();

    for observation in observations {
        if let Some(value) = observation.value {
            row_for(&mut rows, observation.date.clone()).value = Some(value);
        }
    }

    for point in secondary {
        row_for(&mut rows, point.year.to_string()).happiness_score = Some(point.score);
    }

    let mut merged: Vec<SeriesRow> = rows
        .into_values()
        .filter(|row| !row.year.is_empty())
        .collect();
    merged.sort_by(|a, b| compare_years(&a.year, &b.year));

    tracing::debug!(
        observations = observations.len(),
        scores = secondary.len(),
        rows = merged.len(),
        "reconciled entity series"
    );
    merged
}

fn row_for(rows: &mut HashMap<String, SeriesRow>, year: String) -> &mut SeriesRow {
    rows.entry(year.clone())
        .or_insert_with(|| SeriesRow::empty(year))
}
