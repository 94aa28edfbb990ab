//! Per-year regional snapshot: one row per country of a region.

use std::collections::HashMap;

use hd_core::{Country, Observation, SecondaryDataset};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::order::{RowMetrics, by_indicator_descending, retain_with_metrics};

/// One country's metrics for the selected year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct SnapshotRow {
    /// Display name from the entity directory.
    pub country: String,
    pub indicator_value: Option<f64>,
    pub happiness_score: Option<f64>,
}

impl RowMetrics for SnapshotRow {
    fn indicator_value(&self) -> Option<f64> {
        self.indicator_value
    }

    fn happiness_score(&self) -> Option<f64> {
        self.happiness_score
    }
}

struct Slot<'a> {
    id: &'a str,
    row: SnapshotRow,
}

/// Merge a region's observations and happiness scores for one `year`.
///
/// `entities` is the universe: aggregates are removed, every remaining
/// country seeds an empty row, and only seeded countries can receive data.
/// Observations are matched on `countryiso3code`; unmatched ones are
/// dropped. Rows with neither metric are removed and the rest are ordered
/// by indicator value, largest first, with missing values ranked as zero.
#[must_use]
pub fn reconcile_entity_snapshot(
    entities: &[Country],
    observations: &[Observation],
    secondary: &SecondaryDataset,
    year: &str,
) -> Vec<SnapshotRow> {
    let mut slots: Vec<Slot<'_>> = Vec::with_capacity(entities.len());
    let mut index: HashMap<&str, usize> = HashMap::with_capacity(entities.len());

    for country in entities.iter().filter(|country| !country.is_aggregate()) {
        let row = SnapshotRow {
            country: country.name.clone(),
            indicator_value: None,
            happiness_score: None,
        };
        match index.get(country.id.as_str()) {
            Some(&at) => slots[at].row = row,
            None => {
                index.insert(country.id.as_str(), slots.len());
                slots.push(Slot {
                    id: country.id.as_str(),
                    row,
                });
            }
        }
    }

    let mut unmatched = 0usize;
    for observation in observations {
        let Some(value) = observation.value else {
            continue;
        };
        if observation.countryiso3code.is_empty() {
            continue;
        }
        match index.get(observation.countryiso3code.as_str()) {
            Some(&at) => slots[at].row.indicator_value = Some(value),
            None => unmatched += 1,
        }
    }

    for slot in &mut slots {
        if let Some(score) = secondary.score_for(slot.id, year) {
            slot.row.happiness_score = Some(score);
        }
    }

    tracing::debug!(
        universe = slots.len(),
        observations = observations.len(),
        unmatched,
        year,
        "merged regional snapshot"
    );
    tracing::trace!(
        rows = ?slots.iter().map(|slot| (slot.id, &slot.row)).collect::<Vec<_>>(),
        "snapshot before filtering"
    );

    let mut rows: Vec<SnapshotRow> =
        retain_with_metrics(slots.into_iter().map(|slot| slot.row)).collect();
    rows.sort_by(by_indicator_descending);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use hd_core::entities::GroupRef;
    use hd_core::ScorePoint;
    use pretty_assertions::assert_eq;

    fn country(id: &str, name: &str) -> Country {
        Country {
            id: id.into(),
            iso2_code: String::new(),
            name: name.into(),
            region: GroupRef {
                id: "ECS".into(),
                iso2code: "Z7".into(),
                value: "Europe & Central Asia".into(),
            },
        }
    }

    fn aggregate(id: &str, name: &str) -> Country {
        Country {
            region: GroupRef {
                id: "NA".into(),
                iso2code: "NA".into(),
                value: "Aggregates".into(),
            },
            ..country(id, name)
        }
    }

    fn obs(iso3: &str, value: Option<f64>) -> Observation {
        Observation::new(iso3, "2021", value)
    }

    fn names(rows: &[SnapshotRow]) -> Vec<&str> {
        rows.iter().map(|row| row.country.as_str()).collect()
    }

    #[test]
    fn identifiers_outside_universe_never_produce_rows() {
        let rows = reconcile_entity_snapshot(
            &[country("FRA", "France")],
            &[obs("FRA", Some(1.0)), obs("XYZ", Some(99.0))],
            &SecondaryDataset::default(),
            "2021",
        );
        assert_eq!(names(&rows), vec!["France"]);
    }

    #[test]
    fn entities_without_any_metric_are_dropped() {
        let secondary = SecondaryDataset::from_series([("BBB", vec![ScorePoint::new(2021, 6.0)])]);
        let rows = reconcile_entity_snapshot(
            &[country("AAA", "A"), country("BBB", "B"), country("CCC", "C")],
            &[obs("AAA", Some(10.0)), obs("CCC", None)],
            &secondary,
            "2021",
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(names(&rows), vec!["A", "B"]);
    }

    #[test]
    fn absent_indicator_sorts_as_zero() {
        let secondary = SecondaryDataset::from_series([("BBB", vec![ScorePoint::new(2021, 6.0)])]);
        let rows = reconcile_entity_snapshot(
            &[country("AAA", "A"), country("BBB", "B"), country("CCC", "C")],
            &[obs("AAA", Some(10.0)), obs("CCC", Some(5.0))],
            &secondary,
            "2021",
        );

        assert_eq!(names(&rows), vec!["A", "C", "B"]);
        assert_eq!(rows[2].indicator_value, None);
        assert_eq!(rows[2].happiness_score, Some(6.0));
    }

    #[test]
    fn aggregates_are_excluded_from_universe() {
        let rows = reconcile_entity_snapshot(
            &[country("DEU", "Germany"), aggregate("EUU", "European Union")],
            &[obs("DEU", Some(48_000.0)), obs("EUU", Some(38_000.0))],
            &SecondaryDataset::default(),
            "2021",
        );
        assert_eq!(names(&rows), vec!["Germany"]);
    }

    #[test]
    fn score_matches_selected_year_only() {
        let secondary = SecondaryDataset::from_series([(
            "FIN",
            vec![ScorePoint::new(2020, 7.81), ScorePoint::new(2021, 7.84)],
        )]);
        let rows = reconcile_entity_snapshot(
            &[country("FIN", "Finland")],
            &[],
            &secondary,
            "2020",
        );
        assert_eq!(
            rows,
            vec![SnapshotRow {
                country: "Finland".into(),
                indicator_value: None,
                happiness_score: Some(7.81),
            }]
        );
    }

    #[test]
    fn observations_without_iso3_are_ignored() {
        let rows = reconcile_entity_snapshot(
            &[country("FRA", "France")],
            &[obs("", Some(5.0))],
            &SecondaryDataset::default(),
            "2021",
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn empty_universe_yields_no_rows() {
        let rows = reconcile_entity_snapshot(
            &[],
            &[obs("FRA", Some(1.0))],
            &SecondaryDataset::bundled().unwrap(),
            "2021",
        );
        assert!(rows.is_empty());
    }

    #[test]
    fn ties_keep_universe_order() {
        let rows = reconcile_entity_snapshot(
            &[country("AAA", "A"), country("BBB", "B")],
            &[obs("AAA", Some(1.0)), obs("BBB", Some(1.0))],
            &SecondaryDataset::default(),
            "2021",
        );
        assert_eq!(names(&rows), vec!["A", "B"]);
    }
}
