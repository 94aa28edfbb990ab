//! One region's indicator values and happiness scores for a single year.

use hd_core::{RequestToken, SecondaryDataset};
use hd_reconcile::{SnapshotRow, reconcile_entity_snapshot};
use hd_worldbank::{ClientSettings, EntityDirectory, ObservationSource, WorldBankError, region_observations};

use super::{REGION_FAILURE, ViewState};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotSelection {
    pub region: String,
    pub indicator: String,
    pub year: i32,
}

#[derive(Debug, Default)]
pub struct SnapshotView {
    selection: Option<SnapshotSelection>,
    rows: ViewState<Vec<SnapshotRow>>,
}

impl SnapshotView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch to `selection` and start loading its snapshot.
    pub fn select(&mut self, selection: SnapshotSelection) -> RequestToken {
        self.selection = Some(selection);
        self.rows.begin()
    }

    pub fn apply(
        &mut self,
        token: RequestToken,
        result: Result<Vec<SnapshotRow>, WorldBankError>,
    ) -> bool {
        self.rows.settle(token, result, || REGION_FAILURE.to_string())
    }

    #[must_use]
    pub const fn selection(&self) -> Option<&SnapshotSelection> {
        self.selection.as_ref()
    }

    #[must_use]
    pub const fn rows(&self) -> &ViewState<Vec<SnapshotRow>> {
        &self.rows
    }

    #[must_use]
    pub fn into_rows(self) -> ViewState<Vec<SnapshotRow>> {
        self.rows
    }
}

/// Fetch the region's observations and member list together, then rank.
///
/// Both fetches run concurrently and either failing fails the snapshot.
///
/// # Errors
///
/// Returns the first [`WorldBankError`] from either fetch.
pub async fn load_snapshot<S>(
    source: &S,
    dataset: &SecondaryDataset,
    selection: &SnapshotSelection,
    settings: &ClientSettings,
) -> Result<Vec<SnapshotRow>, WorldBankError>
where
    S: EntityDirectory + ObservationSource + Clone + Send + Sync + 'static,
{
    let year = selection.year.to_string();
    let (observations, countries) = tokio::try_join!(
        region_observations(
            source,
            &selection.region,
            &selection.indicator,
            &year,
            settings.chunk_size,
            settings.snapshot_page_size,
        ),
        source.countries_in_region(&selection.region),
    )?;

    Ok(reconcile_entity_snapshot(
        &countries,
        &observations,
        dataset,
        &year,
    ))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use hd_core::entities::GroupRef;
    use hd_core::{Country, Observation, ScorePoint};
    use hd_worldbank::DatePeriod;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::view::ViewStatus;

    #[derive(Clone, Default)]
    struct FakeRegion {
        countries: Vec<Country>,
        values: Vec<(String, f64)>,
        fail_observations: bool,
        directory_calls: Arc<AtomicUsize>,
    }

    impl EntityDirectory for FakeRegion {
        async fn all_countries(&self) -> Result<Vec<Country>, WorldBankError> {
            Ok(self.countries.clone())
        }

        async fn countries_in_region(&self, _region: &str) -> Result<Vec<Country>, WorldBankError> {
            self.directory_calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.countries.clone())
        }
    }

    impl ObservationSource for FakeRegion {
        async fn observations(
            &self,
            country_ids: &[String],
            _indicator: &str,
            period: &DatePeriod,
            _per_page: u32,
        ) -> Result<Vec<Observation>, WorldBankError> {
            if self.fail_observations {
                return Err(WorldBankError::Api {
                    status: 502,
                    message: "bad gateway".into(),
                });
            }
            Ok(self
                .values
                .iter()
                .filter(|(id, _)| country_ids.contains(id))
                .map(|(id, value)| Observation::new(id.clone(), period.to_string(), Some(*value)))
                .collect())
        }
    }

    fn country(id: &str, region_iso2: &str) -> Country {
        Country {
            id: id.to_string(),
            iso2_code: String::new(),
            name: format!("{id} name"),
            region: GroupRef {
                iso2code: region_iso2.to_string(),
                ..GroupRef::default()
            },
        }
    }

    fn selection() -> SnapshotSelection {
        SnapshotSelection {
            region: "NAC".into(),
            indicator: "NY.GDP.PCAP.CD".into(),
            year: 2021,
        }
    }

    #[tokio::test]
    async fn snapshot_ranks_members_and_drops_aggregates() {
        let source = FakeRegion {
            countries: vec![
                country("CAN", "XU"),
                country("USA", "XU"),
                country("BMU", "XU"),
                country("NAC", "NA"),
            ],
            values: vec![("CAN".into(), 52_000.0), ("USA".into(), 70_000.0), ("NAC".into(), 1.0)],
            ..FakeRegion::default()
        };
        let dataset = SecondaryDataset::from_series([
            ("USA", vec![ScorePoint::new(2021, 6.9)]),
            ("BMU", vec![ScorePoint::new(2020, 7.0)]),
        ]);

        let rows = load_snapshot(&source, &dataset, &selection(), &ClientSettings::default())
            .await
            .unwrap();

        let order: Vec<&str> = rows.iter().map(|row| row.country.as_str()).collect();
        assert_eq!(order, vec!["USA name", "CAN name"]);
        assert_eq!(rows[0].happiness_score, Some(6.9));
        assert_eq!(rows[1].happiness_score, None);
        assert_eq!(source.directory_calls.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn observation_failure_fails_snapshot() {
        let source = FakeRegion {
            countries: vec![country("CAN", "XU")],
            fail_observations: true,
            ..FakeRegion::default()
        };

        let err = load_snapshot(
            &source,
            &SecondaryDataset::default(),
            &selection(),
            &ClientSettings::default(),
        )
        .await
        .unwrap_err();
        assert!(matches!(err, WorldBankError::Api { status: 502, .. }));
    }

    #[tokio::test]
    async fn failed_snapshot_surfaces_region_message() {
        let source = FakeRegion {
            countries: vec![country("CAN", "XU")],
            fail_observations: true,
            ..FakeRegion::default()
        };
        let dataset = SecondaryDataset::default();
        let mut view = SnapshotView::new();

        let token = view.select(selection());
        let result = load_snapshot(&source, &dataset, &selection(), &ClientSettings::default()).await;
        assert!(view.apply(token, result));

        assert_eq!(
            view.rows().status(),
            &ViewStatus::Failed(REGION_FAILURE.to_string())
        );
    }

    #[test]
    fn superseded_snapshot_is_ignored() {
        let mut view = SnapshotView::new();
        let old = view.select(selection());
        let current = view.select(SnapshotSelection {
            year: 2020,
            ..selection()
        });

        assert!(!view.apply(old, Ok(Vec::new())));
        assert_eq!(view.rows().status(), &ViewStatus::Loading);
        assert!(view.apply(current, Ok(Vec::new())));
        assert_eq!(view.selection().map(|s| s.year), Some(2020));
    }
}
