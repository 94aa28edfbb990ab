//! One country's indicator series, year by year.

use hd_core::{Country, RequestToken, SecondaryDataset};
use hd_reconcile::{SeriesRow, reconcile_entity_series};
use hd_worldbank::{DatePeriod, EntityDirectory, ObservationSource, WorldBankError};

use super::{COUNTRIES_FAILURE, ViewState, series_failure};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeriesSelection {
    pub country: String,
    pub indicator: String,
    pub indicator_name: String,
    pub start: i32,
    pub end: i32,
}

impl SeriesSelection {
    #[must_use]
    pub fn period(&self) -> DatePeriod {
        DatePeriod::range(self.start.to_string(), self.end.to_string())
    }
}

/// Country picker plus the series for the selected country and indicator.
#[derive(Debug, Default)]
pub struct SeriesView {
    selection: Option<SeriesSelection>,
    directory: ViewState<Vec<Country>>,
    rows: ViewState<Vec<SeriesRow>>,
}

impl SeriesView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start loading the country directory.
    pub fn open(&mut self) -> RequestToken {
        self.directory.begin()
    }

    /// Switch to `selection` and start loading its series.
    pub fn select(&mut self, selection: SeriesSelection) -> RequestToken {
        self.selection = Some(selection);
        self.rows.begin()
    }

    pub fn apply_directory(
        &mut self,
        token: RequestToken,
        result: Result<Vec<Country>, WorldBankError>,
    ) -> bool {
        self.directory
            .settle(token, result, || COUNTRIES_FAILURE.to_string())
    }

    pub fn apply_series(
        &mut self,
        token: RequestToken,
        result: Result<Vec<SeriesRow>, WorldBankError>,
    ) -> bool {
        let name = self
            .selection
            .as_ref()
            .map(|selection| selection.indicator_name.clone())
            .unwrap_or_default();
        self.rows.settle(token, result, || series_failure(&name))
    }

    #[must_use]
    pub const fn selection(&self) -> Option<&SeriesSelection> {
        self.selection.as_ref()
    }

    #[must_use]
    pub const fn directory(&self) -> &ViewState<Vec<Country>> {
        &self.directory
    }

    #[must_use]
    pub const fn rows(&self) -> &ViewState<Vec<SeriesRow>> {
        &self.rows
    }

    /// Split into the directory and series states.
    #[must_use]
    pub fn into_parts(self) -> (ViewState<Vec<Country>>, ViewState<Vec<SeriesRow>>) {
        (self.directory, self.rows)
    }
}

/// Countries offered by the picker, aggregates already removed.
///
/// # Errors
///
/// Returns [`WorldBankError`] if the directory request fails.
pub async fn load_directory<S: EntityDirectory>(source: &S) -> Result<Vec<Country>, WorldBankError> {
    source.all_countries().await
}

/// Fetch the selected series and join it with the country's scores.
///
/// # Errors
///
/// Returns [`WorldBankError`] if the observation request fails.
pub async fn load_series<S: ObservationSource>(
    source: &S,
    dataset: &SecondaryDataset,
    selection: &SeriesSelection,
    per_page: u32,
) -> Result<Vec<SeriesRow>, WorldBankError> {
    let ids = [selection.country.clone()];
    let observations = source
        .observations(&ids, &selection.indicator, &selection.period(), per_page)
        .await?;
    Ok(reconcile_entity_series(
        &observations,
        dataset.series(&selection.country),
    ))
}

#[cfg(test)]
mod tests {
    use hd_core::{Observation, ScorePoint};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::view::ViewStatus;

    struct FixedSource(Vec<Observation>);

    impl ObservationSource for FixedSource {
        async fn observations(
            &self,
            country_ids: &[String],
            _indicator: &str,
            period: &DatePeriod,
            _per_page: u32,
        ) -> Result<Vec<Observation>, WorldBankError> {
            assert_eq!(country_ids, ["FIN".to_string()]);
            assert_eq!(period.to_string(), "2018:2020");
            Ok(self.0.clone())
        }
    }

    fn selection(country: &str) -> SeriesSelection {
        SeriesSelection {
            country: country.to_string(),
            indicator: "SP.POP.TOTL".to_string(),
            indicator_name: "Population, total".to_string(),
            start: 2018,
            end: 2020,
        }
    }

    #[tokio::test]
    async fn series_joins_observations_with_scores() {
        let source = FixedSource(vec![
            Observation::new("FIN", "2020", Some(5.5e6)),
            Observation::new("FIN", "2019", Some(5.4e6)),
            Observation::new("FIN", "2018", None),
        ]);
        let dataset = SecondaryDataset::from_series([(
            "FIN",
            vec![ScorePoint::new(2018, 7.6), ScorePoint::new(2020, 7.8)],
        )]);

        let rows = load_series(&source, &dataset, &selection("FIN"), 100).await.unwrap();

        let years: Vec<&str> = rows.iter().map(|row| row.year.as_str()).collect();
        assert_eq!(years, vec!["2018", "2019", "2020"]);
        assert_eq!(rows[0].value, None);
        assert_eq!(rows[0].happiness_score, Some(7.6));
        assert_eq!(rows[1].happiness_score, None);
        assert_eq!(rows[2].value, Some(5.5e6));
    }

    #[test]
    fn newer_selection_wins_over_late_response() {
        let mut view = SeriesView::new();
        let first = view.select(selection("FIN"));
        let second = view.select(selection("SWE"));

        let late = vec![SeriesRow {
            year: "2019".into(),
            value: Some(1.0),
            happiness_score: None,
        }];
        assert!(view.apply_series(second, Ok(Vec::new())));
        assert!(!view.apply_series(first, Ok(late)));

        assert_eq!(view.rows().status(), &ViewStatus::Loaded(Vec::new()));
        assert_eq!(view.selection().map(|s| s.country.as_str()), Some("SWE"));
    }

    #[test]
    fn failures_name_the_indicator() {
        let mut view = SeriesView::new();
        let token = view.open();
        view.apply_directory(
            token,
            Err(WorldBankError::Api {
                status: 503,
                message: "unavailable".into(),
            }),
        );
        assert_eq!(
            view.directory().status(),
            &ViewStatus::Failed(COUNTRIES_FAILURE.to_string())
        );

        let token = view.select(selection("FIN"));
        view.apply_series(token, Err(WorldBankError::Rejected("bad indicator".into())));
        let (_, rows) = view.into_parts();
        assert_eq!(
            rows.into_loaded().unwrap_err().to_string(),
            "Failed to fetch data for Population, total. Please try a different indicator or country."
        );
    }
}
