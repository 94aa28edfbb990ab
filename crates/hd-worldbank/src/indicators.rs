//! Indicator observation endpoints.

use std::fmt;

use hd_core::Observation;

use crate::WorldBankClient;
use crate::chunked;
use crate::error::WorldBankError;
use crate::source::ObservationSource;

/// The `date` query parameter: an inclusive year range or a single year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatePeriod {
    Range { start: String, end: String },
    Year(String),
}

impl DatePeriod {
    pub fn range(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self::Range {
            start: start.into(),
            end: end.into(),
        }
    }

    pub fn year(year: impl Into<String>) -> Self {
        Self::Year(year.into())
    }
}

impl fmt::Display for DatePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Range { start, end } => write!(f, "{start}:{end}"),
            Self::Year(year) => f.write_str(year),
        }
    }
}

impl WorldBankClient {
    fn observations_url(
        &self,
        country_ids: &[String],
        indicator: &str,
        period: &DatePeriod,
        per_page: u32,
    ) -> String {
        let countries = country_ids
            .iter()
            .map(|id| urlencoding::encode(id).into_owned())
            .collect::<Vec<_>>()
            .join(";");
        self.endpoint(&format!(
            "country/{countries}/indicator/{}?format=json&per_page={per_page}&date={period}",
            urlencoding::encode(indicator)
        ))
    }

    /// Observations of `indicator` for one country over `start..=end`.
    ///
    /// # Errors
    ///
    /// Returns [`WorldBankError`] if the request fails or the response is
    /// not a World Bank envelope.
    pub async fn indicator_for_country(
        &self,
        country_id: &str,
        indicator: &str,
        start: &str,
        end: &str,
    ) -> Result<Vec<Observation>, WorldBankError> {
        let ids = [country_id.to_string()];
        let period = DatePeriod::range(start, end);
        let url = self.observations_url(&ids, indicator, &period, self.settings.series_page_size);
        self.fetch_records(&url).await
    }

    /// Observations of `indicator` in `year` for every country of `region`.
    ///
    /// Resolves the region's countries, then fetches them in concurrent
    /// batches of `chunk_size`. Fails as a whole if any batch fails.
    ///
    /// # Errors
    ///
    /// Returns [`WorldBankError`] if the directory lookup or any batch fails.
    pub async fn indicator_for_region(
        &self,
        region: &str,
        indicator: &str,
        year: &str,
    ) -> Result<Vec<Observation>, WorldBankError> {
        chunked::region_observations(
            self,
            region,
            indicator,
            year,
            self.settings.chunk_size,
            self.settings.snapshot_page_size,
        )
        .await
    }
}

impl ObservationSource for WorldBankClient {
    async fn observations(
        &self,
        country_ids: &[String],
        indicator: &str,
        period: &DatePeriod,
        per_page: u32,
    ) -> Result<Vec<Observation>, WorldBankError> {
        let url = self.observations_url(country_ids, indicator, period, per_page);
        self.fetch_records(&url).await
    }
}
