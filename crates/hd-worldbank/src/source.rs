//! Collaborator traits for the data the reconcilers consume.
//!
//! [`WorldBankClient`](crate::WorldBankClient) implements both; tests and
//! alternative backends can provide in-memory implementations.

use std::future::Future;

use hd_core::{Country, Observation};

use crate::error::WorldBankError;
use crate::indicators::DatePeriod;

/// Lists countries, optionally restricted to one region.
pub trait EntityDirectory {
    /// Every country in the directory, aggregates removed.
    fn all_countries(&self) -> impl Future<Output = Result<Vec<Country>, WorldBankError>> + Send;

    /// Countries (and aggregates) the directory files under `region`.
    fn countries_in_region(
        &self,
        region: &str,
    ) -> impl Future<Output = Result<Vec<Country>, WorldBankError>> + Send;
}

/// Fetches indicator observations for a batch of countries.
pub trait ObservationSource {
    /// One page of observations of `indicator` for `country_ids` over `period`.
    fn observations(
        &self,
        country_ids: &[String],
        indicator: &str,
        period: &DatePeriod,
        per_page: u32,
    ) -> impl Future<Output = Result<Vec<Observation>, WorldBankError>> + Send;
}
