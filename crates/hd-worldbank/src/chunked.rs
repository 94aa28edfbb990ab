//! Chunked, concurrent observation fetching for long country lists.
//!
//! The API takes country ids as a `;`-separated path segment, so a whole
//! region in one request yields an overlong URL. Ids are split into batches,
//! every batch is fetched concurrently on a [`JoinSet`], and the results are
//! concatenated in batch order once all of them have completed.

use hd_core::Observation;
use tokio::task::JoinSet;

use crate::error::WorldBankError;
use crate::indicators::DatePeriod;
use crate::source::{EntityDirectory, ObservationSource};

/// Split `ids` into batches of at most `chunk_size` (a zero size is treated
/// as one).
#[must_use]
pub fn chunk_ids(ids: &[String], chunk_size: usize) -> Vec<Vec<String>> {
    ids.chunks(chunk_size.max(1)).map(<[String]>::to_vec).collect()
}

/// Fetch `indicator` over `period` for all `ids`, one request per batch.
///
/// All batches run concurrently. The first failing batch fails the whole
/// fetch and the remaining batches are aborted; no partial result is
/// returned.
///
/// # Errors
///
/// Returns the first batch's [`WorldBankError`], or
/// [`WorldBankError::Task`] if a batch task panicked.
pub async fn fetch_chunked<S>(
    source: &S,
    ids: &[String],
    indicator: &str,
    period: &DatePeriod,
    chunk_size: usize,
    per_page: u32,
) -> Result<Vec<Observation>, WorldBankError>
where
    S: ObservationSource + Clone + Send + Sync + 'static,
{
    let batches = chunk_ids(ids, chunk_size);
    let batch_count = batches.len();
    tracing::debug!(ids = ids.len(), batches = batch_count, indicator, %period, "fetching in batches");

    let mut set = JoinSet::new();
    for (idx, batch) in batches.into_iter().enumerate() {
        let source = source.clone();
        let indicator = indicator.to_string();
        let period = period.clone();
        set.spawn(async move {
            let result = source
                .observations(&batch, &indicator, &period, per_page)
                .await;
            (idx, result)
        });
    }

    let mut results: Vec<Vec<Observation>> = vec![Vec::new(); batch_count];
    while let Some(joined) = set.join_next().await {
        let (idx, result) = joined?;
        match result {
            Ok(observations) => results[idx] = observations,
            Err(e) => {
                tracing::warn!(batch = idx, batches = batch_count, %e, "batch fetch failed");
                return Err(e);
            }
        }
    }

    Ok(results.into_iter().flatten().collect())
}

/// Observations of `indicator` in `year` for every country of `region`.
///
/// An empty region resolves to an empty result without fetching.
///
/// # Errors
///
/// Returns [`WorldBankError`] if the directory lookup or any batch fails.
pub async fn region_observations<S>(
    source: &S,
    region: &str,
    indicator: &str,
    year: &str,
    chunk_size: usize,
    per_page: u32,
) -> Result<Vec<Observation>, WorldBankError>
where
    S: EntityDirectory + ObservationSource + Clone + Send + Sync + 'static,
{
    let countries = source.countries_in_region(region).await?;
    if countries.is_empty() {
        return Ok(Vec::new());
    }

    let ids: Vec<String> = countries.into_iter().map(|country| country.id).collect();
    fetch_chunked(
        source,
        &ids,
        indicator,
        &DatePeriod::year(year),
        chunk_size,
        per_page,
    )
    .await
}
