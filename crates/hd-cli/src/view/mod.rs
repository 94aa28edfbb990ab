//! Selection-driven views and their fetch lifecycles.
//!
//! A view owns its current selection and the state of the fetch that
//! selection started. Each new selection issues a fresh request token;
//! a result tagged with an older token is dropped, so a slow response to an
//! abandoned selection never overwrites the current one.

use std::fmt;

use hd_core::{RequestSequence, RequestToken};

pub mod series;
pub mod snapshot;

pub use series::{SeriesSelection, SeriesView};
pub use snapshot::{SnapshotSelection, SnapshotView};

/// Shown when the country directory cannot be loaded.
pub const COUNTRIES_FAILURE: &str = "Failed to fetch list of countries. Please try again later.";

/// Shown when a regional snapshot cannot be loaded.
pub const REGION_FAILURE: &str = "Failed to fetch regional data. Please try again.";

/// Shown when a country series cannot be loaded.
#[must_use]
pub fn series_failure(indicator_name: &str) -> String {
    format!("Failed to fetch data for {indicator_name}. Please try a different indicator or country.")
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewStatus<T> {
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

/// Status of one fetch slot plus the sequence guarding it.
#[derive(Debug)]
pub struct ViewState<T> {
    sequence: RequestSequence,
    status: ViewStatus<T>,
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self {
            sequence: RequestSequence::new(),
            status: ViewStatus::Idle,
        }
    }
}

impl<T> ViewState<T> {
    /// Mark a fetch as started and return its token.
    pub fn begin(&mut self) -> RequestToken {
        self.status = ViewStatus::Loading;
        self.sequence.issue()
    }

    /// Apply the outcome of the fetch tagged `token`.
    ///
    /// Returns `false` and leaves the state untouched when `token` has been
    /// superseded. A failure is logged with its cause and stored as
    /// `failure`, the message users see.
    pub fn settle<E: fmt::Display>(
        &mut self,
        token: RequestToken,
        result: Result<T, E>,
        failure: impl FnOnce() -> String,
    ) -> bool {
        if !self.sequence.is_current(token) {
            tracing::debug!(
                token = token.value(),
                latest = self.sequence.latest().map(RequestToken::value),
                "discarding result of superseded request"
            );
            return false;
        }

        self.status = match result {
            Ok(value) => ViewStatus::Loaded(value),
            Err(error) => {
                tracing::error!(%error, "view fetch failed");
                ViewStatus::Failed(failure())
            }
        };
        true
    }

    #[must_use]
    pub const fn status(&self) -> &ViewStatus<T> {
        &self.status
    }

    /// Consume the state: the loaded value, or the user-facing failure.
    ///
    /// # Errors
    ///
    /// Returns the stored failure message, or an error if no fetch has
    /// settled yet.
    pub fn into_loaded(self) -> anyhow::Result<T> {
        match self.status {
            ViewStatus::Loaded(value) => Ok(value),
            ViewStatus::Failed(message) => Err(anyhow::anyhow!(message)),
            ViewStatus::Idle | ViewStatus::Loading => anyhow::bail!("no data loaded yet"),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_idle_and_loads() {
        let mut state = ViewState::<u32>::default();
        assert_eq!(state.status(), &ViewStatus::Idle);

        let token = state.begin();
        assert_eq!(state.status(), &ViewStatus::Loading);

        assert!(state.settle(token, Ok::<_, String>(7), String::new));
        assert_eq!(state.status(), &ViewStatus::Loaded(7));
        assert_eq!(state.into_loaded().unwrap(), 7);
    }

    #[test]
    fn stale_result_is_discarded() {
        let mut state = ViewState::<&str>::default();
        let first = state.begin();
        let second = state.begin();

        assert!(state.settle(second, Ok::<_, String>("new"), String::new));
        assert!(!state.settle(first, Ok::<_, String>("old"), String::new));
        assert_eq!(state.status(), &ViewStatus::Loaded("new"));
    }

    #[test]
    fn stale_failure_does_not_replace_pending_fetch() {
        let mut state = ViewState::<u32>::default();
        let first = state.begin();
        let _second = state.begin();

        assert!(!state.settle(first, Err::<u32, _>("timeout"), || REGION_FAILURE.to_string()));
        assert_eq!(state.status(), &ViewStatus::Loading);
    }

    #[test]
    fn failure_stores_user_message() {
        let mut state = ViewState::<u32>::default();
        let token = state.begin();
        state.settle(token, Err::<u32, _>("connection reset"), || series_failure("Population, total"));

        let err = state.into_loaded().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Failed to fetch data for Population, total. Please try a different indicator or country."
        );
    }

    #[test]
    fn unsettled_state_has_no_value() {
        let state = ViewState::<u32>::default();
        assert!(state.into_loaded().is_err());
    }
}
