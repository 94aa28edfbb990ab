//! # hd-reconcile
//!
//! Reconciliation of indicator observations with the bundled happiness
//! dataset, in two shapes:
//! - [`reconcile_entity_series`]: one country across years, one row per year.
//! - [`reconcile_entity_snapshot`]: every country of a region in one year,
//!   one row per country, largest indicator value first.
//!
//! Both functions are pure. Fetching is the caller's job (see `hd-worldbank`).

pub mod order;
pub mod series;
pub mod snapshot;

pub use order::RowMetrics;
pub use series::{SeriesRow, reconcile_entity_series};
pub use snapshot::{SnapshotRow, reconcile_entity_snapshot};
