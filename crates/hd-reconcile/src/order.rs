//! Ordering and retention helpers shared by both reconcilers.

use std::cmp::Ordering;

/// Read access to the two metrics every reconciled row carries.
pub trait RowMetrics {
    fn indicator_value(&self) -> Option<f64>;
    fn happiness_score(&self) -> Option<f64>;

    /// Whether at least one of the two metrics is present.
    fn has_any_metric(&self) -> bool {
        self.indicator_value().is_some() || self.happiness_score().is_some()
    }
}

/// Compare two period strings as integers, ascending.
///
/// Years that do not parse sort after every numeric year, then lexically.
#[must_use]
pub fn compare_years(a: &str, b: &str) -> Ordering {
    match (a.trim().parse::<i64>(), b.trim().parse::<i64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

/// Descending by indicator value, absent values compared as `0.0`.
///
/// The substitution applies to ordering only; rows keep their `None`.
pub fn by_indicator_descending<R: RowMetrics>(a: &R, b: &R) -> Ordering {
    let a = a.indicator_value().unwrap_or(0.0);
    let b = b.indicator_value().unwrap_or(0.0);
    b.total_cmp(&a)
}

/// Lazily drop rows with neither metric present, keeping input order.
pub fn retain_with_metrics<I, R>(rows: I) -> impl Iterator<Item = R>
where
    I: IntoIterator<Item = R>,
    R: RowMetrics,
{
    rows.into_iter().filter(RowMetrics::has_any_metric)
}
