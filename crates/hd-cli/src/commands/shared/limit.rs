/// Rows to keep: the global `--limit`, or everything when unset.
#[must_use]
pub fn effective_limit(global: Option<u32>, available: usize) -> usize {
    global
        .and_then(|limit| usize::try_from(limit).ok())
        .map_or(available, |limit| limit.min(available))
}

/// Truncate `rows` to the global `--limit`.
pub fn apply_limit<T>(rows: &mut Vec<T>, global: Option<u32>) {
    let keep = effective_limit(global, rows.len());
    rows.truncate(keep);
}

#[cfg(test)]
mod tests {
    use super::{apply_limit, effective_limit};

    #[test]
    fn unset_limit_keeps_everything() {
        assert_eq!(effective_limit(None, 20), 20);
    }

    #[test]
    fn limit_caps_rows() {
        assert_eq!(effective_limit(Some(5), 20), 5);
        assert_eq!(effective_limit(Some(50), 20), 20);
    }

    #[test]
    fn apply_limit_truncates_in_place() {
        let mut rows = vec![1, 2, 3, 4];
        apply_limit(&mut rows, Some(2));
        assert_eq!(rows, vec![1, 2]);
    }
}
