use hd_core::catalog::{HAPPINESS_INDICATOR_NAME, current_year, default_year};
use hd_core::{Group, Indicator};
use hd_reconcile::SnapshotRow;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SnapshotArgs;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output_view;
use crate::progress::Progress;
use crate::view::snapshot::load_snapshot;
use crate::view::{SnapshotSelection, SnapshotView};

#[derive(Debug, Serialize)]
struct SnapshotResponse {
    region: Group,
    indicator: Indicator,
    secondary: &'static str,
    year: i32,
    rows: Vec<SnapshotRow>,
}

/// Handle `happydata snapshot`.
pub async fn handle(args: &SnapshotArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (region, indicator, year) = resolve_selection(args, ctx, current_year())?;
    let selection = SnapshotSelection {
        region: region.code.clone(),
        indicator: indicator.id.clone(),
        year,
    };

    let mut view = SnapshotView::new();
    let token = view.select(selection.clone());

    let progress = Progress::spinner(&format!("Fetching {} for {} in {year}...", indicator.name, region.name));
    let result = load_snapshot(&ctx.client, &ctx.dataset, &selection, ctx.client.settings()).await;
    view.apply(token, result);

    let mut rows = match view.into_rows().into_loaded() {
        Ok(rows) => {
            progress.finish_clear();
            rows
        }
        Err(error) => {
            progress.finish_err("fetch failed");
            return Err(error);
        }
    };

    apply_limit(&mut rows, flags.limit);
    let response = SnapshotResponse {
        region,
        indicator,
        secondary: HAPPINESS_INDICATOR_NAME,
        year,
        rows,
    };
    output_view(&response, &response.rows, flags.format, flags.quiet)
}

/// Resolve region, indicator and year against the catalog and defaults.
fn resolve_selection(
    args: &SnapshotArgs,
    ctx: &AppContext,
    current: i32,
) -> anyhow::Result<(Group, Indicator, i32)> {
    let general = &ctx.config.general;

    let region_code = args.region.as_deref().unwrap_or(&general.default_region);
    let region = ctx.catalog.require_group(region_code)?.clone();

    let indicator_id = args.indicator.as_deref().unwrap_or(&general.default_indicator);
    let indicator = ctx.catalog.require_indicator(indicator_id)?.clone();

    let year = args.year.unwrap_or_else(|| default_year(current));
    if year >= current {
        tracing::warn!(year, "no data is published for the current or future years yet");
    }

    Ok((region, indicator, year))
}

#[cfg(test)]
mod tests {
    use hd_config::HappyConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    fn args() -> SnapshotArgs {
        SnapshotArgs {
            region: None,
            indicator: None,
            year: None,
        }
    }

    fn ctx() -> AppContext {
        AppContext::init(HappyConfig::default()).expect("context should build")
    }

    #[test]
    fn defaults_pick_configured_region_and_two_years_back() {
        let (region, indicator, year) = resolve_selection(&args(), &ctx(), 2026).unwrap();
        assert_eq!(region.code, "ECA");
        assert_eq!(indicator.id, "NY.GDP.PCAP.CD");
        assert_eq!(year, 2024);
    }

    #[test]
    fn region_outside_catalog_is_rejected() {
        let args = SnapshotArgs {
            region: Some("ECS".into()),
            ..args()
        };
        let err = resolve_selection(&args, &ctx(), 2026).unwrap_err();
        assert!(err.to_string().contains("ECS"));
    }

    #[test]
    fn explicit_year_is_kept() {
        let args = SnapshotArgs {
            year: Some(2015),
            ..args()
        };
        let (_, _, year) = resolve_selection(&args, &ctx(), 2026).unwrap();
        assert_eq!(year, 2015);
    }
}
