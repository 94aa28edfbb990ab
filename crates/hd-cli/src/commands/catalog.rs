use hd_core::Group;
use hd_core::catalog::{current_year, default_year, year_choices};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::RegionsArgs;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

const REGIONS_FAILURE: &str = "Failed to fetch list of regions. Please try again later.";

#[derive(Debug, Serialize)]
struct YearChoice {
    year: i32,
    default: bool,
}

/// Handle `happydata regions`.
pub async fn handle_regions(
    args: &RegionsArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut groups: Vec<Group> = if args.remote {
        let progress = Progress::spinner("Fetching regions...");
        match ctx.client.list_regions().await {
            Ok(groups) => {
                progress.finish_clear();
                groups
            }
            Err(error) => {
                progress.finish_err("region listing failed");
                tracing::error!(%error, "region listing failed");
                anyhow::bail!(REGIONS_FAILURE);
            }
        }
    } else {
        ctx.catalog.groups.clone()
    };

    apply_limit(&mut groups, flags.limit);
    output(&groups, flags.format)
}

/// Handle `happydata indicators`.
pub fn handle_indicators(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut indicators = ctx.catalog.indicators.clone();
    apply_limit(&mut indicators, flags.limit);
    output(&indicators, flags.format)
}

/// Handle `happydata years`.
pub fn handle_years(flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut years = year_rows(current_year());
    apply_limit(&mut years, flags.limit);
    output(&years, flags.format)
}

fn year_rows(current: i32) -> Vec<YearChoice> {
    let default = default_year(current);
    year_choices(current)
        .into_iter()
        .map(|year| YearChoice {
            year,
            default: year == default,
        })
        .collect()
}
