use hd_core::catalog::HAPPINESS_INDICATOR_NAME;
use hd_core::{Country, Indicator};
use hd_reconcile::SeriesRow;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SeriesArgs;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output_view;
use crate::progress::Progress;
use crate::view::series::{load_directory, load_series};
use crate::view::{SeriesSelection, SeriesView};

#[derive(Debug, Serialize)]
struct CountryLabel {
    id: String,
    name: String,
}

#[derive(Debug, Serialize)]
struct SeriesResponse {
    country: CountryLabel,
    indicator: Indicator,
    secondary: &'static str,
    start: i32,
    end: i32,
    rows: Vec<SeriesRow>,
}

/// Handle `happydata series`.
pub async fn handle(args: &SeriesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let selection = resolve_selection(args, ctx)?;

    let mut view = SeriesView::new();
    let directory_token = view.open();
    let series_token = view.select(selection.clone());

    let progress = Progress::spinner(&format!(
        "Fetching {} for {}...",
        selection.indicator_name, selection.country
    ));
    let (directory, rows) = tokio::join!(
        load_directory(&ctx.client),
        load_series(
            &ctx.client,
            &ctx.dataset,
            &selection,
            ctx.client.settings().series_page_size,
        ),
    );
    view.apply_directory(directory_token, directory);
    view.apply_series(series_token, rows);

    let (directory, rows) = view.into_parts();
    let loaded = directory
        .into_loaded()
        .and_then(|countries| rows.into_loaded().map(|rows| (countries, rows)));
    let (countries, mut rows) = match loaded {
        Ok(loaded) => {
            progress.finish_clear();
            loaded
        }
        Err(error) => {
            progress.finish_err("fetch failed");
            return Err(error);
        }
    };

    apply_limit(&mut rows, flags.limit);
    let response = SeriesResponse {
        country: CountryLabel {
            name: country_name(&countries, &selection.country),
            id: selection.country,
        },
        indicator: Indicator::new(selection.indicator, selection.indicator_name),
        secondary: HAPPINESS_INDICATOR_NAME,
        start: selection.start,
        end: selection.end,
        rows,
    };
    output_view(&response, &response.rows, flags.format, flags.quiet)
}

fn resolve_selection(args: &SeriesArgs, ctx: &AppContext) -> anyhow::Result<SeriesSelection> {
    let general = &ctx.config.general;

    let indicator_id = args.indicator.as_deref().unwrap_or(&general.default_indicator);
    let indicator = ctx.catalog.require_indicator(indicator_id)?;

    let start = args.start.unwrap_or(general.series_start);
    let end = args.end.unwrap_or(general.series_end);
    if start > end {
        anyhow::bail!("--start ({start}) must not be after --end ({end})");
    }

    let country = args
        .country
        .as_deref()
        .unwrap_or(&general.default_country)
        .trim()
        .to_ascii_uppercase();

    Ok(SeriesSelection {
        country,
        indicator: indicator.id.clone(),
        indicator_name: indicator.name.clone(),
        start,
        end,
    })
}

/// Display name for `id`, falling back to the id when the directory lacks it.
fn country_name(countries: &[Country], id: &str) -> String {
    countries
        .iter()
        .find(|country| country.id == id)
        .map_or_else(
            || {
                tracing::warn!(country = id, "country not found in directory");
                id.to_string()
            },
            |country| country.name.clone(),
        )
}

#[cfg(test)]
mod tests {
    use hd_config::HappyConfig;
    use pretty_assertions::assert_eq;

    use super::*;

    fn args() -> SeriesArgs {
        SeriesArgs {
            country: None,
            indicator: None,
            start: None,
            end: None,
        }
    }

    fn ctx() -> AppContext {
        AppContext::init(HappyConfig::default()).expect("context should build")
    }

    #[test]
    fn selection_falls_back_to_configured_defaults() {
        let selection = resolve_selection(&args(), &ctx()).unwrap();
        assert_eq!(selection.country, "USA");
        assert_eq!(selection.indicator, "NY.GDP.PCAP.CD");
        assert_eq!(selection.indicator_name, "GDP per capita (current US$)");
        assert_eq!((selection.start, selection.end), (2000, 2023));
    }

    #[test]
    fn unknown_indicator_is_rejected() {
        let args = SeriesArgs {
            indicator: Some("XX.NOPE".into()),
            ..args()
        };
        assert!(resolve_selection(&args, &ctx()).is_err());
    }

    #[test]
    fn inverted_range_is_rejected() {
        let args = SeriesArgs {
            start: Some(2020),
            end: Some(2010),
            ..args()
        };
        let err = resolve_selection(&args, &ctx()).unwrap_err();
        assert!(err.to_string().contains("--start"));
    }

    #[test]
    fn country_is_normalized() {
        let args = SeriesArgs {
            country: Some(" fin ".into()),
            ..args()
        };
        assert_eq!(resolve_selection(&args, &ctx()).unwrap().country, "FIN");
    }

    #[test]
    fn missing_country_name_falls_back_to_id() {
        assert_eq!(country_name(&[], "XKX"), "XKX");
    }
}
