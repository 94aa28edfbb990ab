use hd_core::Country;
use hd_worldbank::EntityDirectory;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::CountriesArgs;
use crate::commands::shared::limit::apply_limit;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;
use crate::view::COUNTRIES_FAILURE;

#[derive(Debug, PartialEq, Eq, Serialize)]
struct CountryListing {
    id: String,
    iso2_code: String,
    name: String,
    region: String,
}

impl From<Country> for CountryListing {
    fn from(country: Country) -> Self {
        Self {
            id: country.id,
            iso2_code: country.iso2_code,
            name: country.name,
            region: country.region.value,
        }
    }
}

/// Handle `happydata countries`.
pub async fn handle(args: &CountriesArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("Fetching countries...");
    let result = match &args.region {
        Some(region) => ctx.client.countries_in_region(region).await,
        None => ctx.client.all_countries().await,
    };

    let countries = match result {
        Ok(countries) => {
            progress.finish_clear();
            countries
        }
        Err(error) => {
            progress.finish_err("country listing failed");
            tracing::error!(%error, region = ?args.region, "country listing failed");
            anyhow::bail!(COUNTRIES_FAILURE);
        }
    };

    let mut listings = listings(countries);
    apply_limit(&mut listings, flags.limit);
    output(&listings, flags.format)
}

fn listings(countries: Vec<Country>) -> Vec<CountryListing> {
    countries
        .into_iter()
        .filter(|country| !country.is_aggregate())
        .map(CountryListing::from)
        .collect()
}
