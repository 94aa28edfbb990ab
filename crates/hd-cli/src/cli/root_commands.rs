use clap::{Args, Subcommand, ValueEnum};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List countries from the World Bank directory.
    Countries(CountriesArgs),
    /// List the regions available for the snapshot view.
    Regions(RegionsArgs),
    /// List the indicators available for selection.
    Indicators,
    /// List the years offered by the snapshot view.
    Years,
    /// One country's indicator series next to its happiness scores.
    Series(SeriesArgs),
    /// One region's indicator values and happiness scores for a single year.
    Snapshot(SnapshotArgs),
    /// Print the JSON schema of an output record.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct CountriesArgs {
    /// Only countries filed under this region code
    #[arg(long)]
    pub region: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RegionsArgs {
    /// Query the API's region listing instead of the built-in set
    #[arg(long)]
    pub remote: bool,
}

#[derive(Clone, Debug, Args)]
pub struct SeriesArgs {
    /// Country id (ISO3), defaults to general.default_country
    #[arg(long)]
    pub country: Option<String>,

    /// Indicator id, defaults to general.default_indicator
    #[arg(long)]
    pub indicator: Option<String>,

    /// First year of the range, defaults to general.series_start
    #[arg(long)]
    pub start: Option<i32>,

    /// Last year of the range, defaults to general.series_end
    #[arg(long)]
    pub end: Option<i32>,
}

#[derive(Clone, Debug, Args)]
pub struct SnapshotArgs {
    /// Region code, defaults to general.default_region
    #[arg(long)]
    pub region: Option<String>,

    /// Indicator id, defaults to general.default_indicator
    #[arg(long)]
    pub indicator: Option<String>,

    /// Year, defaults to two years before the current one
    #[arg(long)]
    pub year: Option<i32>,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    #[arg(value_enum)]
    pub type_name: SchemaType,
}

/// Records whose JSON schema can be printed.
#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum SchemaType {
    Country,
    Observation,
    SeriesRow,
    SnapshotRow,
}
