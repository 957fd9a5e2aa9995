use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// List official points of interest.
    Pois(PoisArgs),
    /// Search points of interest by name.
    Search(SearchArgs),
    /// Feed of observations, newest first.
    List(ListArgs),
    /// Submit a value assessment or issue report.
    Submit(SubmitArgs),
    /// Aggregate scores across all observations.
    Stats,
    /// Generate a community report for planners.
    Report,
    /// Resolve the device location.
    Locate(LocateArgs),
    /// Show available basemaps.
    Basemaps(BasemapsArgs),
}

/// Viewport bounds shared by map-backed listings.
#[derive(Clone, Debug, Default, Args)]
pub struct ViewportArgs {
    /// Visible bounds as south,west,north,east
    #[arg(long, allow_hyphen_values = true)]
    pub bounds: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct PoisArgs {
    #[command(flatten)]
    pub viewport: ViewportArgs,
}

#[derive(Clone, Debug, Args)]
pub struct SearchArgs {
    /// Name fragment, matched case-insensitively.
    pub query: String,

    /// Fly to the first hit.
    #[arg(long)]
    pub select: bool,
}

#[derive(Clone, Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub viewport: ViewportArgs,

    /// Only show issue reports.
    #[arg(long, conflicts_with = "rated")]
    pub issues: bool,

    /// Only show value assessments.
    #[arg(long)]
    pub rated: bool,
}

/// Where the submission form was opened.
#[derive(Clone, Debug, Args)]
#[group(required = true, multiple = true)]
pub struct LocationArgs {
    /// Latitude of a free map click.
    #[arg(long, requires = "lng", conflicts_with = "poi", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Longitude of a free map click.
    #[arg(long, requires = "lat", conflicts_with = "poi", allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Official POI the form was opened from.
    #[arg(long)]
    pub poi: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct SubmitArgs {
    #[command(flatten)]
    pub location: LocationArgs,

    /// Form mode: value, issue
    #[arg(long, default_value = "value")]
    pub mode: String,

    /// Description of the place or problem.
    #[arg(long, default_value = "")]
    pub text: String,

    /// Five scores (recreational,environmental,historical,economic,emotional).
    #[arg(long)]
    pub ratings: Option<String>,

    /// Issue tag, repeatable (e.g. poor-sanitation).
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Return right after the optimistic insert without waiting for the
    /// annotation.
    #[arg(long)]
    pub no_wait: bool,
}

#[derive(Clone, Debug, Args)]
pub struct LocateArgs {
    /// Simulated device latitude.
    #[arg(long, requires = "lng", allow_negative_numbers = true)]
    pub lat: Option<f64>,

    /// Simulated device longitude.
    #[arg(long, requires = "lat", allow_negative_numbers = true)]
    pub lng: Option<f64>,

    /// Simulated failure code (1 permission, 2 unavailable, 3 timeout).
    #[arg(long, conflicts_with_all = ["lat", "lng"])]
    pub error_code: Option<u16>,
}

#[derive(Clone, Debug, Args)]
pub struct BasemapsArgs {
    /// Mark this basemap as active: osm, gaode, satellite
    #[arg(long)]
    pub select: Option<String>,
}
