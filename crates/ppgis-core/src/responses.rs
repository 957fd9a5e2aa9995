//! Response types returned as JSON by `ppgis` commands and consumed by view
//! renderers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Observation, PointOfInterest};
use crate::enums::Basemap;
use crate::geo::{Coordinates, GeoBounds};
use crate::ratings::RatingDimension;

/// Camera command issued by search selection and successful geolocation.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FlyTo {
    pub coords: Coordinates,
    pub zoom: u8,
}

/// What the map panel renders for the current viewport.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ViewportResponse {
    pub bounds: Option<GeoBounds>,
    pub observations: Vec<Observation>,
    pub pois: Vec<PointOfInterest>,
}

/// Response from `ppgis list`: the feed, newest first.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct FeedResponse {
    pub total: u32,
    pub observations: Vec<Observation>,
}

/// Mean score on one rating dimension.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct DimensionAverage {
    pub dimension: RatingDimension,
    pub label: String,
    pub average: f64,
    pub full_mark: u8,
}

/// Response from `ppgis stats`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StatsResponse {
    pub total_observations: u32,
    pub rated_observations: u32,
    pub issue_reports: u32,
    /// Mean of every observation's average score, issue reports included.
    pub overall_average: f64,
    /// Per-dimension means over rated observations. Empty when none exist.
    pub dimensions: Vec<DimensionAverage>,
}

/// Response from `ppgis submit`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SubmitResponse {
    pub observation: Observation,
    /// Whether the background enrichment finished and patched the observation.
    pub enriched: bool,
}

/// Response from `ppgis report`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReportResponse {
    pub observations: u32,
    pub report: String,
}

/// Response from `ppgis search`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct SearchResultsResponse {
    pub query: String,
    pub results: Vec<PointOfInterest>,
    pub total_results: u32,
    pub fly_to: Option<FlyTo>,
}

/// Response from `ppgis locate`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct LocateResponse {
    pub location: Option<Coordinates>,
    pub fly_to: Option<FlyTo>,
    pub notice: Option<String>,
}

/// One row of `ppgis basemaps`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct BasemapInfo {
    pub key: Basemap,
    pub name: String,
    pub url_template: String,
    pub attribution: String,
    pub active: bool,
}

impl BasemapInfo {
    #[must_use]
    pub fn describe(key: Basemap, active: Basemap) -> Self {
        Self {
            key,
            name: key.display_name().to_string(),
            url_template: key.url_template().to_string(),
            attribution: key.attribution().to_string(),
            active: key == active,
        }
    }
}
