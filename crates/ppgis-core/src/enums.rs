//! Classification, view, form-mode, issue-tag and basemap enums for PPGIS.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// PointType
// ---------------------------------------------------------------------------

/// Classification of an observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum PointType {
    /// A user identified a new spot and rated it.
    UserAdded,
    /// A user rated an existing official point of interest.
    OfficialPoi,
    /// A user reported a problem.
    IssueReport,
}

impl PointType {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserAdded => "user_added",
            Self::OfficialPoi => "official_poi",
            Self::IssueReport => "issue_report",
        }
    }

    /// Whether observations of this type carry a rating vector.
    #[must_use]
    pub const fn is_rated(self) -> bool {
        !matches!(self, Self::IssueReport)
    }

    /// Human-readable label used in prompts and digests.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::UserAdded | Self::OfficialPoi => "Value assessment",
            Self::IssueReport => "Issue report",
        }
    }
}

impl fmt::Display for PointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// FeedbackMode
// ---------------------------------------------------------------------------

/// Which half of the submission form is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackMode {
    /// Five-slider value assessment.
    #[default]
    Value,
    /// Multi-select issue report.
    Issue,
}

impl FeedbackMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Issue => "issue",
        }
    }

    /// Derive the point classification for a submission in this mode.
    ///
    /// Value submissions that originate from an official POI keep the
    /// official classification; all others are user-added.
    #[must_use]
    pub const fn point_type(self, from_poi: bool) -> PointType {
        match (self, from_poi) {
            (Self::Issue, _) => PointType::IssueReport,
            (Self::Value, true) => PointType::OfficialPoi,
            (Self::Value, false) => PointType::UserAdded,
        }
    }
}

impl fmt::Display for FeedbackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// AppView
// ---------------------------------------------------------------------------

/// Top-level panel shown by the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AppView {
    #[default]
    Map,
    List,
    Stats,
}

impl AppView {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Map => "map",
            Self::List => "list",
            Self::Stats => "stats",
        }
    }
}

impl fmt::Display for AppView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// IssueTag
// ---------------------------------------------------------------------------

/// Fixed vocabulary offered by the issue-report form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IssueTag {
    Crowded,
    PoorSanitation,
    DamagedFacilities,
    SafetyHazard,
    Noise,
    InconvenientTransport,
    UnclearSignage,
    Other,
}

impl IssueTag {
    /// Every tag, in the order the form presents them.
    pub const ALL: [Self; 8] = [
        Self::Crowded,
        Self::PoorSanitation,
        Self::DamagedFacilities,
        Self::SafetyHazard,
        Self::Noise,
        Self::InconvenientTransport,
        Self::UnclearSignage,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Crowded => "crowded",
            Self::PoorSanitation => "poor_sanitation",
            Self::DamagedFacilities => "damaged_facilities",
            Self::SafetyHazard => "safety_hazard",
            Self::Noise => "noise",
            Self::InconvenientTransport => "inconvenient_transport",
            Self::UnclearSignage => "unclear_signage",
            Self::Other => "other",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Crowded => "Crowded",
            Self::PoorSanitation => "Poor sanitation",
            Self::DamagedFacilities => "Damaged facilities",
            Self::SafetyHazard => "Safety hazard",
            Self::Noise => "Noise nuisance",
            Self::InconvenientTransport => "Inconvenient transport",
            Self::UnclearSignage => "Unclear signage",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for IssueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Basemap
// ---------------------------------------------------------------------------

/// Tile layer shown beneath the markers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Basemap {
    #[default]
    Osm,
    Gaode,
    Satellite,
}

impl Basemap {
    pub const ALL: [Self; 3] = [Self::Osm, Self::Gaode, Self::Satellite];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Osm => "osm",
            Self::Gaode => "gaode",
            Self::Satellite => "satellite",
        }
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Osm => "Standard map (OSM)",
            Self::Gaode => "Gaode map",
            Self::Satellite => "Satellite imagery",
        }
    }

    /// XYZ tile URL template.
    #[must_use]
    pub const fn url_template(self) -> &'static str {
        match self {
            Self::Osm => "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png",
            Self::Gaode => {
                "https://webrd02.is.autonavi.com/appmaptile?lang=zh_cn&size=1&scale=1&style=8&x={x}&y={y}&z={z}"
            }
            Self::Satellite => "https://webst02.is.autonavi.com/appmaptile?style=6&x={x}&y={y}&z={z}",
        }
    }

    #[must_use]
    pub const fn attribution(self) -> &'static str {
        match self {
            Self::Osm => "© OpenStreetMap contributors",
            Self::Gaode | Self::Satellite => "© AutoNavi",
        }
    }
}

impl fmt::Display for Basemap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_mode_always_yields_issue_report() {
        assert_eq!(FeedbackMode::Issue.point_type(true), PointType::IssueReport);
        assert_eq!(FeedbackMode::Issue.point_type(false), PointType::IssueReport);
    }

    #[test]
    fn value_mode_respects_poi_origin() {
        assert_eq!(FeedbackMode::Value.point_type(true), PointType::OfficialPoi);
        assert_eq!(FeedbackMode::Value.point_type(false), PointType::UserAdded);
    }

    #[test]
    fn only_issue_reports_are_unrated() {
        assert!(PointType::UserAdded.is_rated());
        assert!(PointType::OfficialPoi.is_rated());
        assert!(!PointType::IssueReport.is_rated());
    }

    #[test]
    fn serde_names_match_as_str() {
        for tag in IssueTag::ALL {
            let json = serde_json::to_string(&tag).unwrap();
            assert_eq!(json, format!("\"{}\"", tag.as_str()));
        }
        for map in Basemap::ALL {
            let json = serde_json::to_string(&map).unwrap();
            assert_eq!(json, format!("\"{}\"", map.as_str()));
        }
    }

    #[test]
    fn defaults_match_client_startup() {
        assert_eq!(AppView::default(), AppView::Map);
        assert_eq!(Basemap::default(), Basemap::Osm);
        assert_eq!(FeedbackMode::default(), FeedbackMode::Value);
    }
}
