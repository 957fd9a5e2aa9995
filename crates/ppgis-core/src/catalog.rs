//! Seeded demo catalog: the official POIs around the Wuyishan scenic area and
//! the observations every session starts with.

use chrono::{DateTime, Duration, Utc};

use crate::entities::{Observation, PointOfInterest};
use crate::enums::{IssueTag, PointType};
use crate::geo::Coordinates;
use crate::ratings::Ratings;

/// Initial map center.
pub const DEFAULT_CENTER: Coordinates = Coordinates::new(27.6452, 117.9554);

/// Initial map zoom level.
pub const DEFAULT_ZOOM: u8 = 13;

/// Zoom level used when flying to a searched POI or the user's location.
pub const FLY_TO_ZOOM: u8 = 16;

/// Target name given to value assessments of a spot that is not an official POI.
pub const CUSTOM_LOCATION: &str = "Custom location";

/// Placeholder annotation shown while enrichment is in flight.
pub const ANNOTATION_PLACEHOLDER: &str = "Analysis in progress...";

/// The official POIs. Read-only for the lifetime of a session.
#[must_use]
pub fn official_pois() -> Vec<PointOfInterest> {
    [
        (
            "poi-1",
            "Tianyou Peak",
            27.6371,
            117.9391,
            "The first wonder of Wuyishan, best spot for sea-of-clouds views",
        ),
        (
            "poi-2",
            "Nine-Bend Stream Raft Pier",
            27.6202,
            117.9305,
            "Starting point of the bamboo rafting, the soul of Wuyishan",
        ),
        (
            "poi-3",
            "Dahongpao Scenic Area",
            27.6605,
            117.9608,
            "Home of the mother Dahongpao tea trees, heart of the tea culture",
        ),
        (
            "poi-4",
            "Shuilian Cave",
            27.6701,
            117.9703,
            "The largest cave in Wuyishan, with cascading waterfalls",
        ),
        (
            "poi-5",
            "Wuyi Palace",
            27.6452,
            117.9554,
            "Where emperors worshipped the Lord of Wuyi, site of the Song Street",
        ),
    ]
    .into_iter()
    .map(|(id, name, lat, lng, description)| PointOfInterest {
        id: id.to_string(),
        name: name.to_string(),
        coords: Coordinates::new(lat, lng),
        description: description.to_string(),
    })
    .collect()
}

/// Observations present when a session starts, timestamped relative to `now`.
#[must_use]
pub fn seed_observations(now: DateTime<Utc>) -> Vec<Observation> {
    let peak = Observation::assessment(
        "obs-00000001".to_string(),
        PointType::OfficialPoi,
        Some("Tianyou Peak".to_string()),
        "Magnificent scenery, but the mountain path is narrow and holidays are far too crowded."
            .to_string(),
        Coordinates::new(27.6380, 117.9400),
        "Visitor A".to_string(),
        Ratings {
            recreational: 9,
            environmental: 9,
            historical: 8,
            economic: 6,
            emotional: 7,
        },
        now - Duration::seconds(10_000),
    )
    .with_annotation(
        "Exceptional natural landscape value, but carrying capacity is strained at peak times.",
    );

    let bins = Observation::issue_report(
        "obs-00000002".to_string(),
        Some("Near the scenic area entrance".to_string()),
        "The bins here are full and nobody empties them; the smell is terrible.".to_string(),
        Coordinates::new(27.6460, 117.9560),
        "Resident B".to_string(),
        vec![IssueTag::PoorSanitation, IssueTag::DamagedFacilities],
        now - Duration::seconds(5_000),
    )
    .with_annotation(
        "Increase cleaning frequency and add sorted waste bins at the main pedestrian nodes.",
    );

    vec![peak, bins]
}
