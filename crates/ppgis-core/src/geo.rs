//! Geographic coordinates and viewport bounds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

/// A WGS84 latitude/longitude pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Check the pair lies on the globe.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidGeometry`] for non-finite values or values
    /// outside ±90 latitude / ±180 longitude.
    pub fn validate(&self) -> Result<(), CoreError> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(CoreError::InvalidGeometry(format!(
                "latitude {} outside [-90, 90]",
                self.lat
            )));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(CoreError::InvalidGeometry(format!(
                "longitude {} outside [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4}, {:.4}", self.lat, self.lng)
    }
}

/// Anything with a position on the map.
pub trait Located {
    fn coords(&self) -> Coordinates;
}

impl Located for Coordinates {
    fn coords(&self) -> Coordinates {
        *self
    }
}

/// The visible map viewport. All four edges are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl GeoBounds {
    /// Build bounds from the south-west and north-east corners.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidGeometry`] if either corner is invalid or
    /// the corners are inverted.
    pub fn new(south_west: Coordinates, north_east: Coordinates) -> Result<Self, CoreError> {
        south_west.validate()?;
        north_east.validate()?;
        if south_west.lat > north_east.lat {
            return Err(CoreError::InvalidGeometry(format!(
                "south {} is north of north {}",
                south_west.lat, north_east.lat
            )));
        }
        if south_west.lng > north_east.lng {
            return Err(CoreError::InvalidGeometry(format!(
                "west {} is east of east {}",
                south_west.lng, north_east.lng
            )));
        }
        Ok(Self {
            south: south_west.lat,
            west: south_west.lng,
            north: north_east.lat,
            east: north_east.lng,
        })
    }

    #[must_use]
    pub fn contains(&self, point: Coordinates) -> bool {
        (self.south..=self.north).contains(&point.lat) && (self.west..=self.east).contains(&point.lng)
    }

    /// Keep the items whose position falls inside the bounds, preserving order.
    #[must_use]
    pub fn filter<T: Located + Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|item| self.contains(item.coords()))
            .cloned()
            .collect()
    }
}

impl std::str::FromStr for GeoBounds {
    type Err = CoreError;

    /// Parse `south,west,north,east`.
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let parts = raw
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(|error| CoreError::InvalidGeometry(format!("bounds '{raw}': {error}")))?;
        let &[south, west, north, east] = parts.as_slice() else {
            return Err(CoreError::InvalidGeometry(format!(
                "bounds '{raw}': expected south,west,north,east"
            )));
        };
        Self::new(Coordinates::new(south, west), Coordinates::new(north, east))
    }
}
