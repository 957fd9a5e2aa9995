use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::geo::{Coordinates, Located};

/// An official point of interest. Read-only reference data.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PointOfInterest {
    pub id: String,
    pub name: String,
    pub coords: Coordinates,
    pub description: String,
}

impl PointOfInterest {
    /// Case-insensitive substring match on the display name.
    #[must_use]
    pub fn name_matches(&self, query: &str) -> bool {
        let query = query.trim();
        !query.is_empty() && self.name.to_lowercase().contains(&query.to_lowercase())
    }
}

impl Located for PointOfInterest {
    fn coords(&self) -> Coordinates {
        self.coords
    }
}
