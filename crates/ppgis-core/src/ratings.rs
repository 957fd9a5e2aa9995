//! The five-dimension value rating and its derived average score.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::CoreError;

/// Upper bound of every rating dimension (inclusive).
pub const MAX_RATING: u8 = 10;

/// Slider position the form starts at.
pub const DEFAULT_RATING: u8 = 5;

/// One axis of the value assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RatingDimension {
    Recreational,
    Environmental,
    Historical,
    Economic,
    Emotional,
}

impl RatingDimension {
    pub const ALL: [Self; 5] = [
        Self::Recreational,
        Self::Environmental,
        Self::Historical,
        Self::Economic,
        Self::Emotional,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Recreational => "recreational",
            Self::Environmental => "environmental",
            Self::Historical => "historical",
            Self::Economic => "economic",
            Self::Emotional => "emotional",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Recreational => "Recreation",
            Self::Environmental => "Environment",
            Self::Historical => "Heritage",
            Self::Economic => "Economy",
            Self::Emotional => "Attachment",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Recreational => "Suitability for leisure, play and relaxation",
            Self::Environmental => "Ecology, greenery and natural landscape quality",
            Self::Historical => "Relics, monuments and local cultural character",
            Self::Economic => "Commercial vitality, spending potential and local income",
            Self::Emotional => "Belonging, identity and collective memory",
        }
    }
}

impl fmt::Display for RatingDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scores on the five value dimensions, each `0..=10`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Ratings {
    pub recreational: u8,
    pub environmental: u8,
    pub historical: u8,
    pub economic: u8,
    pub emotional: u8,
}

impl Default for Ratings {
    fn default() -> Self {
        Self::uniform(DEFAULT_RATING)
    }
}

impl Ratings {
    /// Build a rating vector, rejecting any score above [`MAX_RATING`].
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RatingOutOfRange`] naming the first offending
    /// dimension.
    pub fn new(
        recreational: u8,
        environmental: u8,
        historical: u8,
        economic: u8,
        emotional: u8,
    ) -> Result<Self, CoreError> {
        let ratings = Self {
            recreational,
            environmental,
            historical,
            economic,
            emotional,
        };
        ratings.validate()?;
        Ok(ratings)
    }

    /// Build a rating vector from scores in [`RatingDimension::ALL`] order.
    ///
    /// # Errors
    ///
    /// Same as [`Ratings::new`].
    pub fn from_array(values: [u8; 5]) -> Result<Self, CoreError> {
        let [recreational, environmental, historical, economic, emotional] = values;
        Self::new(recreational, environmental, historical, economic, emotional)
    }

    #[must_use]
    pub const fn uniform(value: u8) -> Self {
        Self {
            recreational: value,
            environmental: value,
            historical: value,
            economic: value,
            emotional: value,
        }
    }

    /// Check every dimension is within `0..=10`.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::RatingOutOfRange`] for the first dimension above 10.
    pub fn validate(&self) -> Result<(), CoreError> {
        for dimension in RatingDimension::ALL {
            let value = self.get(dimension);
            if value > MAX_RATING {
                return Err(CoreError::RatingOutOfRange {
                    dimension: dimension.as_str().to_string(),
                    value,
                });
            }
        }
        Ok(())
    }

    #[must_use]
    pub const fn get(&self, dimension: RatingDimension) -> u8 {
        match dimension {
            RatingDimension::Recreational => self.recreational,
            RatingDimension::Environmental => self.environmental,
            RatingDimension::Historical => self.historical,
            RatingDimension::Economic => self.economic,
            RatingDimension::Emotional => self.emotional,
        }
    }

    pub const fn set(&mut self, dimension: RatingDimension, value: u8) {
        match dimension {
            RatingDimension::Recreational => self.recreational = value,
            RatingDimension::Environmental => self.environmental = value,
            RatingDimension::Historical => self.historical = value,
            RatingDimension::Economic => self.economic = value,
            RatingDimension::Emotional => self.emotional = value,
        }
    }

    /// Scores in [`RatingDimension::ALL`] order.
    #[must_use]
    pub const fn values(&self) -> [u8; 5] {
        [
            self.recreational,
            self.environmental,
            self.historical,
            self.economic,
            self.emotional,
        ]
    }

    #[must_use]
    pub fn sum(&self) -> u32 {
        self.values().iter().copied().map(u32::from).sum()
    }

    /// Arithmetic mean of the five scores rounded to one decimal place.
    ///
    /// `sum / 5` has at most one decimal digit, so `sum * 2 / 10` is exact.
    #[must_use]
    pub fn average(&self) -> f64 {
        f64::from(self.sum() * 2) / 10.0
    }
}

/// Round to one decimal place, halves away from zero.
#[must_use]
pub fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
