use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{IssueTag, PointType};
use crate::geo::{Coordinates, Located};
use crate::ratings::Ratings;

/// A single public-participation submission: a value assessment of a place
/// or a report of a problem at it.
///
/// `ratings` is present only for rated classifications and `issue_tags` is
/// non-empty only for issue reports. `average_score` is always derived from
/// `ratings` by the constructors and is `0.0` for issue reports.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Observation {
    pub id: String,
    pub point_type: PointType,
    pub target_name: Option<String>,
    pub text: String,
    pub coords: Coordinates,
    pub created_at: DateTime<Utc>,
    pub author: String,
    pub ratings: Option<Ratings>,
    #[serde(default)]
    pub issue_tags: Vec<IssueTag>,
    pub average_score: f64,
    /// AI-generated annotation. Starts as a placeholder and is patched once
    /// enrichment resolves.
    pub annotation: Option<String>,
}

impl Observation {
    /// A value assessment of a user-chosen spot or an official POI.
    ///
    /// `point_type` must be a rated classification; an issue-report type is
    /// coerced to [`PointType::UserAdded`].
    #[allow(clippy::too_many_arguments)]
    #[must_use]
    pub fn assessment(
        id: String,
        point_type: PointType,
        target_name: Option<String>,
        text: String,
        coords: Coordinates,
        author: String,
        ratings: Ratings,
        created_at: DateTime<Utc>,
    ) -> Self {
        let point_type = if point_type.is_rated() {
            point_type
        } else {
            PointType::UserAdded
        };
        Self {
            id,
            point_type,
            target_name,
            text,
            coords,
            created_at,
            author,
            ratings: Some(ratings),
            issue_tags: Vec::new(),
            average_score: ratings.average(),
            annotation: None,
        }
    }

    /// A problem report. Carries tags instead of ratings.
    #[must_use]
    pub fn issue_report(
        id: String,
        target_name: Option<String>,
        text: String,
        coords: Coordinates,
        author: String,
        issue_tags: Vec<IssueTag>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            point_type: PointType::IssueReport,
            target_name,
            text,
            coords,
            created_at,
            author,
            ratings: None,
            issue_tags,
            average_score: 0.0,
            annotation: None,
        }
    }

    #[must_use]
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Re-derive `average_score` from `ratings`, discarding whatever value
    /// the record arrived with.
    pub fn recompute_average(&mut self) {
        self.average_score = self.ratings.as_ref().map_or(0.0, Ratings::average);
    }

    #[must_use]
    pub const fn is_issue(&self) -> bool {
        matches!(self.point_type, PointType::IssueReport)
    }

    /// Merge the fields carried by `patch`. Absent fields leave the
    /// observation untouched.
    pub fn apply(&mut self, patch: AnnotationPatch) {
        if let Some(annotation) = patch.annotation {
            self.annotation = Some(annotation);
        }
    }
}

impl Located for Observation {
    fn coords(&self) -> Coordinates {
        self.coords
    }
}

/// Partial update produced by the annotation service.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AnnotationPatch {
    pub annotation: Option<String>,
}

impl AnnotationPatch {
    #[must_use]
    pub fn annotation(text: impl Into<String>) -> Self {
        Self {
            annotation: Some(text.into()),
        }
    }
}
