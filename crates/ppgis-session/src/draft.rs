//! Form state: where the user clicked and what they typed.

use ppgis_core::catalog::CUSTOM_LOCATION;
use ppgis_core::entities::PointOfInterest;
use ppgis_core::enums::{FeedbackMode, IssueTag, PointType};
use ppgis_core::geo::Coordinates;
use ppgis_core::ratings::{MAX_RATING, RatingDimension, Ratings};
use serde::{Deserialize, Serialize};

use crate::error::Rejection;

/// The location an open submission form is attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub coords: Coordinates,
    /// Set when the form was opened from an official POI.
    pub poi_name: Option<String>,
}

impl Placement {
    /// Free map click.
    #[must_use]
    pub const fn at(coords: Coordinates) -> Self {
        Self {
            coords,
            poi_name: None,
        }
    }

    #[must_use]
    pub fn from_poi(poi: &PointOfInterest) -> Self {
        Self {
            coords: poi.coords,
            poi_name: Some(poi.name.clone()),
        }
    }

    #[must_use]
    pub const fn is_poi(&self) -> bool {
        self.poi_name.is_some()
    }

    /// Classification the submission will carry in `mode`.
    #[must_use]
    pub const fn point_type(&self, mode: FeedbackMode) -> PointType {
        mode.point_type(self.is_poi())
    }

    /// Display name the submission will carry in `mode`.
    #[must_use]
    pub fn target_name(&self, mode: FeedbackMode) -> Option<String> {
        match (&self.poi_name, mode) {
            (Some(name), _) => Some(name.clone()),
            (None, FeedbackMode::Value) => Some(CUSTOM_LOCATION.to_string()),
            (None, FeedbackMode::Issue) => None,
        }
    }
}

/// Contents of the submission form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDraft {
    pub mode: FeedbackMode,
    pub text: String,
    pub ratings: Ratings,
    pub tags: Vec<IssueTag>,
}

impl SubmissionDraft {
    #[must_use]
    pub fn value(text: impl Into<String>, ratings: Ratings) -> Self {
        Self {
            mode: FeedbackMode::Value,
            text: text.into(),
            ratings,
            tags: Vec::new(),
        }
    }

    #[must_use]
    pub fn issue(text: impl Into<String>, tags: impl IntoIterator<Item = IssueTag>) -> Self {
        let mut draft = Self {
            mode: FeedbackMode::Issue,
            text: text.into(),
            ..Self::default()
        };
        for tag in tags {
            if !draft.tags.contains(&tag) {
                draft.tags.push(tag);
            }
        }
        draft
    }

    /// Select or deselect a tag chip.
    pub fn toggle_tag(&mut self, tag: IssueTag) {
        if let Some(position) = self.tags.iter().position(|t| *t == tag) {
            self.tags.remove(position);
        } else {
            self.tags.push(tag);
        }
    }

    /// Whether the submit button is enabled.
    #[must_use]
    pub fn is_submittable(&self) -> bool {
        self.validate().is_ok()
    }

    /// Check the classification rules for the current mode.
    ///
    /// # Errors
    ///
    /// Returns the first [`Rejection`] that applies.
    pub fn validate(&self) -> Result<(), Rejection> {
        let has_text = !self.text.trim().is_empty();
        match self.mode {
            FeedbackMode::Value => {
                if !has_text {
                    return Err(Rejection::MissingText);
                }
                for dimension in RatingDimension::ALL {
                    let value = self.ratings.get(dimension);
                    if value > MAX_RATING {
                        return Err(Rejection::RatingOutOfRange {
                            dimension: dimension.as_str().to_string(),
                            value,
                        });
                    }
                }
                Ok(())
            }
            FeedbackMode::Issue => {
                if has_text || !self.tags.is_empty() {
                    Ok(())
                } else {
                    Err(Rejection::MissingTextAndTags)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn poi_placement() -> Placement {
        Placement {
            coords: Coordinates::new(27.6371, 117.9391),
            poi_name: Some("Tianyou Peak".into()),
        }
    }

    #[rstest]
    #[case(FeedbackMode::Value, true, PointType::OfficialPoi)]
    #[case(FeedbackMode::Value, false, PointType::UserAdded)]
    #[case(FeedbackMode::Issue, true, PointType::IssueReport)]
    #[case(FeedbackMode::Issue, false, PointType::IssueReport)]
    fn classification(#[case] mode: FeedbackMode, #[case] poi: bool, #[case] expected: PointType) {
        let placement = if poi {
            poi_placement()
        } else {
            Placement::at(Coordinates::new(27.6, 117.9))
        };
        assert_eq!(placement.point_type(mode), expected);
    }

    #[test]
    fn target_names() {
        let free = Placement::at(Coordinates::new(27.6, 117.9));
        assert_eq!(
            free.target_name(FeedbackMode::Value).as_deref(),
            Some(CUSTOM_LOCATION)
        );
        assert_eq!(free.target_name(FeedbackMode::Issue), None);
        assert_eq!(
            poi_placement().target_name(FeedbackMode::Issue).as_deref(),
            Some("Tianyou Peak")
        );
    }

    #[rstest]
    #[case("", false)]
    #[case("   ", false)]
    #[case("Nice", true)]
    fn value_needs_text(#[case] text: &str, #[case] ok: bool) {
        let draft = SubmissionDraft::value(text, Ratings::default());
        assert_eq!(draft.is_submittable(), ok);
    }

    #[test]
    fn issue_needs_text_or_tag() {
        assert_eq!(
            SubmissionDraft::issue("", []).validate(),
            Err(Rejection::MissingTextAndTags)
        );
        assert!(SubmissionDraft::issue("", [IssueTag::Noise]).is_submittable());
        assert!(SubmissionDraft::issue("Loud music", []).is_submittable());
    }

    #[test]
    fn out_of_range_rating_is_rejected() {
        let mut ratings = Ratings::default();
        ratings.historical = 11;
        assert_eq!(
            SubmissionDraft::value("Old bridge", ratings).validate(),
            Err(Rejection::RatingOutOfRange {
                dimension: "historical".into(),
                value: 11,
            })
        );
    }

    #[test]
    fn tags_toggle_and_dedupe() {
        let mut draft = SubmissionDraft::issue("", [IssueTag::Noise, IssueTag::Noise]);
        assert_eq!(draft.tags, vec![IssueTag::Noise]);
        draft.toggle_tag(IssueTag::InconvenientTransport);
        draft.toggle_tag(IssueTag::Noise);
        assert_eq!(draft.tags, vec![IssueTag::InconvenientTransport]);
    }
}
