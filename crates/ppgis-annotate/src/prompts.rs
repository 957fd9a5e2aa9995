//! Prompt construction for per-observation annotations and community reports.

use ppgis_core::entities::Observation;
use ppgis_core::enums::{IssueTag, PointType};
use ppgis_core::ratings::{RatingDimension, Ratings};

/// What the annotation call needs to know about a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotationRequest {
    pub text: String,
    pub point_type: PointType,
    pub ratings: Option<Ratings>,
    pub issue_tags: Vec<IssueTag>,
}

impl AnnotationRequest {
    #[must_use]
    pub fn from_observation(observation: &Observation) -> Self {
        Self {
            text: observation.text.clone(),
            point_type: observation.point_type,
            ratings: observation.ratings,
            issue_tags: observation.issue_tags.clone(),
        }
    }
}

const PERSONA: &str = "You are a professional urban-planning AI assistant.";

/// Prompt for a single submission. Issue reports ask for a remediation
/// suggestion; value assessments ask for an analysis of the place's value.
#[must_use]
pub fn annotation_prompt(request: &AnnotationRequest) -> String {
    if request.point_type == PointType::IssueReport {
        let tags = if request.issue_tags.is_empty() {
            String::from("none")
        } else {
            join_tags(&request.issue_tags, ", ")
        };
        format!(
            "{PERSONA}\n\
             A resident submitted an [Issue report] on the PPGIS platform.\n\
             \n\
             Problem description: \"{}\"\n\
             Issue tags: {tags}\n\
             \n\
             From a city-management or spatial-optimisation perspective, give one short \
             remediation suggestion or solution for this problem.",
            request.text
        )
    } else {
        let ratings = request.ratings.unwrap_or_default();
        let scores = RatingDimension::ALL
            .into_iter()
            .map(|dimension| format!("- {}: {}", dimension.label(), ratings.get(dimension)))
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "{PERSONA}\n\
             A resident submitted a [Value assessment] of a place.\n\
             \n\
             Assessment: \"{}\"\n\
             \n\
             Scores (0-10):\n\
             {scores}\n\
             \n\
             Based on the scores and the text, give one short professional planning analysis \
             of this place's value characteristics.",
            request.text
        )
    }
}

/// One digest line per observation, as fed to the report prompt.
#[must_use]
pub fn digest(observations: &[Observation]) -> String {
    observations
        .iter()
        .map(digest_line)
        .collect::<Vec<_>>()
        .join("\n")
}

fn digest_line(observation: &Observation) -> String {
    let name = observation.target_name.as_deref().unwrap_or("-");
    if observation.is_issue() {
        format!(
            "- [{}] {name} (tags: {}) text: {}",
            observation.point_type.label(),
            join_tags(&observation.issue_tags, ","),
            observation.text
        )
    } else {
        format!(
            "- [{}] {name} (avg: {:.1}) text: {}",
            observation.point_type.label(),
            observation.average_score,
            observation.text
        )
    }
}

/// Prompt for the administrative summary over the whole collection.
#[must_use]
pub fn report_prompt(observations: &[Observation]) -> String {
    format!(
        "Based on the following feedback from a PPGIS community participatory-planning \
         platform, write a brief executive summary for urban planners.\n\
         Analyse the current area's:\n\
         1. Main value characteristics (what do residents like?)\n\
         2. Main problems (what do residents complain about?)\n\
         3. Improvement suggestions\n\
         \n\
         Community feedback:\n\
         {}",
        digest(observations)
    )
}

fn join_tags(tags: &[IssueTag], separator: &str) -> String {
    tags.iter()
        .map(|tag| tag.label())
        .collect::<Vec<_>>()
        .join(separator)
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use ppgis_core::catalog::seed_observations;

    use super::*;

    #[test]
    fn issue_prompt_lists_tags() {
        let request = AnnotationRequest {
            text: "Bins overflowing".into(),
            point_type: PointType::IssueReport,
            ratings: None,
            issue_tags: vec![IssueTag::PoorSanitation, IssueTag::Noise],
        };
        let prompt = annotation_prompt(&request);
        assert!(prompt.contains("[Issue report]"));
        assert!(prompt.contains("Issue tags: Poor sanitation, Noise nuisance"));
        assert!(prompt.contains("\"Bins overflowing\""));
    }

    #[test]
    fn issue_prompt_without_tags_says_none() {
        let request = AnnotationRequest {
            text: "Broken bench".into(),
            point_type: PointType::IssueReport,
            ratings: None,
            issue_tags: vec![],
        };
        assert!(annotation_prompt(&request).contains("Issue tags: none"));
    }

    #[test]
    fn value_prompt_lists_every_dimension() {
        let request = AnnotationRequest {
            text: "Lovely tea terraces".into(),
            point_type: PointType::UserAdded,
            ratings: Some(Ratings::new(1, 2, 3, 4, 5).unwrap()),
            issue_tags: vec![],
        };
        let prompt = annotation_prompt(&request);
        assert!(prompt.contains("[Value assessment]"));
        assert!(prompt.contains("- Recreation: 1"));
        assert!(prompt.contains("- Environment: 2"));
        assert!(prompt.contains("- Heritage: 3"));
        assert!(prompt.contains("- Economy: 4"));
        assert!(prompt.contains("- Attachment: 5\n\nBased on the scores"));
        assert!(prompt.starts_with(&format!("{PERSONA}\nA resident submitted")));
    }

    #[test]
    fn digest_has_one_line_per_observation() {
        let seeds = seed_observations(Utc::now());
        let text = digest(&seeds);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("- [Value assessment] Tianyou Peak (avg: 7.8)"));
        assert!(lines[1].starts_with(
            "- [Issue report] Near the scenic area entrance (tags: Poor sanitation,Damaged facilities)"
        ));
    }

    #[test]
    fn report_prompt_embeds_digest() {
        let seeds = seed_observations(Utc::now());
        let prompt = report_prompt(&seeds);
        assert!(prompt.contains("3. Improvement suggestions"));
        assert!(prompt.ends_with(&digest(&seeds)));
    }
}
