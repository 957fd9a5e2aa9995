use anyhow::Context;
use ppgis_core::enums::{FeedbackMode, IssueTag};
use ppgis_core::geo::Coordinates;
use ppgis_core::responses::SubmitResponse;
use ppgis_session::{Enrichment, Submission, SubmissionDraft};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::{LocationArgs, SubmitArgs};
use crate::commands::shared::parse::{parse_enum, parse_ratings};
use crate::context::AppContext;
use crate::output::output;

/// Handle `ppgis submit`.
///
/// Opens the form at the given location, submits the draft, and by default
/// waits for the background annotation before printing.
pub async fn handle(
    args: &SubmitArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    open_form(&args.location, ctx)?;
    let draft = build_draft(args)?;

    let Submission {
        observation,
        enrichment,
    } = match ctx.session.submit(&draft).await {
        Ok(submission) => submission,
        Err(error) if error.is_rejection() => {
            tracing::debug!(%error, mode = %draft.mode, "draft rejected");
            return Err(anyhow::Error::new(error).context("nothing was submitted"));
        }
        Err(error) => return Err(error.into()),
    };

    let response = if args.no_wait {
        SubmitResponse {
            observation,
            enriched: false,
        }
    } else {
        let outcome = enrichment.await.context("annotation task failed")?;
        let id = observation.id.clone();
        let observation = ctx.session.observation(&id).await.unwrap_or(observation);
        SubmitResponse {
            observation,
            enriched: outcome == Enrichment::Patched,
        }
    };

    output(&response, flags.format)
}

fn open_form(location: &LocationArgs, ctx: &mut AppContext) -> anyhow::Result<()> {
    match (&location.poi, location.lat, location.lng) {
        (Some(poi), _, _) => {
            ctx.session.click_poi(poi)?;
        }
        (None, Some(lat), Some(lng)) => {
            ctx.session.click_map(Coordinates::new(lat, lng))?;
        }
        _ => anyhow::bail!("either --poi or both --lat and --lng are required"),
    }
    Ok(())
}

fn build_draft(args: &SubmitArgs) -> anyhow::Result<SubmissionDraft> {
    let mode: FeedbackMode = parse_enum(&args.mode, "mode")?;
    match mode {
        FeedbackMode::Value => {
            if !args.tags.is_empty() {
                tracing::warn!("--tag only applies to issue reports; ignoring");
            }
            let ratings = args
                .ratings
                .as_deref()
                .map(parse_ratings)
                .transpose()?
                .unwrap_or_default();
            Ok(SubmissionDraft::value(args.text.clone(), ratings))
        }
        FeedbackMode::Issue => {
            if args.ratings.is_some() {
                tracing::warn!("--ratings only applies to value assessments; ignoring");
            }
            let tags = args
                .tags
                .iter()
                .map(|raw| parse_enum::<IssueTag>(raw, "tag"))
                .collect::<anyhow::Result<Vec<_>>>()?;
            Ok(SubmissionDraft::issue(args.text.clone(), tags))
        }
    }
}

#[cfg(test)]
mod tests {
    use ppgis_config::PpgisConfig;
    use ppgis_core::ratings::Ratings;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::cli::{ColorMode, OutputFormat};

    fn args(mode: &str) -> SubmitArgs {
        SubmitArgs {
            location: LocationArgs {
                lat: Some(27.64),
                lng: Some(117.95),
                poi: None,
            },
            mode: mode.to_string(),
            text: "Bins overflowing".to_string(),
            ratings: Some("1,2,3,4,5".to_string()),
            tags: vec!["poor-sanitation".to_string(), "noise".to_string()],
            no_wait: false,
        }
    }

    #[test]
    fn value_draft_keeps_ratings_and_drops_tags() {
        let draft = build_draft(&args("value")).expect("draft should build");
        assert_eq!(draft.mode, FeedbackMode::Value);
        assert_eq!(draft.ratings, Ratings::new(1, 2, 3, 4, 5).unwrap());
        assert!(draft.tags.is_empty());
    }

    #[test]
    fn issue_draft_parses_tags() {
        let draft = build_draft(&args("issue")).expect("draft should build");
        assert_eq!(draft.mode, FeedbackMode::Issue);
        assert_eq!(draft.tags, vec![IssueTag::PoorSanitation, IssueTag::Noise]);
    }

    #[tokio::test]
    async fn rejected_draft_inserts_nothing() {
        let mut ctx = AppContext::init(PpgisConfig::default()).expect("context should build");
        let flags = GlobalFlags {
            format: OutputFormat::Json,
            limit: None,
            quiet: true,
            verbose: false,
            color: ColorMode::Never,
        };
        let mut blank = args("value");
        blank.text = "   ".to_string();

        let err = handle(&blank, &mut ctx, &flags)
            .await
            .expect_err("blank value assessment should be rejected");

        assert_eq!(err.to_string(), "nothing was submitted");
        assert!(
            err.downcast_ref::<ppgis_session::SessionError>()
                .is_some_and(ppgis_session::SessionError::is_rejection)
        );
        assert_eq!(ctx.session.observations().await.len(), 2);
    }

    #[test]
    fn unknown_mode_is_an_error() {
        let err = build_draft(&args("praise")).expect_err("should fail");
        assert!(err.to_string().contains("invalid mode 'praise'"));
    }
}
