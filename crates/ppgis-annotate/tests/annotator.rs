//! Façade behaviour against a scripted in-process backend.

use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::Utc;
use ppgis_annotate::{
    AnnotateError, AnnotationRequest, Annotator, FALLBACK_ANNOTATION, GenerateRequest,
    GenerativeBackend, REPORT_EMPTY, REPORT_FAILED, REPORT_NO_DATA, ResponseFormat,
};
use ppgis_core::catalog::seed_observations;
use ppgis_core::enums::{IssueTag, PointType};
use ppgis_core::ratings::Ratings;
use pretty_assertions::assert_eq;

#[derive(Default)]
struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<String, AnnotateError>>>,
    seen: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedBackend {
    fn replying(replies: Vec<Result<String, AnnotateError>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            seen: Mutex::default(),
        }
    }

    fn seen(&self) -> Vec<GenerateRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl GenerativeBackend for ScriptedBackend {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, AnnotateError> {
        self.seen.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(AnnotateError::EmptyResponse))
    }
}

fn value_request() -> AnnotationRequest {
    AnnotationRequest {
        text: "Great view over the stream".into(),
        point_type: PointType::UserAdded,
        ratings: Some(Ratings::new(8, 9, 5, 4, 7).unwrap()),
        issue_tags: vec![],
    }
}

#[tokio::test]
async fn successful_annotation_is_returned() {
    let annotator = Annotator::new(ScriptedBackend::replying(vec![Ok(
        r#"{"annotation": "Scenic riverside value; add viewing platforms."}"#.into(),
    )]));

    let patch = annotator.annotate(&value_request()).await;

    assert_eq!(
        patch.annotation.as_deref(),
        Some("Scenic riverside value; add viewing platforms.")
    );
    let seen = annotator.backend().seen();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].format, ResponseFormat::AnnotationJson);
    assert!(seen[0].prompt.contains("Great view over the stream"));
}

#[tokio::test]
async fn transport_failure_degrades_to_fallback() {
    let annotator = Annotator::new(ScriptedBackend::replying(vec![Err(AnnotateError::Api {
        status: 500,
        message: "internal".into(),
    })]));

    let patch = annotator.annotate(&value_request()).await;
    assert_eq!(patch.annotation.as_deref(), Some(FALLBACK_ANNOTATION));
}

#[tokio::test]
async fn malformed_payload_degrades_to_fallback() {
    let annotator = Annotator::new(ScriptedBackend::replying(vec![Ok(
        "Sure! Here is my analysis.".into(),
    )]));

    let patch = annotator.annotate(&value_request()).await;
    assert_eq!(patch.annotation.as_deref(), Some(FALLBACK_ANNOTATION));
}

#[tokio::test]
async fn empty_payload_degrades_to_fallback() {
    let annotator = Annotator::new(ScriptedBackend::replying(vec![Err(
        AnnotateError::EmptyResponse,
    )]));

    let request = AnnotationRequest {
        text: String::new(),
        point_type: PointType::IssueReport,
        ratings: None,
        issue_tags: vec![IssueTag::SafetyHazard],
    };
    let patch = annotator.annotate(&request).await;
    assert_eq!(patch.annotation.as_deref(), Some(FALLBACK_ANNOTATION));
}

#[tokio::test]
async fn report_on_empty_collection_skips_backend() {
    let annotator = Annotator::new(ScriptedBackend::default());
    let report = annotator.community_report(&[]).await;
    assert_eq!(report, REPORT_NO_DATA);
    assert!(annotator.backend().seen().is_empty());
}

#[tokio::test]
async fn report_returns_model_text() {
    let annotator = Annotator::new(ScriptedBackend::replying(vec![Ok(
        "1. Scenery\n2. Sanitation\n3. More bins".into(),
    )]));
    let seeds = seed_observations(Utc::now());

    let report = annotator.community_report(&seeds).await;

    assert_eq!(report, "1. Scenery\n2. Sanitation\n3. More bins");
    let seen = annotator.backend().seen();
    assert_eq!(seen[0].format, ResponseFormat::Text);
    assert!(seen[0].prompt.contains("Tianyou Peak"));
}

#[tokio::test]
async fn report_failures_map_to_fixed_messages() {
    let seeds = seed_observations(Utc::now());

    let empty = Annotator::new(ScriptedBackend::replying(vec![Err(
        AnnotateError::EmptyResponse,
    )]));
    assert_eq!(empty.community_report(&seeds).await, REPORT_EMPTY);

    let failing = Annotator::new(ScriptedBackend::replying(vec![Err(
        AnnotateError::RateLimited {
            retry_after_secs: 60,
        },
    )]));
    assert_eq!(failing.community_report(&seeds).await, REPORT_FAILED);
}
