//! # ppgis-annotate
//!
//! Generative-AI annotation for PPGIS submissions.
//!
//! [`Annotator`] is the façade the session talks to. It never returns an
//! error: every backend failure (transport, status, malformed or empty
//! payload, missing API key) is logged at `warn` and replaced by a fixed
//! fallback string. The backend is pluggable through [`GenerativeBackend`];
//! [`GeminiClient`] is the production implementation.

mod backend;
mod error;
mod gemini;
mod http;
pub mod prompts;

pub use backend::{GenerateRequest, GenerativeBackend, ResponseFormat};
pub use error::AnnotateError;
pub use gemini::GeminiClient;
pub use prompts::AnnotationRequest;

use ppgis_core::entities::{AnnotationPatch, Observation};
use serde::Deserialize;

/// Substituted when a per-observation annotation cannot be produced.
pub const FALLBACK_ANNOTATION: &str = "Analysis is temporarily unavailable.";

/// Returned by the report call for an empty collection.
pub const REPORT_NO_DATA: &str = "No data available to generate a report.";

/// Returned by the report call when the model answers with nothing.
pub const REPORT_EMPTY: &str = "Unable to generate a report.";

/// Returned by the report call on any other failure.
pub const REPORT_FAILED: &str = "An error occurred while generating the report.";

#[derive(Deserialize)]
struct AnnotationPayload {
    annotation: String,
}

/// Façade producing annotations and community reports.
pub struct Annotator<B> {
    backend: B,
}

impl<B: GenerativeBackend> Annotator<B> {
    #[must_use]
    pub const fn new(backend: B) -> Self {
        Self { backend }
    }

    #[must_use]
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Produce a one-sentence annotation for a submission.
    ///
    /// Always returns a patch carrying an annotation: the model's answer on
    /// success, [`FALLBACK_ANNOTATION`] otherwise.
    pub async fn annotate(&self, request: &AnnotationRequest) -> AnnotationPatch {
        match self.try_annotate(request).await {
            Ok(annotation) => AnnotationPatch::annotation(annotation),
            Err(error) => {
                tracing::warn!(%error, point_type = %request.point_type, "annotation failed, using fallback");
                AnnotationPatch::annotation(FALLBACK_ANNOTATION)
            }
        }
    }

    async fn try_annotate(&self, request: &AnnotationRequest) -> Result<String, AnnotateError> {
        let prompt = prompts::annotation_prompt(request);
        let raw = self
            .backend
            .generate(&GenerateRequest::annotation_json(prompt))
            .await?;
        parse_annotation(&raw)
    }

    /// Produce an administrative summary of the whole collection.
    ///
    /// Empty input short-circuits to [`REPORT_NO_DATA`] without calling the
    /// backend.
    pub async fn community_report(&self, observations: &[Observation]) -> String {
        if observations.is_empty() {
            return REPORT_NO_DATA.to_string();
        }

        let request = GenerateRequest::text(prompts::report_prompt(observations));
        match self.backend.generate(&request).await {
            Ok(report) => report,
            Err(AnnotateError::EmptyResponse) => REPORT_EMPTY.to_string(),
            Err(error) => {
                tracing::warn!(%error, observations = observations.len(), "report generation failed");
                REPORT_FAILED.to_string()
            }
        }
    }
}

/// Interpret the model's JSON answer.
fn parse_annotation(raw: &str) -> Result<String, AnnotateError> {
    let payload: AnnotationPayload =
        serde_json::from_str(raw.trim()).map_err(|e| AnnotateError::Parse(e.to_string()))?;
    let annotation = payload.annotation.trim();
    if annotation.is_empty() {
        return Err(AnnotateError::EmptyResponse);
    }
    Ok(annotation.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_single_field_object() {
        let text = parse_annotation(r#"{"annotation": " Strong heritage value. "}"#).unwrap();
        assert_eq!(text, "Strong heritage value.");
    }

    #[test]
    fn rejects_malformed_payloads() {
        assert!(matches!(
            parse_annotation("not json"),
            Err(AnnotateError::Parse(_))
        ));
        assert!(matches!(
            parse_annotation(r#"{"analysis": "wrong key"}"#),
            Err(AnnotateError::Parse(_))
        ));
        assert!(matches!(
            parse_annotation(r#"{"annotation": ""}"#),
            Err(AnnotateError::EmptyResponse)
        ));
    }
}
