//! The seam between the annotation façade and a text-generation model.

use std::future::Future;

use crate::error::AnnotateError;

/// Shape the model is asked to answer in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    /// Free-form text.
    Text,
    /// A JSON object with a single required `annotation` string.
    AnnotationJson,
}

/// One prompt sent to the model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateRequest {
    pub prompt: String,
    pub format: ResponseFormat,
}

impl GenerateRequest {
    #[must_use]
    pub fn text(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            format: ResponseFormat::Text,
        }
    }

    #[must_use]
    pub fn annotation_json(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            format: ResponseFormat::AnnotationJson,
        }
    }
}

/// A text-generation model reachable from the annotation façade.
///
/// Implementations return the raw model text; interpreting it (JSON parsing,
/// fallbacks) is the façade's job.
pub trait GenerativeBackend: Send + Sync {
    fn generate(
        &self,
        request: &GenerateRequest,
    ) -> impl Future<Output = Result<String, AnnotateError>> + Send;
}
