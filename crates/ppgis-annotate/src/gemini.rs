//! Gemini `generateContent` client.

use ppgis_config::GeminiConfig;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use crate::backend::{GenerateRequest, GenerativeBackend, ResponseFormat};
use crate::error::AnnotateError;
use crate::http::check_response;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentBody<'a> {
    contents: [Content<'a>; 1],
    #[serde(skip_serializing_if = "Option::is_none")]
    generation_config: Option<GenerationConfig>,
}

#[derive(Serialize)]
struct Content<'a> {
    role: &'static str,
    parts: [RequestPart<'a>; 1],
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct GenerationConfig {
    response_mime_type: &'static str,
    response_schema: Value,
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

/// Schema for the single-field annotation object.
fn annotation_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "annotation": {
                "type": "STRING",
                "description": "One professional urban-planning assessment or remediation suggestion."
            }
        },
        "required": ["annotation"]
    })
}

fn build_body(request: &GenerateRequest) -> GenerateContentBody<'_> {
    let generation_config = match request.format {
        ResponseFormat::Text => None,
        ResponseFormat::AnnotationJson => Some(GenerationConfig {
            response_mime_type: "application/json",
            response_schema: annotation_schema(),
        }),
    };
    GenerateContentBody {
        contents: [Content {
            role: "user",
            parts: [RequestPart {
                text: &request.prompt,
            }],
        }],
        generation_config,
    }
}

/// Concatenate the text parts of the first candidate.
fn extract_text(response: GenerateContentResponse) -> Result<String, AnnotateError> {
    let text: String = response
        .candidates
        .into_iter()
        .next()
        .and_then(|candidate| candidate.content)
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect()
        })
        .unwrap_or_default();

    if text.trim().is_empty() {
        return Err(AnnotateError::EmptyResponse);
    }
    Ok(text)
}

/// HTTP client for the Gemini API.
pub struct GeminiClient {
    http: reqwest::Client,
    config: GeminiConfig,
}

impl GeminiClient {
    /// Build a client from configuration.
    ///
    /// An unconfigured section still yields a client; every call on it then
    /// fails with [`AnnotateError::NotConfigured`].
    ///
    /// # Errors
    ///
    /// Returns [`AnnotateError::Http`] if the underlying `reqwest::Client`
    /// fails to build.
    pub fn new(config: GeminiConfig) -> Result<Self, AnnotateError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ppgis/", env!("CARGO_PKG_VERSION")))
            .timeout(config.timeout())
            .build()?;
        Ok(Self { http, config })
    }

    #[must_use]
    pub fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    fn url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            urlencoding::encode(&self.config.model)
        )
    }
}

impl GenerativeBackend for GeminiClient {
    async fn generate(&self, request: &GenerateRequest) -> Result<String, AnnotateError> {
        if !self.is_configured() {
            return Err(AnnotateError::NotConfigured);
        }

        let url = self.url();
        tracing::debug!(%url, format = ?request.format, "calling gemini");
        let resp = self
            .http
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .json(&build_body(request))
            .send()
            .await?;
        let resp = check_response(resp).await?;

        let body = resp.text().await?;
        let parsed: GenerateContentResponse =
            serde_json::from_str(&body).map_err(|e| AnnotateError::Parse(e.to_string()))?;
        extract_text(parsed)
    }
}
