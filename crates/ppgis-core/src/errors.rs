//! Cross-cutting error types for PPGIS.
//!
//! Domain-specific errors (e.g., `AnnotateError`, `SessionError`) are defined
//! in their respective crates and converge into `anyhow` in `ppgis-cli`.

use thiserror::Error;

/// Errors that can be raised by any PPGIS crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// A rating fell outside the 0–10 scale.
    #[error("Rating out of range: {dimension} = {value} (expected 0..=10)")]
    RatingOutOfRange { dimension: String, value: u8 },

    /// Coordinates or bounds failed validation.
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The OS random source could not be read.
    #[error("Random source unavailable: {0}")]
    Random(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
