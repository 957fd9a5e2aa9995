//! Session error types.

use ppgis_core::errors::CoreError;
use thiserror::Error;

/// Why a submission was turned away before touching the collection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    /// No map or POI click opened the form.
    #[error("no location selected")]
    NoPlacement,

    /// Value assessments need a non-blank text.
    #[error("a value assessment needs a description")]
    MissingText,

    /// Issue reports need a non-blank text or at least one tag.
    #[error("an issue report needs a description or at least one tag")]
    MissingTextAndTags,

    /// A slider was outside `0..=10`.
    #[error("rating out of range: {dimension} = {value}")]
    RatingOutOfRange { dimension: String, value: u8 },
}

#[derive(Debug, Error)]
pub enum SessionError {
    /// Client-side validation refused the submission. No state changed.
    #[error("submission rejected: {0}")]
    Rejected(#[from] Rejection),

    /// Referenced POI does not exist.
    #[error("unknown point of interest: {0}")]
    UnknownPoi(String),

    /// An observation with this ID is already in the collection.
    #[error("duplicate observation id: {0}")]
    DuplicateId(String),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl SessionError {
    /// Whether this is a validation rejection the caller may silently ignore.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::Rejected(_))
    }
}
