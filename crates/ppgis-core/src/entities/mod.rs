//! Entity structs for PPGIS domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON
//! output and schema validation.

mod observation;
mod poi;

pub use observation::{AnnotationPatch, Observation};
pub use poi::PointOfInterest;
