//! # ppgis-session
//!
//! Application state for a PPGIS session: the observation collection, the
//! submission form, viewport filtering, the list and stats views, POI search,
//! basemap selection, and geolocation.
//!
//! Submissions follow an optimistic flow. [`Session::submit`] validates the
//! draft, inserts the observation with a placeholder annotation, and spawns a
//! background task that asks the [`Annotator`](ppgis_annotate::Annotator)
//! for the real one. When that task resolves it patches the observation by
//! ID; if the observation is no longer present the patch is dropped.

mod draft;
mod error;
pub mod locate;
mod session;
pub mod stats;
mod store;

pub use draft::{Placement, SubmissionDraft};
pub use error::{Rejection, SessionError};
pub use locate::{GeolocationError, Geolocator, LocateOutcome, LocationNotice, Locator};
pub use session::{Enrichment, Session, SessionSettings, Submission};
pub use store::ObservationStore;
