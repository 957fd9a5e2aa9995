use std::sync::Arc;

use chrono::Utc;
use ppgis_annotate::{AnnotationRequest, Annotator, GenerativeBackend};
use ppgis_config::{GeolocationConfig, PpgisConfig};
use ppgis_core::catalog::{ANNOTATION_PLACEHOLDER, FLY_TO_ZOOM, official_pois, seed_observations};
use ppgis_core::entities::{Observation, PointOfInterest};
use ppgis_core::enums::{AppView, Basemap, FeedbackMode};
use ppgis_core::geo::{Coordinates, GeoBounds};
use ppgis_core::ids::{PREFIX_OBSERVATION, generate_id};
use ppgis_core::responses::{
    BasemapInfo, FeedResponse, FlyTo, LocateResponse, ReportResponse, SearchResultsResponse,
    StatsResponse, ViewportResponse,
};
use tokio::sync::RwLock;
use tokio::task::JoinHandle;

use crate::draft::{Placement, SubmissionDraft};
use crate::error::{Rejection, SessionError};
use crate::locate::{Geolocator, LocateOutcome, Locator};
use crate::stats;
use crate::store::ObservationStore;

/// Per-session settings drawn from [`PpgisConfig`].
#[derive(Debug, Clone)]
pub struct SessionSettings {
    /// Label stamped on every submission.
    pub author: String,
    pub geolocation: GeolocationConfig,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self::from(&PpgisConfig::default())
    }
}

impl From<&PpgisConfig> for SessionSettings {
    fn from(config: &PpgisConfig) -> Self {
        Self {
            author: config.general.author.clone(),
            geolocation: config.geolocation.clone(),
        }
    }
}

/// How a background enrichment ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Enrichment {
    /// The observation received its annotation.
    Patched,
    /// The observation was gone by the time the annotation arrived.
    Missing,
}

/// A submission that passed validation and was inserted.
#[derive(Debug)]
pub struct Submission {
    /// The observation as inserted, still carrying the placeholder.
    pub observation: Observation,
    /// Background enrichment. Dropping the handle detaches the task.
    pub enrichment: JoinHandle<Enrichment>,
}

/// Application state for one user session.
///
/// UI state (view, viewport, form placement, basemap, camera) is owned
/// directly and mutated through `&mut self`. The observation collection is
/// shared with background enrichment tasks behind an async `RwLock`; no lock
/// is held across a model call.
pub struct Session<B> {
    annotator: Arc<Annotator<B>>,
    store: Arc<RwLock<ObservationStore>>,
    pois: Vec<PointOfInterest>,
    author: String,
    view: AppView,
    viewport: Option<GeoBounds>,
    placement: Option<Placement>,
    basemap: Basemap,
    fly_to: Option<FlyTo>,
    geolocator: Arc<Geolocator>,
}

impl<B: GenerativeBackend + 'static> Session<B> {
    /// A session loaded with the official POIs and seed observations.
    #[must_use]
    pub fn new(annotator: Annotator<B>, settings: SessionSettings) -> Self {
        let seeds = seed_observations(Utc::now());
        let store = ObservationStore::from_observations(seeds).unwrap_or_default();
        Self::assemble(annotator, settings, official_pois(), store)
    }

    /// A session over caller-supplied reference data.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DuplicateId`] if two observations share an ID
    /// and [`SessionError::Core`] if one carries an out-of-range rating.
    /// Stored average scores are re-derived from the ratings.
    pub fn with_data(
        annotator: Annotator<B>,
        settings: SessionSettings,
        pois: Vec<PointOfInterest>,
        observations: Vec<Observation>,
    ) -> Result<Self, SessionError> {
        let store = ObservationStore::from_observations(observations)?;
        Ok(Self::assemble(annotator, settings, pois, store))
    }

    fn assemble(
        annotator: Annotator<B>,
        settings: SessionSettings,
        pois: Vec<PointOfInterest>,
        store: ObservationStore,
    ) -> Self {
        Self {
            annotator: Arc::new(annotator),
            store: Arc::new(RwLock::new(store)),
            pois,
            author: settings.author,
            view: AppView::default(),
            viewport: None,
            placement: None,
            basemap: Basemap::default(),
            fly_to: None,
            geolocator: Arc::new(Geolocator::new(settings.geolocation)),
        }
    }

    // -----------------------------------------------------------------------
    // Views
    // -----------------------------------------------------------------------

    #[must_use]
    pub const fn view(&self) -> AppView {
        self.view
    }

    pub fn set_view(&mut self, view: AppView) {
        if self.view != view {
            tracing::debug!(from = %self.view, to = %view, "view changed");
            self.view = view;
        }
    }

    /// The central "add" action: back to the map so a location can be picked.
    pub fn add_action(&mut self) {
        self.set_view(AppView::Map);
    }

    // -----------------------------------------------------------------------
    // Placement
    // -----------------------------------------------------------------------

    /// Open the form at a free map location.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Core`] for coordinates off the globe.
    pub fn click_map(&mut self, coords: Coordinates) -> Result<&Placement, SessionError> {
        coords.validate()?;
        Ok(self.placement.insert(Placement::at(coords)))
    }

    /// Open the form on an official POI.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownPoi`] if no POI has this ID.
    pub fn click_poi(&mut self, poi_id: &str) -> Result<&Placement, SessionError> {
        let poi = self
            .pois
            .iter()
            .find(|poi| poi.id == poi_id)
            .ok_or_else(|| SessionError::UnknownPoi(poi_id.to_string()))?;
        let placement = Placement::from_poi(poi);
        Ok(self.placement.insert(placement))
    }

    #[must_use]
    pub const fn placement(&self) -> Option<&Placement> {
        self.placement.as_ref()
    }

    /// Close the form, discarding the placement.
    pub fn close_form(&mut self) {
        self.placement = None;
    }

    // -----------------------------------------------------------------------
    // Submission
    // -----------------------------------------------------------------------

    /// Validate, insert optimistically, and start background enrichment.
    ///
    /// The observation is in the collection with [`ANNOTATION_PLACEHOLDER`]
    /// before this returns. The spawned task patches it by ID when the model
    /// answers; if the ID is gone by then the patch is dropped. On success
    /// the form closes.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Rejected`] when there is no placement or the
    /// draft fails validation; nothing is inserted in that case.
    pub async fn submit(&mut self, draft: &SubmissionDraft) -> Result<Submission, SessionError> {
        let placement = self.placement.as_ref().ok_or(Rejection::NoPlacement)?;
        draft.validate()?;

        let observation = self.build_observation(placement, draft)?;
        self.store.write().await.insert(observation.clone())?;
        tracing::debug!(
            id = %observation.id,
            point_type = %observation.point_type,
            "observation inserted"
        );

        let enrichment = self.spawn_enrichment(&observation);
        self.placement = None;
        Ok(Submission {
            observation,
            enrichment,
        })
    }

    fn build_observation(
        &self,
        placement: &Placement,
        draft: &SubmissionDraft,
    ) -> Result<Observation, SessionError> {
        let id = generate_id(PREFIX_OBSERVATION)?;
        let target_name = placement.target_name(draft.mode);
        let text = draft.text.trim().to_string();
        let now = Utc::now();

        let observation = match draft.mode {
            FeedbackMode::Issue => Observation::issue_report(
                id,
                target_name,
                text,
                placement.coords,
                self.author.clone(),
                draft.tags.clone(),
                now,
            ),
            FeedbackMode::Value => Observation::assessment(
                id,
                placement.point_type(draft.mode),
                target_name,
                text,
                placement.coords,
                self.author.clone(),
                draft.ratings,
                now,
            ),
        };
        Ok(observation.with_annotation(ANNOTATION_PLACEHOLDER))
    }

    fn spawn_enrichment(&self, observation: &Observation) -> JoinHandle<Enrichment> {
        let annotator = Arc::clone(&self.annotator);
        let store = Arc::clone(&self.store);
        let request = AnnotationRequest::from_observation(observation);
        let id = observation.id.clone();

        tokio::spawn(async move {
            let patch = annotator.annotate(&request).await;
            if store.write().await.patch(&id, patch) {
                tracing::debug!(%id, "observation enriched");
                Enrichment::Patched
            } else {
                tracing::debug!(%id, "observation gone before enrichment resolved");
                Enrichment::Missing
            }
        })
    }

    // -----------------------------------------------------------------------
    // Collection reads
    // -----------------------------------------------------------------------

    pub async fn observation(&self, id: &str) -> Option<Observation> {
        self.store.read().await.get(id).cloned()
    }

    pub async fn observations(&self) -> Vec<Observation> {
        self.store.read().await.all().to_vec()
    }

    /// The list view: newest first.
    pub async fn feed(&self, limit: Option<usize>) -> FeedResponse {
        self.store.read().await.feed(limit, |_| true)
    }

    /// The list view narrowed to the viewport and to observations `keep`
    /// accepts. Before the first viewport report every observation is in view.
    pub async fn visible_feed(
        &self,
        limit: Option<usize>,
        keep: impl Fn(&Observation) -> bool,
    ) -> FeedResponse {
        let viewport = self.viewport;
        self.store.read().await.feed(limit, |observation| {
            viewport.is_none_or(|bounds| bounds.contains(observation.coords)) && keep(observation)
        })
    }

    pub async fn stats(&self) -> StatsResponse {
        stats::summarize(self.store.read().await.all())
    }

    /// Administrative summary over the whole collection.
    pub async fn report(&self) -> ReportResponse {
        let snapshot = self.observations().await;
        let report = self.annotator.community_report(&snapshot).await;
        ReportResponse {
            observations: u32::try_from(snapshot.len()).unwrap_or(u32::MAX),
            report,
        }
    }

    // -----------------------------------------------------------------------
    // Viewport
    // -----------------------------------------------------------------------

    /// Record the bounds the map reports after a pan or zoom.
    pub fn set_viewport(&mut self, bounds: GeoBounds) {
        self.viewport = Some(bounds);
    }

    #[must_use]
    pub const fn viewport(&self) -> Option<GeoBounds> {
        self.viewport
    }

    /// POIs inside the viewport; all of them before the first report.
    #[must_use]
    pub fn visible_pois(&self) -> Vec<PointOfInterest> {
        match self.viewport {
            Some(bounds) => bounds.filter(&self.pois),
            None => self.pois.clone(),
        }
    }

    /// Observations inside the viewport; all of them before the first report.
    pub async fn visible_observations(&self) -> Vec<Observation> {
        let store = self.store.read().await;
        match self.viewport {
            Some(bounds) => bounds.filter(store.all()),
            None => store.all().to_vec(),
        }
    }

    pub async fn viewport_response(&self) -> ViewportResponse {
        ViewportResponse {
            bounds: self.viewport,
            observations: self.visible_observations().await,
            pois: self.visible_pois(),
        }
    }

    // -----------------------------------------------------------------------
    // Map panel
    // -----------------------------------------------------------------------

    #[must_use]
    pub fn pois(&self) -> &[PointOfInterest] {
        &self.pois
    }

    /// Case-insensitive name search. A blank query matches nothing.
    #[must_use]
    pub fn search_pois(&self, query: &str) -> Vec<PointOfInterest> {
        self.pois
            .iter()
            .filter(|poi| poi.name_matches(query))
            .cloned()
            .collect()
    }

    /// Search and, when `select_first` is set, fly to the first hit.
    pub fn search(&mut self, query: &str, select_first: bool) -> SearchResultsResponse {
        let results = self.search_pois(query);
        let fly_to = if select_first {
            results
                .first()
                .map(|poi| poi.id.clone())
                .and_then(|id| self.select_search_result(&id).ok())
        } else {
            None
        };
        SearchResultsResponse {
            query: query.to_string(),
            total_results: u32::try_from(results.len()).unwrap_or(u32::MAX),
            results,
            fly_to,
        }
    }

    /// Fly the camera to a search hit.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::UnknownPoi`] if no POI has this ID.
    pub fn select_search_result(&mut self, poi_id: &str) -> Result<FlyTo, SessionError> {
        let coords = self
            .pois
            .iter()
            .find(|poi| poi.id == poi_id)
            .map(|poi| poi.coords)
            .ok_or_else(|| SessionError::UnknownPoi(poi_id.to_string()))?;
        Ok(self.fly_to(coords))
    }

    fn fly_to(&mut self, coords: Coordinates) -> FlyTo {
        let command = FlyTo {
            coords,
            zoom: FLY_TO_ZOOM,
        };
        self.fly_to = Some(command);
        command
    }

    /// Consume the pending camera command, if any.
    pub fn take_fly_to(&mut self) -> Option<FlyTo> {
        self.fly_to.take()
    }

    #[must_use]
    pub const fn basemap(&self) -> Basemap {
        self.basemap
    }

    pub fn set_basemap(&mut self, basemap: Basemap) {
        tracing::debug!(%basemap, "basemap selected");
        self.basemap = basemap;
    }

    /// Every basemap with the active one flagged.
    #[must_use]
    pub fn basemaps(&self) -> Vec<BasemapInfo> {
        Basemap::ALL
            .into_iter()
            .map(|key| BasemapInfo::describe(key, self.basemap))
            .collect()
    }

    // -----------------------------------------------------------------------
    // Geolocation
    // -----------------------------------------------------------------------

    /// Shared handle for polling the notice and in-flight state.
    #[must_use]
    pub fn geolocator(&self) -> Arc<Geolocator> {
        Arc::clone(&self.geolocator)
    }

    /// Ask `locator` for the device position and fly there on success.
    pub async fn locate<L: Locator>(&mut self, locator: &L) -> LocateResponse {
        let outcome = self.geolocator.locate(locator).await;
        let fly_to = match outcome {
            LocateOutcome::Located(coords) => Some(self.fly_to(coords)),
            LocateOutcome::Failed(_) | LocateOutcome::Busy => None,
        };
        LocateResponse {
            location: self.geolocator.last_fix(),
            fly_to,
            notice: self.geolocator.notice().map(|notice| notice.message()),
        }
    }
}
