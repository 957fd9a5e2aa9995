//! In-memory observation collection.

use std::collections::HashMap;

use ppgis_core::entities::{AnnotationPatch, Observation};
use ppgis_core::responses::FeedResponse;

use crate::error::SessionError;

/// Ordered collection of observations, addressable by ID.
///
/// Insertion order is preserved; the feed reads it back to front. There is no
/// deletion path outside tests, so the index never needs compaction.
#[derive(Debug, Default)]
pub struct ObservationStore {
    items: Vec<Observation>,
    index: HashMap<String, usize>,
}

impl ObservationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store from seed data, keeping the given order.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DuplicateId`] if two seeds share an ID.
    pub fn from_observations(
        observations: impl IntoIterator<Item = Observation>,
    ) -> Result<Self, SessionError> {
        let mut store = Self::new();
        for observation in observations {
            store.insert(observation)?;
        }
        Ok(store)
    }

    /// Append an observation. Its `average_score` is re-derived from its
    /// ratings.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::DuplicateId`] if the ID is already present and
    /// [`SessionError::Core`] if a rating is out of range.
    pub fn insert(&mut self, mut observation: Observation) -> Result<(), SessionError> {
        if self.index.contains_key(&observation.id) {
            return Err(SessionError::DuplicateId(observation.id));
        }
        if let Some(ratings) = &observation.ratings {
            ratings.validate()?;
        }
        observation.recompute_average();
        self.index.insert(observation.id.clone(), self.items.len());
        self.items.push(observation);
        Ok(())
    }

    /// Merge `patch` into the observation with `id`.
    ///
    /// Returns `false` when no such observation exists; the patch is dropped.
    pub fn patch(&mut self, id: &str, patch: AnnotationPatch) -> bool {
        let Some(&position) = self.index.get(id) else {
            return false;
        };
        self.items[position].apply(patch);
        true
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Observation> {
        self.index.get(id).map(|&position| &self.items[position])
    }

    /// All observations in insertion order.
    #[must_use]
    pub fn all(&self) -> &[Observation] {
        &self.items
    }

    /// Observations accepted by `keep`, newest first, optionally capped.
    ///
    /// `total` counts every match, including those past the cap.
    #[must_use]
    pub fn feed(&self, limit: Option<usize>, keep: impl Fn(&Observation) -> bool) -> FeedResponse {
        let matches: Vec<&Observation> = self.items.iter().rev().filter(|&o| keep(o)).collect();
        FeedResponse {
            total: u32::try_from(matches.len()).unwrap_or(u32::MAX),
            observations: matches
                .iter()
                .take(limit.unwrap_or(usize::MAX))
                .map(|&o| o.clone())
                .collect(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn remove(&mut self, id: &str) -> Option<Observation> {
        let position = self.index.remove(id)?;
        let removed = self.items.remove(position);
        for slot in self.index.values_mut() {
            if *slot > position {
                *slot -= 1;
            }
        }
        Some(removed)
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use ppgis_core::catalog::seed_observations;
    use ppgis_core::ratings::Ratings;
    use pretty_assertions::assert_eq;

    use super::*;

    fn seeded() -> ObservationStore {
        ObservationStore::from_observations(seed_observations(Utc::now())).unwrap()
    }

    #[test]
    fn patch_touches_only_the_target() {
        let mut store = seeded();
        let before = store.get("obs-00000002").cloned();

        assert!(store.patch("obs-00000001", AnnotationPatch::annotation("updated")));

        assert_eq!(
            store.get("obs-00000001").unwrap().annotation.as_deref(),
            Some("updated")
        );
        assert_eq!(store.get("obs-00000002").cloned(), before);
    }

    #[test]
    fn patch_for_missing_id_is_noop() {
        let mut store = seeded();
        let before = store.all().to_vec();

        assert!(!store.patch("obs-deadbeef", AnnotationPatch::annotation("x")));
        assert_eq!(store.all(), before.as_slice());
    }

    #[test]
    fn empty_patch_keeps_annotation() {
        let mut store = seeded();
        let before = store.get("obs-00000001").unwrap().annotation.clone();
        assert!(store.patch("obs-00000001", AnnotationPatch::default()));
        assert_eq!(store.get("obs-00000001").unwrap().annotation, before);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut store = seeded();
        let dup = store.get("obs-00000001").cloned().unwrap();
        assert!(matches!(
            store.insert(dup),
            Err(SessionError::DuplicateId(id)) if id == "obs-00000001"
        ));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn insert_rederives_average_score() {
        let mut store = ObservationStore::new();
        let mut forged = seed_observations(Utc::now()).remove(0);
        forged.average_score = 10.0;

        store.insert(forged).unwrap();
        assert_eq!(store.get("obs-00000001").unwrap().average_score, 7.8);
    }

    #[test]
    fn insert_rejects_out_of_range_ratings() {
        let mut store = ObservationStore::new();
        let mut forged = seed_observations(Utc::now()).remove(0);
        forged.ratings = Some(Ratings::uniform(11));

        assert!(matches!(store.insert(forged), Err(SessionError::Core(_))));
        assert!(store.is_empty());
    }

    #[test]
    fn feed_is_newest_first() {
        let store = seeded();
        let ids: Vec<String> = store
            .feed(None, |_| true)
            .observations
            .into_iter()
            .map(|o| o.id)
            .collect();
        assert_eq!(ids, vec!["obs-00000002", "obs-00000001"]);

        let capped = store.feed(Some(1), |_| true);
        assert_eq!(capped.total, 2);
        assert_eq!(capped.observations.len(), 1);
    }

    #[test]
    fn feed_total_counts_only_matches() {
        let store = seeded();
        let issues = store.feed(None, Observation::is_issue);
        assert_eq!(issues.total, 1);
        assert_eq!(issues.observations[0].id, "obs-00000002");
    }

    #[test]
    fn remove_keeps_index_consistent() {
        let mut store = seeded();
        assert!(store.remove("obs-00000001").is_some());
        assert_eq!(store.get("obs-00000002").unwrap().id, "obs-00000002");
        assert!(store.get("obs-00000001").is_none());
    }
}
