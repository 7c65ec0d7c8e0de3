//! Shared application state.

use std::sync::Arc;

use discography_catalog::application::composition::ReleaseComposition;
use discography_catalog::application::entity_service::StoreBackedService;
use discography_catalog::domain::fixtures;
use discography_catalog::domain::models::{Performer, Release};
use discography_core::service::EntityService;
use discography_core::store::EntityStore;
use discography_store::InMemoryStore;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Performer entity service.
    pub performers: Arc<dyn EntityService<Performer>>,
    /// Release composition over the release and performer services.
    pub releases: ReleaseComposition,
}

impl AppState {
    /// Create new application state over the two stores.
    #[must_use]
    pub fn new(
        performer_store: Arc<dyn EntityStore<Performer>>,
        release_store: Arc<dyn EntityStore<Release>>,
    ) -> Self {
        let performers: Arc<dyn EntityService<Performer>> =
            Arc::new(StoreBackedService::new(performer_store));
        let release_service: Arc<dyn EntityService<Release>> =
            Arc::new(StoreBackedService::new(release_store));
        let releases = ReleaseComposition::new(release_service, Arc::clone(&performers));
        Self {
            performers,
            releases,
        }
    }

    /// State backed by in-memory stores holding the fixture dataset.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(
            Arc::new(InMemoryStore::with_entries(fixtures::performers())),
            Arc::new(InMemoryStore::with_entries(fixtures::releases())),
        )
    }

    /// State backed by empty in-memory stores.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(
            Arc::new(InMemoryStore::<Performer>::new()),
            Arc::new(InMemoryStore::<Release>::new()),
        )
    }
}
