//! Release composition.
//!
//! Joins each release with its performer at read time. Nothing composed is
//! stored or cached. Writes go to the release service only.

use std::sync::Arc;

use discography_core::error::DomainError;
use discography_core::service::EntityService;

use crate::domain::models::{ComposedRelease, Performer, Release, ReleaseId};

/// Produces performer-enriched release views from the two entity services.
#[derive(Clone)]
pub struct ReleaseComposition {
    releases: Arc<dyn EntityService<Release>>,
    performers: Arc<dyn EntityService<Performer>>,
}

impl ReleaseComposition {
    /// Creates a composition over the release and performer services.
    #[must_use]
    pub fn new(
        releases: Arc<dyn EntityService<Release>>,
        performers: Arc<dyn EntityService<Performer>>,
    ) -> Self {
        Self {
            releases,
            performers,
        }
    }

    /// Returns every release joined with its performer, in no particular
    /// order.
    ///
    /// Fails fast: a single dangling performer reference fails the whole
    /// call rather than dropping that release.
    ///
    /// # Errors
    ///
    /// Returns the performer's `DomainError::NotFound` for the first release
    /// whose performer no longer exists.
    pub async fn list_composed(&self) -> Result<Vec<ComposedRelease>, DomainError> {
        let releases = self.releases.list_all().await;
        let mut composed = Vec::with_capacity(releases.len());
        for release in releases {
            let performer = self.performers.get_by_id(release.performer_id).await?;
            composed.push(ComposedRelease::new(release, performer));
        }
        Ok(composed)
    }

    /// Returns one release joined with its performer.
    ///
    /// # Errors
    ///
    /// Returns a release `DomainError::NotFound` if the release is absent, or
    /// a performer `DomainError::NotFound` if its performer reference
    /// dangles.
    pub async fn get_composed(&self, id: ReleaseId) -> Result<ComposedRelease, DomainError> {
        let release = self.releases.get_by_id(id).await?;
        let performer = self.performers.get_by_id(release.performer_id).await?;
        Ok(ComposedRelease::new(release, performer))
    }

    /// Stores `release` through the release service. The performer
    /// reference is not checked.
    pub async fn create(&self, release: Release) {
        self.releases.create(release).await;
    }

    /// Deletes a release through the release service. Its performer is left
    /// in place.
    pub async fn delete_by_id(&self, id: ReleaseId) {
        self.releases.delete_by_id(id).await;
    }
}
