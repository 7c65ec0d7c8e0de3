//! Records for the catalog.

use std::fmt;

use discography_core::entity::{Entity, EntityKind};
use serde::{Deserialize, Serialize};

/// Identity of a performer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerformerId(pub u64);

/// Identity of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReleaseId(pub u64);

impl From<PerformerId> for u64 {
    fn from(id: PerformerId) -> Self {
        id.0
    }
}

impl From<ReleaseId> for u64 {
    fn from(id: ReleaseId) -> Self {
        id.0
    }
}

impl fmt::Display for PerformerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for ReleaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A performing artist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Performer {
    /// Caller-assigned identity.
    pub id: PerformerId,
    /// Display name.
    pub name: String,
}

impl Performer {
    /// Creates a performer.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id: PerformerId(id),
            name: name.into(),
        }
    }
}

impl Entity for Performer {
    type Id = PerformerId;
    const KIND: EntityKind = EntityKind::Performer;

    fn id(&self) -> PerformerId {
        self.id
    }
}

/// A release credited to exactly one performer.
///
/// `performer_id` is not checked against the performer store on write, so it
/// may dangle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Caller-assigned identity.
    pub id: ReleaseId,
    /// Release title.
    pub title: String,
    /// The credited performer.
    pub performer_id: PerformerId,
}

impl Release {
    /// Creates a release.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>, performer_id: u64) -> Self {
        Self {
            id: ReleaseId(id),
            title: title.into(),
            performer_id: PerformerId(performer_id),
        }
    }
}

impl Entity for Release {
    type Id = ReleaseId;
    const KIND: EntityKind = EntityKind::Release;

    fn id(&self) -> ReleaseId {
        self.id
    }
}

/// Read model: a release with its full performer record, resolved per read.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComposedRelease {
    /// The release identity.
    pub id: ReleaseId,
    /// The release title.
    pub title: String,
    /// The credited performer as currently stored.
    pub performer: Performer,
}

impl ComposedRelease {
    /// Joins `release` with its resolved `performer`.
    #[must_use]
    pub fn new(release: Release, performer: Performer) -> Self {
        Self {
            id: release.id,
            title: release.title,
            performer,
        }
    }
}
