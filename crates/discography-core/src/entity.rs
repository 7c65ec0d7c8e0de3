//! Entity abstraction.

use std::fmt;
use std::hash::Hash;

use serde::Serialize;

/// The kinds of entity the server keeps, one store per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A performing artist.
    Performer,
    /// A release credited to a performer.
    Release,
}

impl EntityKind {
    /// Returns the lowercase name of this kind.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Performer => "performer",
            Self::Release => "release",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Trait for records that live in an entity store, keyed by their own identity.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Caller-assigned identity. Unique within one store.
    type Id: Copy + Eq + Hash + fmt::Debug + Into<u64> + Send + Sync + 'static;

    /// Which kind of entity this is.
    const KIND: EntityKind;

    /// Returns the identity this record is stored under.
    fn id(&self) -> Self::Id;
}
