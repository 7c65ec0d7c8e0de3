//! Domain error types.

use thiserror::Error;

use crate::entity::{Entity, EntityKind};

/// Top-level domain error type.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// A lookup by identity found nothing.
    #[error("{kind} not found: {id}")]
    NotFound {
        /// The kind of entity that was sought.
        kind: EntityKind,
        /// The identity that was sought.
        id: u64,
    },
}

impl DomainError {
    /// Builds a `NotFound` for the entity type `E` and identity `id`.
    #[must_use]
    pub fn not_found<E: Entity>(id: E::Id) -> Self {
        Self::NotFound {
            kind: E::KIND,
            id: id.into(),
        }
    }

    /// Returns the kind of entity whose lookup failed.
    #[must_use]
    pub fn kind(&self) -> EntityKind {
        match self {
            Self::NotFound { kind, .. } => *kind,
        }
    }
}
