//! Request payload and path validation.
//!
//! The core trusts its inputs, so every identity and payload is checked here
//! before a service is called.

use discography_catalog::domain::models::{Performer, PerformerId, Release, ReleaseId};
use serde::Deserialize;
use thiserror::Error;

/// Reasons a request is rejected before reaching the core.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is absent or null.
    #[error("{0} is required")]
    Missing(&'static str),

    /// An identity field is zero.
    #[error("{0} must be a positive integer")]
    NotPositive(&'static str),

    /// A text field is empty or whitespace.
    #[error("{0} must not be empty")]
    Blank(&'static str),
}

/// Checks that an identity taken from the path is positive.
///
/// # Errors
///
/// Returns `ValidationError::NotPositive` for zero.
pub fn path_id(raw: u64) -> Result<u64, ValidationError> {
    positive(Some(raw), "id")
}

fn positive(raw: Option<u64>, field: &'static str) -> Result<u64, ValidationError> {
    match raw {
        None => Err(ValidationError::Missing(field)),
        Some(0) => Err(ValidationError::NotPositive(field)),
        Some(id) => Ok(id),
    }
}

fn non_blank(raw: Option<String>, field: &'static str) -> Result<String, ValidationError> {
    match raw {
        None => Err(ValidationError::Missing(field)),
        Some(text) if text.trim().is_empty() => Err(ValidationError::Blank(field)),
        Some(text) => Ok(text),
    }
}

/// Request body for POST /performers.
#[derive(Debug, Deserialize)]
pub struct PerformerPayload {
    /// Caller-assigned identity.
    pub id: Option<u64>,
    /// Display name.
    pub name: Option<String>,
}

impl PerformerPayload {
    /// Validates the payload into a `Performer`.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `id` is missing or zero, or `name` is
    /// missing or blank.
    pub fn into_performer(self) -> Result<Performer, ValidationError> {
        Ok(Performer {
            id: PerformerId(positive(self.id, "id")?),
            name: non_blank(self.name, "name")?,
        })
    }
}

/// Request body for POST /releases.
#[derive(Debug, Deserialize)]
pub struct ReleasePayload {
    /// Caller-assigned identity.
    pub id: Option<u64>,
    /// Release title.
    pub title: Option<String>,
    /// The credited performer.
    pub performer_id: Option<u64>,
}

impl ReleasePayload {
    /// Validates the payload into a `Release`. The performer reference is
    /// only checked for presence, not existence.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` if `id` or `performer_id` is missing or
    /// zero, or `title` is missing or blank.
    pub fn into_release(self) -> Result<Release, ValidationError> {
        Ok(Release {
            id: ReleaseId(positive(self.id, "id")?),
            title: non_blank(self.title, "title")?,
            performer_id: PerformerId(positive(self.performer_id, "performer_id")?),
        })
    }
}
