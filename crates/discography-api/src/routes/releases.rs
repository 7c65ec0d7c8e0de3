//! Routes for releases. Reads return releases joined with their performer.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use discography_catalog::domain::models::{ComposedRelease, Release, ReleaseId};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::{self, ReleasePayload};

/// GET /
#[instrument(skip(state))]
async fn list_releases(
    State(state): State<AppState>,
) -> Result<Json<Vec<ComposedRelease>>, ApiError> {
    let releases = state.releases.list_composed().await?;
    Ok(Json(releases))
}

/// GET /{id}
#[instrument(skip(state, id))]
async fn get_release(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<ComposedRelease>, ApiError> {
    let Path(raw) = id?;
    let id = ReleaseId(validation::path_id(raw)?);

    let release = state.releases.get_composed(id).await?;

    Ok(Json(release))
}

/// POST /
#[instrument(skip(state, payload))]
async fn create_release(
    State(state): State<AppState>,
    payload: Result<Json<ReleasePayload>, JsonRejection>,
) -> Result<Json<Release>, ApiError> {
    let Json(payload) = payload?;
    let release = payload.into_release()?;

    info!(
        release_id = %release.id,
        performer_id = %release.performer_id,
        "storing release"
    );
    state.releases.create(release.clone()).await;

    Ok(Json(release))
}

/// DELETE /{id}
#[instrument(skip(state, id))]
async fn delete_release(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(raw) = id?;
    let id = ReleaseId(validation::path_id(raw)?);

    info!(release_id = %id, "deleting release");
    state.releases.delete_by_id(id).await;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for releases.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_releases).post(create_release))
        .route("/{id}", get(get_release).delete(delete_release))
}
