//! Routes for performers.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::{Json, Router, routing::get};
use discography_catalog::domain::models::{Performer, PerformerId};
use tracing::{info, instrument};

use crate::error::ApiError;
use crate::state::AppState;
use crate::validation::{self, PerformerPayload};

/// GET /
#[instrument(skip(state))]
async fn list_performers(State(state): State<AppState>) -> Json<Vec<Performer>> {
    Json(state.performers.list_all().await)
}

/// GET /{id}
#[instrument(skip(state, id))]
async fn get_performer(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<Json<Performer>, ApiError> {
    let Path(raw) = id?;
    let id = PerformerId(validation::path_id(raw)?);

    let performer = state.performers.get_by_id(id).await?;

    Ok(Json(performer))
}

/// POST /
#[instrument(skip(state, payload))]
async fn create_performer(
    State(state): State<AppState>,
    payload: Result<Json<PerformerPayload>, JsonRejection>,
) -> Result<Json<Performer>, ApiError> {
    let Json(payload) = payload?;
    let performer = payload.into_performer()?;

    info!(performer_id = %performer.id, "storing performer");
    state.performers.create(performer.clone()).await;

    Ok(Json(performer))
}

/// DELETE /{id}
#[instrument(skip(state, id))]
async fn delete_performer(
    State(state): State<AppState>,
    id: Result<Path<u64>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(raw) = id?;
    let id = PerformerId(validation::path_id(raw)?);

    info!(performer_id = %id, "deleting performer");
    state.performers.delete_by_id(id).await;

    Ok(StatusCode::NO_CONTENT)
}

/// Returns the router for performers.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_performers).post(create_performer))
        .route("/{id}", get(get_performer).delete(delete_performer))
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use discography_catalog::domain::models::Release;
    use discography_test_support::{EmptyStore, RecordingStore, StoreCall};
    use serde_json::Value;
    use tower::ServiceExt;

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body_bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body_bytes).unwrap()
        };
        (status, json)
    }

    #[tokio::test]
    async fn test_get_performer_returns_404_when_store_is_empty() {
        // Arrange
        let app = router().with_state(AppState::new(
            Arc::new(EmptyStore),
            Arc::new(EmptyStore),
        ));
        let request = Request::builder()
            .uri("/3")
            .body(Body::empty())
            .unwrap();

        // Act
        let (status, json) = send(app, request).await;

        // Assert
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "performer_not_found");
    }

    #[tokio::test]
    async fn test_create_performer_stores_validated_record() {
        // Arrange
        let store = Arc::new(RecordingStore::<Performer>::new(Vec::new()));
        let app = router().with_state(AppState::new(
            store.clone(),
            Arc::new(RecordingStore::<Release>::new(Vec::new())),
        ));
        let body = serde_json::json!({ "id": 6, "name": "Fiona" });
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap();

        // Act
        let (status, json) = send(app, request).await;

        // Assert
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json, body);
        assert_eq!(
            store.calls(),
            vec![StoreCall::Put(Performer::new(6, "Fiona"))]
        );
    }

    #[tokio::test]
    async fn test_create_performer_with_blank_name_never_reaches_store() {
        // Arrange
        let store = Arc::new(RecordingStore::<Performer>::new(Vec::new()));
        let app = router().with_state(AppState::new(store.clone(), Arc::new(EmptyStore)));
        let request = Request::builder()
            .method("POST")
            .uri("/")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"id": 6, "name": ""}"#))
            .unwrap();

        // Act
        let (status, json) = send(app, request).await;

        // Assert
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json["error"], "invalid_request");
        assert!(store.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_performer_returns_204_and_forwards_delete() {
        let store = Arc::new(RecordingStore::<Performer>::new(Vec::new()));
        let app = router().with_state(AppState::new(store.clone(), Arc::new(EmptyStore)));
        let request = Request::builder()
            .method("DELETE")
            .uri("/42")
            .body(Body::empty())
            .unwrap();

        let (status, _) = send(app, request).await;

        assert_eq!(status, StatusCode::NO_CONTENT);
        assert_eq!(store.calls(), vec![StoreCall::Delete(PerformerId(42))]);
    }
}
