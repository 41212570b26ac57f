//! Request handlers for the dog API.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;

use crate::dogs::{CreateDog, Dog, DogQuery};
use crate::error::{DogHouseError, Result};

use super::router::AppState;

/// GET /ping
pub async fn ping(State(state): State<AppState>) -> &'static str {
    state.dogs.ping()
}

/// GET /dogs
pub async fn list_dogs(
    State(state): State<AppState>,
    Query(query): Query<DogQuery>,
) -> Json<Vec<Dog>> {
    let (items, _total) = state.dogs.query_dogs(&query).await;
    Json(items)
}

/// POST /dog
pub async fn create_dog(
    State(state): State<AppState>,
    body: std::result::Result<Json<CreateDog>, JsonRejection>,
) -> Result<(StatusCode, Json<Dog>)> {
    let Json(request) = body.map_err(|_| {
        DogHouseError::Validation("Invalid JSON or empty body".to_string())
    })?;

    let created = state.dogs.create_dog(request).await?;
    Ok((StatusCode::CREATED, Json(created)))
}
