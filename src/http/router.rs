//! Router wiring for the dog API.

use std::sync::Arc;

use axum::routing::{get, post};
use axum::{middleware, Router};

use crate::dogs::DogService;

use super::admission::{admission_middleware, AdmissionState};
use super::handlers::{create_dog, list_dogs, ping};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    /// Dog record service
    pub dogs: Arc<DogService>,
}

/// Build the application router.
///
/// The admission layer wraps every route, so the limiter sees each
/// request before any handler or extractor runs.
pub fn app_router(dogs: Arc<DogService>, admission: AdmissionState) -> Router {
    let state = AppState { dogs };

    Router::new()
        .route("/ping", get(ping))
        .route("/dogs", get(list_dogs))
        .route("/dog", post(create_dog))
        .layer(middleware::from_fn_with_state(
            admission,
            admission_middleware,
        ))
        .with_state(state)
}
