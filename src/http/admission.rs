//! Admission-control middleware.
//!
//! Every inbound request passes through this layer exactly once before any
//! handler runs. A rejected request is answered immediately with 429 and
//! never reaches the downstream stack.

use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use tracing::debug;

use crate::ratelimit::{Clock, LimitKey, LimiterRegistry};

/// Derives the limiting key for a request.
///
/// Swapping this implementation is the seam for a future per-client
/// policy; the rest of the admission path is key-agnostic.
pub trait KeyPolicy: Send + Sync {
    /// Limiting key for `request`.
    fn key_for(&self, request: &Request) -> LimitKey;
}

/// Single shared budget for all traffic.
pub struct GlobalKey;

impl KeyPolicy for GlobalKey {
    fn key_for(&self, _request: &Request) -> LimitKey {
        LimitKey::from("global")
    }
}

/// Shared state for the admission middleware.
#[derive(Clone)]
pub struct AdmissionState {
    registry: Arc<LimiterRegistry>,
    clock: Arc<dyn Clock>,
    policy: Arc<dyn KeyPolicy>,
}

impl AdmissionState {
    /// Create admission state limiting all traffic under one global key.
    pub fn new(registry: Arc<LimiterRegistry>, clock: Arc<dyn Clock>) -> Self {
        Self {
            registry,
            clock,
            policy: Arc::new(GlobalKey),
        }
    }

    /// Replace the key derivation policy.
    pub fn with_policy(mut self, policy: Arc<dyn KeyPolicy>) -> Self {
        self.policy = policy;
        self
    }
}

/// Admit or reject the request before it reaches any handler.
///
/// The registry lookup and the admission check are separate steps; the
/// counter's critical section never spans the downstream `next` call.
pub async fn admission_middleware(
    State(state): State<AdmissionState>,
    request: Request,
    next: Next,
) -> Response {
    let key = state.policy.key_for(&request);
    let counter = state.registry.get_or_create(&key);

    if !counter.try_admit(state.clock.now_millis()) {
        debug!(key = %key, "Request rejected by rate limiter");
        return (
            StatusCode::TOO_MANY_REQUESTS,
            Json(json!({ "error": "Too many requests" })),
        )
            .into_response();
    }

    next.run(request).await
}
