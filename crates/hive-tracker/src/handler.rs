//! Request handlers for the tracker
//!
//! Validates incoming requests, calls into the registry and formats the
//! result. Method checks happen before the body or query is looked at.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::response::Json;
use axum::routing::{get, post};
use axum::Router;
use hive_core::{FileName, FindResponse, RegisterRequest, Registry, RegistryStats};

use crate::error::{TrackerError, TrackerResult};

/// Router for the registration and lookup routes
///
/// axum answers HEAD with the GET handler unless HEAD is routed itself, so
/// the GET routes send it to the rejection explicitly.
pub fn router() -> Router<Arc<Registry>> {
    Router::new()
        .route("/register", post(register).fallback(only_post))
        .route("/find", get(find).head(only_get).fallback(only_get))
        .route("/stats", get(stats).head(only_get).fallback(only_get))
}

/// Decode the first JSON value of a registration body
///
/// Anything after the first value is ignored. A `null` body counts as an
/// empty registration.
fn decode_registration(body: &[u8]) -> TrackerResult<RegisterRequest> {
    let first = serde_json::Deserializer::from_slice(body)
        .into_iter::<Option<RegisterRequest>>()
        .next();

    match first {
        Some(Ok(req)) => Ok(req.unwrap_or_default()),
        Some(Err(e)) => Err(TrackerError::BadRequest(e.to_string())),
        None => Err(TrackerError::BadRequest("empty request body".to_string())),
    }
}

/// First non-empty `file` value of a lookup query
fn file_param(params: Result<Query<Vec<(String, String)>>, QueryRejection>) -> Option<FileName> {
    let Query(pairs) = params.ok()?;
    pairs
        .into_iter()
        .find(|(key, _)| key == "file")
        .map(|(_, value)| value)
        .filter(|file| !file.is_empty())
}

/// Handle a registration
async fn register(State(registry): State<Arc<Registry>>, body: Bytes) -> TrackerResult<String> {
    let req = decode_registration(&body).inspect_err(|e| {
        tracing::warn!("Failed to decode registration: {}", e);
    })?;

    let count = registry.register(&req.peer, &req.files);
    tracing::info!("Register request: peer {:?} with {} files", req.peer, count);

    Ok(format!("Peer {} registered with {} files\n", req.peer, count))
}

/// Handle a lookup
async fn find(
    State(registry): State<Arc<Registry>>,
    params: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> TrackerResult<Json<FindResponse>> {
    let file = file_param(params).ok_or_else(|| {
        tracing::warn!("Find request without file parameter");
        TrackerError::BadRequest("file query param required".to_string())
    })?;

    let peers = registry.find(&file).inspect_err(|_| {
        tracing::info!("Find request: {:?} not found", file);
    })?;
    tracing::info!("Find request: {:?} held by {} peers", file, peers.len());

    Ok(Json(FindResponse { peers }))
}

/// Report registry statistics
async fn stats(State(registry): State<Arc<Registry>>) -> Json<RegistryStats> {
    Json(registry.stats())
}

async fn only_post() -> TrackerError {
    TrackerError::MethodNotAllowed("Only POST allowed")
}

async fn only_get() -> TrackerError {
    TrackerError::MethodNotAllowed("Only GET allowed")
}
