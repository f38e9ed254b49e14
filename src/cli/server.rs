//! HTTP server exposing openings, stages and candidates

use axum::{
    async_trait,
    extract::{FromRequestParts, Query, State},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::error;

use crate::error::{Error, Result};
use crate::messages;
use crate::remote::HiringApi;
use crate::service::HiringService;

/// State shared across handlers
pub struct AppState<A> {
    /// Data facade
    pub service: HiringService<A>,
    /// Token forwarded to the platform on every call
    pub access_token: String,
}

impl<A> AppState<A> {
    /// Create handler state
    pub fn new(service: HiringService<A>, access_token: impl Into<String>) -> Self {
        Self {
            service,
            access_token: access_token.into(),
        }
    }
}

/// Query string pairs in request order
///
/// A repeated parameter resolves to its first value.
#[derive(Debug)]
struct QueryParams(Vec<(String, String)>);

impl QueryParams {
    fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for QueryParams {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> std::result::Result<Self, ApiError> {
        let Query(pairs) = Query::<Vec<(String, String)>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError(Error::invalid_param("query", e.body_text())))?;
        Ok(Self(pairs))
    }
}

/// Error body `{ "error": "..." }`, 400 for bad input and 500 otherwise
#[derive(Debug)]
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = if self.0.is_client_error() {
            StatusCode::BAD_REQUEST
        } else {
            error!(error = %self.0, "request failed");
            StatusCode::INTERNAL_SERVER_ERROR
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

type ApiResult = std::result::Result<Json<Value>, ApiError>;

/// Build the router
pub fn router<A: HiringApi + 'static>(state: AppState<A>) -> Router {
    // Any origin may call
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/candidates", get(list_candidates::<A>))
        .route("/job-openings", get(list_openings::<A>))
        .route("/stages", get(list_stages::<A>))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve<A: HiringApi + 'static>(state: AppState<A>, addr: SocketAddr) -> Result<()> {
    let app = router(state);

    tracing::info!("Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::config(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::config(format!("Server error: {e}")))?;

    Ok(())
}

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "healthy", "message": messages::HEALTHY }))
}

/// Candidates of one opening, optionally limited to some stages
async fn list_candidates<A: HiringApi>(
    State(state): State<Arc<AppState<A>>>,
    query: QueryParams,
) -> ApiResult {
    let opening_id = required(query.get("opening_id"), "opening_id")?;
    let stage_ids = parse_stage_ids(query.get("stage_ids").unwrap_or_default())?;

    let table = state
        .service
        .get_candidates(&opening_id, &state.access_token, Some(stage_ids.as_slice()))
        .await?;

    if table.is_empty() {
        return Ok(Json(json!({ "candidates": [], "total": 0 })));
    }

    let total = table.len();
    Ok(Json(json!({
        "candidates": table,
        "total": total,
        "opening_id": opening_id,
        "message": messages::candidates_found(total)
    })))
}

/// Active job openings
async fn list_openings<A: HiringApi>(State(state): State<Arc<AppState<A>>>) -> ApiResult {
    let table = state
        .service
        .list_active_openings(&state.access_token)
        .await?;

    if table.is_empty() {
        return Ok(Json(json!({ "openings": [], "total": 0 })));
    }

    let total = table.len();
    Ok(Json(json!({
        "openings": table,
        "total": total,
        "message": messages::openings_found(total)
    })))
}

/// Active stages of one opening
async fn list_stages<A: HiringApi>(
    State(state): State<Arc<AppState<A>>>,
    query: QueryParams,
) -> ApiResult {
    let opening_id = required(query.get("opening_id"), "opening_id")?;

    let table = state
        .service
        .list_active_stages(&opening_id, &state.access_token)
        .await?;

    if table.is_empty() {
        return Ok(Json(json!({ "stages": [], "total": 0 })));
    }

    let total = table.len();
    Ok(Json(json!({
        "stages": table,
        "total": total,
        "opening_id": opening_id,
        "message": messages::stages_found(total)
    })))
}

/// A present, non-blank query parameter
fn required(value: Option<&str>, name: &str) -> Result<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
        .ok_or_else(|| Error::missing_param(name))
}

/// Parse `1, 2,3` into stage ids; blank entries are ignored
pub(crate) fn parse_stage_ids(raw: &str) -> Result<Vec<i64>> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<i64>().map_err(|_| {
                Error::invalid_param(
                    "stage_ids",
                    "stage_ids must be a comma-separated list of integers",
                )
            })
        })
        .collect()
}
