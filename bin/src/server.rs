//! Axum router and handlers for the statistics service.
//!
//! Transport concerns only: JSON shapes, symbol pre-validation, and the
//! mapping from engine errors to HTTP status codes. All statistics logic
//! lives in the engine crates.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use tracing::{debug, info};

use nazca_lib::limits::MAX_SYMBOL_LENGTH;
use nazca_lib::{NazcaError, Stats, SymbolRegistry};

/// Shared handler state: the process-wide symbol registry.
#[derive(Debug, Clone, Default)]
pub(crate) struct AppState {
    registry: Arc<SymbolRegistry>,
}

impl AppState {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

/// Builds the service router.
pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/add_batch/", post(add_batch))
        .route("/stats/", get(get_stats))
        .with_state(state)
}

/// Binds and runs the HTTP service until the process exits.
pub(crate) async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let addr = format!("{host}:{port}");
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("listening on {addr}");
    axum::serve(listener, router(AppState::new())).await?;
    Ok(())
}

/// Body of `POST /add_batch/`.
#[derive(Debug, Deserialize)]
struct BatchRequest {
    symbol: String,
    values: Vec<f64>,
}

/// Query string of `GET /stats/`.
#[derive(Debug, Deserialize)]
struct StatsQuery {
    symbol: String,
    k: u32,
}

/// Structured error response: `{"detail": "..."}` with a 4xx status.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    detail: String,
}

impl ApiError {
    fn bad_request(detail: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            detail: detail.into(),
        }
    }
}

impl From<NazcaError> for ApiError {
    fn from(err: NazcaError) -> Self {
        let status = match err {
            NazcaError::UnknownSymbol(_) | NazcaError::NoData => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };
        Self {
            status,
            detail: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({ "detail": self.detail }));
        (self.status, body).into_response()
    }
}

/// `POST /add_batch/` - append a batch of values for a symbol.
async fn add_batch(
    State(state): State<AppState>,
    Json(request): Json<BatchRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    validate_symbol(&request.symbol)?;
    state.registry.append(&request.symbol, &request.values)?;
    debug!(
        symbol = %request.symbol,
        count = request.values.len(),
        "batch accepted"
    );
    Ok(Json(serde_json::json!({
        "status": "success",
        "message": format!(
            "Added {} data points for {}",
            request.values.len(),
            request.symbol
        ),
    })))
}

/// `GET /stats/?symbol=SYM&k=N` - statistics over the trailing `10^k` window.
async fn get_stats(
    State(state): State<AppState>,
    Query(query): Query<StatsQuery>,
) -> Result<Json<Stats>, ApiError> {
    let stats = state.registry.query(&query.symbol, query.k)?;
    Ok(Json(stats))
}

/// Symbol shape check done at the transport boundary; the engine treats
/// symbols as opaque.
fn validate_symbol(symbol: &str) -> Result<(), ApiError> {
    if symbol.is_empty() || symbol.len() > MAX_SYMBOL_LENGTH {
        return Err(ApiError::bad_request(format!(
            "Symbol must be non-empty and not exceed {MAX_SYMBOL_LENGTH} characters"
        )));
    }
    Ok(())
}
