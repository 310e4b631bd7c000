//! Local HTTP server for running the handler outside Lambda
//!
//! Provides /health and /item?item_id=... endpoints. Query parameters are
//! wrapped into the same event shape Lambda delivers, so requests go through
//! the same parsing and resolution path.

use crate::error::HandlerError;
use crate::handler::Services;
use crate::request::parse_event;
use crate::resolver::ResolutionSource;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{header, HeaderName, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tracing::{error, info};

pub type SharedState = Arc<Services>;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
}

#[derive(Deserialize)]
struct ItemQuery {
    item_id: Option<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for HandlerError {
    fn into_response(self) -> Response {
        if let HandlerError::Internal(msg) = &self {
            error!(error = %msg, "Item lookup failed");
        }
        let status = self.status_code();
        (
            status,
            Json(ErrorResponse {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

/// Create the HTTP router
pub fn create_router(state: SharedState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/item", get(get_item))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Start the HTTP server
pub async fn start_server(state: SharedState, port: u16) -> std::io::Result<()> {
    let router = create_router(state);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    info!("Starting HTTP server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router).await
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn get_item(
    State(state): State<SharedState>,
    query: Result<Query<ItemQuery>, QueryRejection>,
) -> Result<Response, HandlerError> {
    let Query(query) = query.map_err(|e| HandlerError::BadRequest(e.body_text()))?;
    let event = json!({ "queryStringParameters": { "item_id": query.item_id } });
    let item_id = parse_event(&event)?;

    let resolution = state.resolver().resolve(item_id.as_str()).await?;
    let cache_header = match resolution.source {
        ResolutionSource::Cache => "HIT",
        ResolutionSource::Remote => "MISS",
    };

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/json"),
            (HeaderName::from_static("x-cache"), cache_header),
        ],
        resolution.body,
    )
        .into_response())
}
