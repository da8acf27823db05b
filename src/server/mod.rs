//! HTTP API
//!
//! Thin axum surface over the services; one route per operation, no domain
//! logic of its own. Write endpoints go through the strict store path,
//! read endpoints through the lenient one.

pub mod handlers;

use crate::app::AppState;
use crate::error::{AppError, Result};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;

/// Build the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(handlers::health))
        .route(
            "/api/daily",
            post(handlers::create_daily_entry).get(handlers::list_daily_entries),
        )
        .route("/api/daily/stats", get(handlers::daily_stats))
        .route(
            "/api/weekly",
            post(handlers::create_weekly_checklist).get(handlers::list_weekly_checklists),
        )
        .route("/api/weekly/stats", get(handlers::weekly_stats))
        .route("/api/papers", get(handlers::list_papers))
        .route("/api/summary", get(handlers::summary))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until the process is stopped
pub async fn serve(addr: SocketAddr, state: AppState) -> Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{}", addr);

    axum::serve(listener, router(state))
        .await
        .map_err(|e| AppError::Generic(format!("server error: {}", e)))
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }

        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
