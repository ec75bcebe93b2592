//! HTTP layer - axum router and JSON request handlers.
//!
//! This module provides the web interface for the `RentDesk` application.
//! Handlers are deliberately thin: deserialize the request, call into
//! [`crate::core`], serialize the result. All domain rules live in core.

/// Per-entity request handlers
pub mod handlers;

use crate::errors::{Error, Result};
use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
};
use sea_orm::DatabaseConnection;
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Shared state available to all request handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection for all database operations
    pub database: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` with the given database connection.
    #[must_use]
    pub const fn new(database: DatabaseConnection) -> Self {
        Self { database }
    }
}

/// Builds the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::dashboard::show))
        .route(
            "/properties",
            get(handlers::property::list).post(handlers::property::create),
        )
        .route("/properties/{id}", get(handlers::property::detail))
        .route(
            "/properties/{id}/units",
            post(handlers::unit::create_under_property),
        )
        .route(
            "/units",
            get(handlers::unit::list).post(handlers::unit::quick_add),
        )
        .route(
            "/tenants",
            get(handlers::tenant::list).post(handlers::tenant::create),
        )
        .route(
            "/leases",
            get(handlers::lease::list).post(handlers::lease::create),
        )
        .route("/leases/new", get(handlers::lease::prefill))
        .route(
            "/payments",
            get(handlers::payment::list).post(handlers::payment::create),
        )
        .route("/payments/new", get(handlers::payment::prefill))
        .route(
            "/expenses",
            get(handlers::expense::list).post(handlers::expense::create),
        )
        .route(
            "/tickets",
            get(handlers::ticket::list).post(handlers::ticket::create),
        )
        .route("/tickets/{id}", patch(handlers::ticket::update))
        .route(
            "/visitors",
            get(handlers::visitor::list).post(handlers::visitor::check_in),
        )
        .route("/visitors/{id}/checkout", post(handlers::visitor::check_out))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Binds the listener and serves the application until shutdown.
pub async fn run_server(addr: &str, database: DatabaseConnection) -> Result<()> {
    let app = build_router(AppState::new(database));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    /// Human-readable error message
    error: String,
    /// The rejected field, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    field: Option<&'static str>,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation { field, message } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: message.clone(),
                    field: Some(*field),
                },
            ),
            Self::InvalidAmount { amount } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorBody {
                    error: format!("invalid amount: {amount}"),
                    field: Some("amount"),
                },
            ),
            Self::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                ErrorBody {
                    error: self.to_string(),
                    field: None,
                },
            ),
            _ => {
                tracing::error!("Internal error handling request: {self}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorBody {
                        error: "internal server error".to_string(),
                        field: None,
                    },
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
