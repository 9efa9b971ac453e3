//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for wallets, categories, transactions, reports,
//!   budgets, the dashboard, and the AI advisor
//! - The shared application state
//!
//! The system is single-user: the API trusts its caller and carries no
//! per-operation authorization.

pub mod routes;

use axum::Router;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use kasku_shared::AdvisorService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// AI advisor client.
    pub advisor: Arc<AdvisorService>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
