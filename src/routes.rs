//! Route table.
//!
//! All routes are declared here and the router is built once at startup.
//! The transaction routes are served both at the root and under `/api/v1`.

use axum::{
    Router,
    routing::{delete, get, post},
};
use tower_http::trace::TraceLayer;

use crate::{AppState, handlers};

/// Transaction resource routes.
fn transaction_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/transactions",
            get(handlers::transactions::list_transactions),
        )
        .route(
            "/transactions",
            post(handlers::transactions::create_transaction),
        )
        .route(
            "/transactions/{id}",
            get(handlers::transactions::get_transaction),
        )
        .route(
            "/transactions/{id}",
            delete(handlers::transactions::delete_transaction),
        )
}

/// Build the application router with all routes and middleware.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .merge(transaction_routes())
        .nest("/api/v1", transaction_routes())
        // Per-request tracing spans
        .layer(TraceLayer::new_for_http())
        // Share the service with all handlers via State extraction
        .with_state(state)
}
