//! Transaction ledger: a REST API for creating, reading, listing and
//! deleting financial transactions.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Storage**: PostgreSQL with sqlx, or an in-memory store when no
//!   database is configured
//! - **Format**: JSON requests/responses
//!
//! Requests flow handler → [`services::TransactionService`] →
//! [`repository::TransactionRepository`].

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

use services::TransactionService;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub transactions: TransactionService,
}

impl AppState {
    pub fn new(transactions: TransactionService) -> Self {
        Self { transactions }
    }
}

pub use routes::router;
