//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Extracts request data (JSON body, URL params)
//! 2. Delegates to `TransactionService`
//! 3. Returns HTTP response (JSON, status code)

/// Service health endpoint
pub mod health;
/// Transaction CRUD endpoints
pub mod transactions;
