//! Transaction HTTP handlers.
//!
//! This module implements the transaction API endpoints:
//! - GET /transactions - List all transactions
//! - GET /transactions/{id} - Get a transaction by id
//! - POST /transactions - Create a transaction
//! - DELETE /transactions/{id} - Delete a transaction
//!
//! Handlers only translate between HTTP and `TransactionService`.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    AppState,
    error::AppError,
    models::transaction::{CreateTransactionRequest, TransactionResponse},
};

/// List all transactions.
///
/// # Response
///
/// - **Success (200 OK)**: Array of transactions ordered by id (may be empty)
/// - **Error (500)**: Storage failure
pub async fn list_transactions(
    State(state): State<AppState>,
) -> Result<Json<Vec<TransactionResponse>>, AppError> {
    let transactions = state.transactions.list().await?;

    let responses: Vec<TransactionResponse> = transactions.into_iter().map(Into::into).collect();

    Ok(Json(responses))
}

/// Get a transaction by id.
///
/// # Response
///
/// - **Success (200 OK)**: The transaction
/// - **Error (400)**: Id is not an integer
/// - **Error (404)**: No transaction with this id
pub async fn get_transaction(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<TransactionResponse>, AppError> {
    let id = transaction_id(path)?;
    let transaction = state.transactions.get_by_id(id).await?;

    Ok(Json(transaction.into()))
}

/// Create a transaction.
///
/// # Request Body
///
/// ```json
/// {
///   "amount": 100,
///   "currency": "USD",
///   "description": "Coffee"
/// }
/// ```
///
/// # Response (201)
///
/// ```json
/// {
///   "id": 1,
///   "amount": 100,
///   "currency": "USD",
///   "description": "Coffee",
///   "timestamp": "2025-12-21T16:00:00Z",
///   "created_at": "2025-12-21T16:00:00Z"
/// }
/// ```
///
/// Malformed JSON, missing fields and unknown fields all return 400.
/// Bodies over the size limit return 413.
pub async fn create_transaction(
    State(state): State<AppState>,
    payload: Result<Json<CreateTransactionRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(request) = payload.map_err(body_error)?;

    let transaction = state.transactions.create(request).await?;

    Ok((StatusCode::CREATED, Json(TransactionResponse::from(transaction))))
}

/// Delete a transaction.
///
/// # Response
///
/// - **Success (204 No Content)**
/// - **Error (404)**: No transaction with this id, including one already deleted
pub async fn delete_transaction(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<StatusCode, AppError> {
    let id = transaction_id(path)?;
    state.transactions.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Turn a body extraction failure into an error response.
///
/// Size-limit failures keep their 413; everything else is a validation error.
fn body_error(rejection: JsonRejection) -> AppError {
    let message = rejection.body_text();
    tracing::warn!(error = %message, "Rejected transaction body");

    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(message)
    } else {
        AppError::Validation(message)
    }
}

/// Turn a path extraction failure into a validation error.
fn transaction_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id)
        .map_err(|rejection| AppError::Validation(rejection.body_text()))
}
