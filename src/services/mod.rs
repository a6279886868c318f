//! Business logic services.
//!
//! Services contain business rules separated from HTTP handlers and storage.

pub mod transaction_service;

pub use transaction_service::TransactionService;
