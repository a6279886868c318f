//! Data models representing stored records and their wire formats.

/// Transaction record and request/response types
pub mod transaction;
