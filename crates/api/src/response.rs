//! Shared response types for API handlers.

use serde::Serialize;

/// Standard `{ "message": ... }` body for delete confirmations and
/// error responses.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
