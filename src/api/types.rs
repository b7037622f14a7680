use serde::Serialize;

/// Generic failure body returned by every handler on error.
///
/// Carries a short human-readable message and no structured error code.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
}
