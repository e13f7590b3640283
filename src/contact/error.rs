//! Submission failures and HTTP status classification

use super::payload::{ApiReply, ServerBody};
use thiserror::Error;

pub const VALIDATION_FALLBACK: &str = "Validation error";
pub const RATE_LIMITED_MESSAGE: &str = "Too many requests. Please try again later.";
pub const SERVER_FALLBACK: &str = "Server error";
pub const TRANSPORT_MESSAGE: &str = "Failed to send message. Please try again.";

/// Why a submission did not succeed. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// 400: the server rejected the field values
    #[error("{0}")]
    Validation(String),
    /// 429
    #[error("Too many requests. Please try again later.")]
    RateLimited,
    /// Any other non-success status
    #[error("{0}")]
    Server(String),
    /// The request never produced a response
    #[error("Failed to send message. Please try again.")]
    Transport(String),
}

/// Map a status code and raw body to the outcome of a submission
pub fn classify_response(status: u16, raw_body: &str) -> Result<ApiReply, SubmitError> {
    let body = ServerBody::parse(raw_body);
    match status {
        200 | 201 => Ok(ApiReply {
            status,
            message: body.message,
        }),
        400 => Err(SubmitError::Validation(
            body.message
                .unwrap_or_else(|| VALIDATION_FALLBACK.to_string()),
        )),
        429 => Err(SubmitError::RateLimited),
        _ => Err(SubmitError::Server(
            body.message.unwrap_or_else(|| SERVER_FALLBACK.to_string()),
        )),
    }
}
