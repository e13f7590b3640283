//! Trait abstraction for the contact endpoint to enable mocking in tests

use super::error::SubmitError;
use super::payload::{ApiReply, ContactPayload};
use async_trait::async_trait;

/// Sends a contact submission and classifies the server's answer
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactApi: Send + Sync {
    /// Issue exactly one request for `payload`. No retry.
    async fn submit(&self, payload: &ContactPayload) -> Result<ApiReply, SubmitError>;
}
