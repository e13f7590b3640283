//! Contact endpoint module: wire types, HTTP client and status classification

mod client;
mod error;
mod payload;
mod traits;

pub use client::{ContactClient, DEFAULT_ENDPOINT};
pub use error::SubmitError;
pub use payload::{ApiReply, ContactPayload, DEFAULT_SOURCE};
pub use traits::ContactApi;

#[cfg(test)]
pub use error::{RATE_LIMITED_MESSAGE, TRANSPORT_MESSAGE};
#[cfg(test)]
pub use traits::MockContactApi;
