//! Error types for the API client.

use crate::types::RateLimit;

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request never produced a usable response: network failure, an
    /// invalid URL, or a body that could not be decoded. Details are logged;
    /// there is no envelope to inspect.
    #[error("request failed")]
    RequestFailed,
    /// The API answered with a non-success status.
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// A non-success answer from the API, carrying the response metadata so the
/// caller can decide whether to retry.
#[derive(thiserror::Error, Debug, Clone)]
#[error("API returned status {status}: {message}")]
pub struct ApiError {
    /// HTTP status code of the response.
    pub status: u16,
    /// Short error name from the response body (e.g. "Unauthorized").
    /// Empty when the body was not decodable.
    pub error: String,
    /// Human-readable message from the response body, or a snippet of the
    /// raw body when it was not decodable.
    pub message: String,
    /// Rate-limit counters from the response headers. Populated on failures
    /// too, whenever the headers are present.
    pub ratelimit: RateLimit,
}
