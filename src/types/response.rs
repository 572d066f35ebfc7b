use reqwest::header::HeaderMap;
use serde::{Deserialize, Serialize};

/// Envelope returned by every call: the decoded payload plus per-call
/// metadata. Discard it once the payload has been extracted; nothing in it
/// is reused across calls.
#[derive(Debug, Clone)]
pub struct Response<T> {
    /// HTTP status code of the response.
    pub status: u16,
    /// Rate-limit counters from the response headers.
    pub ratelimit: RateLimit,
    /// Decoded payload.
    pub data: T,
}

/// Snapshot of the rate-limit headers attached to a response. Each field is
/// `None` when the service omitted the corresponding header.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    /// Points available per window (`Ratelimit-Limit`).
    pub limit: Option<i64>,
    /// Points left in the current window (`Ratelimit-Remaining`).
    pub remaining: Option<i64>,
    /// Unix epoch second when the window resets (`Ratelimit-Reset`).
    pub reset: Option<i64>,
}

impl RateLimit {
    pub(crate) fn from_headers(headers: &HeaderMap) -> Self {
        Self {
            limit: header_i64(headers, "Ratelimit-Limit"),
            remaining: header_i64(headers, "Ratelimit-Remaining"),
            reset: header_i64(headers, "Ratelimit-Reset"),
        }
    }
}

fn header_i64(headers: &HeaderMap, name: &str) -> Option<i64> {
    headers.get(name)?.to_str().ok()?.parse().ok()
}

/// Forward-only continuation token for paginated collections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Pagination {
    /// Opaque cursor, absent on the last page. The service sometimes sends
    /// an empty string instead of omitting the field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cursor: Option<String>,
}

impl Pagination {
    /// Cursor to feed back as `after` for the next page. `None` means the
    /// last page has been reached.
    pub fn next_cursor(&self) -> Option<&str> {
        self.cursor.as_deref().filter(|c| !c.is_empty())
    }
}
