//! HTTP client for the Twitch Helix API.

use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    errors::ApiError,
    query::{DropsEntitlementQuery, Query, UpdateEntitlementsRequest},
    types::{DropsEntitlements, EntitlementStatuses, RateLimit, Response},
    Error,
};

/// Production Helix API endpoint.
const HELIX_API_URL: &str = "https://api.twitch.tv/helix";

/// HTTP client for the Twitch Helix API.
///
/// Holds the credentials attached to every request and a shared transport
/// handle. The client keeps no per-call state, so one instance can be shared
/// freely and calls may be issued concurrently.
///
/// Token acquisition and refresh are the caller's job: the bearer token (App
/// Access or User OAuth) and the client id are treated as opaque header
/// values.
pub struct Client {
    base_api_url: String,
    client_id: String,
    bearer_token: String,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client pointing at the production Helix API.
    pub fn new(client_id: &str, bearer_token: &str) -> Self {
        Self::with_base_url(HELIX_API_URL, client_id, bearer_token)
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, client_id: &str, bearer_token: &str) -> Self {
        Self {
            base_api_url: base_url.to_string(),
            client_id: client_id.to_string(),
            bearer_token: bearer_token.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Replaces the transport handle, e.g. to set timeouts or a proxy.
    /// Timeout and cancellation semantics belong to the supplied client; a
    /// deadline expiring mid-call surfaces here as [`Error::RequestFailed`].
    pub fn with_http_client(mut self, http: reqwest::Client) -> Self {
        self.http = http;
        self
    }

    /// Replaces the bearer token, e.g. after an external refresh.
    pub fn set_bearer_token(&mut self, bearer_token: &str) {
        self.bearer_token = bearer_token.to_string();
    }

    fn parse_url(&self, path: &str) -> Result<Url, Error> {
        Url::parse(format!("{}{}", &self.base_api_url, path).as_str()).map_err(|e| {
            tracing::error!("Invalid URL constructed: {}", e);
            Error::RequestFailed
        })
    }

    async fn get<T, Q>(&self, path: &str, query: &Q) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned,
        Q: Query,
    {
        let url = query.add_to_url(&self.parse_url(path)?);
        self.execute(self.http.get(url)).await
    }

    async fn patch_json<T, B>(&self, path: &str, body: &B) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.parse_url(path)?;
        self.execute(self.http.patch(url).json(body)).await
    }

    /// Sends the request with auth headers attached and decodes the answer.
    /// Exactly one attempt is made; retry policy is the caller's decision.
    async fn execute<T>(&self, request: reqwest::RequestBuilder) -> Result<Response<T>, Error>
    where
        T: DeserializeOwned,
    {
        let resp = request
            .header("Client-Id", &self.client_id)
            .header(AUTHORIZATION, format!("Bearer {}", &self.bearer_token))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to reach the API: {}", e);
                Error::RequestFailed
            })?;

        let status = resp.status();
        let ratelimit = RateLimit::from_headers(resp.headers());
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::RequestFailed
        })?;

        if !status.is_success() {
            let (error, message) = match serde_json::from_str::<ApiErrorBody>(&body) {
                Ok(parsed) => (parsed.error, parsed.message),
                Err(_) => (String::new(), truncate_body(&body)),
            };
            tracing::error!("Request failed with status {}: {}", status, message);
            return Err(Error::Api(ApiError {
                status: status.as_u16(),
                error,
                message,
                ratelimit,
            }));
        }

        let data = serde_json::from_str::<T>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse response body: {} | body: {}", e, snippet);
            Error::RequestFailed
        })?;

        Ok(Response {
            status: status.as_u16(),
            ratelimit,
            data,
        })
    }

    /// Fetches drops entitlements awarded by the organization behind the
    /// credentials, optionally filtered by entitlement id, user, or game.
    ///
    /// Results come one page at a time; feed the returned cursor back
    /// through [`Query::with_after`] to fetch the next page. An empty page
    /// with no cursor is the normal end of the listing, not an error.
    pub async fn get_drops_entitlements(
        &self,
        query: &DropsEntitlementQuery,
    ) -> Result<Response<DropsEntitlements>, Error> {
        self.get::<DropsEntitlements, DropsEntitlementQuery>("/entitlements/drops", query)
            .await
    }

    /// Updates the fulfillment status of a batch of entitlements, at most
    /// 100 per call (a service-enforced limit, passed through as-is).
    ///
    /// Outcomes are reported per group of ids sharing the same status. A
    /// partially failed batch is still a successful response here; inspect
    /// each group's status rather than the top-level result.
    pub async fn update_drops_entitlements(
        &self,
        update: &UpdateEntitlementsRequest,
    ) -> Result<Response<EntitlementStatuses>, Error> {
        self.patch_json::<EntitlementStatuses, UpdateEntitlementsRequest>(
            "/entitlements/drops",
            update,
        )
        .await
    }
}

/// Error body shape used by the API for non-2xx answers.
#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    error: String,
    #[serde(default)]
    message: String,
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        format!("{}...[truncated]", &body[..MAX])
    }
}
