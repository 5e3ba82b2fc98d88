//! HTTP client for the Bank Al-Maghrib API.

use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::{endpoint::Endpoint, query::Query, types::Record, Error};

/// Production base URL.
pub const BASE_URL: &str = "https://api.centralbankofmorocco.ma";

/// Header carrying the per-service subscription key.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// Request timeout applied to every call.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the Bank Al-Maghrib API.
///
/// Every call is a single GET: there is no retry, backoff or caching. The
/// subscription key is passed per call so one client serves all three
/// services.
pub struct Client {
    http: reqwest::Client,
    /// Base URL for the API. Defaults to [`BASE_URL`].
    base_api_url: String,
}

/// Error body returned by the API gateway alongside a 429.
#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

impl Client {
    /// Creates a new client pointing at the production API.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(BASE_URL)
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                tracing::error!("Failed to build HTTP client: {}", e);
                Error::Network(e)
            })?;
        Ok(Self {
            http,
            base_api_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    /// Fully qualified URL of an endpoint, without query string.
    pub fn endpoint_url(&self, endpoint: Endpoint) -> Result<Url, Error> {
        Url::parse(&format!("{}/{}", self.base_api_url, endpoint.path())).map_err(|e| {
            tracing::error!("Invalid URL constructed for {}: {}", endpoint, e);
            Error::InvalidUrl(e.to_string())
        })
    }

    /// Issues a GET against a named endpoint.
    pub async fn get<Q>(
        &self,
        subscription_key: &str,
        endpoint: Endpoint,
        query: &Q,
    ) -> Result<Vec<Record>, Error>
    where
        Q: Query,
    {
        let url = self.endpoint_url(endpoint)?;
        self.fetch(subscription_key, url, query).await
    }

    /// Issues a GET against an arbitrary URL with the subscription key header
    /// and the query's parameters appended to the query string.
    ///
    /// Status handling, in order: 401 maps to [`Error::InvalidApiKey`], 429 to
    /// [`Error::RateLimited`], any other failure status to [`Error::HttpStatus`].
    /// A 204 or an empty body yields an empty vector.
    pub async fn fetch<Q>(
        &self,
        subscription_key: &str,
        url: Url,
        query: &Q,
    ) -> Result<Vec<Record>, Error>
    where
        Q: Query,
    {
        let url = query.add_to_url(&url);
        tracing::debug!("GET {}", url);

        let resp = self
            .http
            .get(url)
            .header(SUBSCRIPTION_KEY_HEADER, subscription_key)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get resource: {}", e);
                Error::Network(e)
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            Error::Network(e)
        })?;

        if status == reqwest::StatusCode::UNAUTHORIZED {
            tracing::error!("Subscription key rejected (HTTP 401)");
            return Err(Error::InvalidApiKey);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.message)
                .unwrap_or_else(|_| truncate_body(&body));
            tracing::warn!("Rate limited: {}", message);
            return Err(Error::RateLimited { message });
        }

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::HttpStatus {
                status: status.as_u16(),
                body: snippet,
            });
        }

        if status == reqwest::StatusCode::NO_CONTENT || body.trim().is_empty() {
            tracing::debug!("No content for this query");
            return Ok(Vec::new());
        }

        let parsed = serde_json::from_str::<Vec<Record>>(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse resource: {} | body: {}", e, snippet);
            Error::ParseFailed(e.to_string())
        })?;

        Ok(parsed)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
