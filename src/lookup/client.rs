//! Search endpoint client
//!
//! Builds lookup URLs relative to the page the widget lives on and parses the
//! `{"users": [{"username": ...}]}` payload.

use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

use crate::error::SuggestError;

/// Name of the query parameter carrying the typed text
pub const SEARCH_PARAM: &str = "search";

/// Errors that can occur during a single lookup
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// The interpolated lookup URL does not parse
    #[error("Invalid lookup URL: {0}")]
    InvalidUrl(String),

    /// Network error during the request
    #[error("Network error: {0}")]
    Network(String),

    /// Non-success status whose body was not a user list
    #[error("HTTP {code}: response was not a user list")]
    Status { code: u16 },

    /// Body is not JSON or lacks the `users` field
    #[error("Parse error: {0}")]
    Parse(String),
}

/// One entry of the `users` array
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct UserRecord {
    username: String,
}

/// Search endpoint payload
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
struct SearchResponse {
    users: Vec<UserRecord>,
}

/// HTTP client for the username search endpoint
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: reqwest::Client,
    endpoint: Url,
    encode_query: bool,
}

impl SearchClient {
    /// Resolve `endpoint` against `page_url` and build the HTTP client
    pub fn new(page_url: &str, endpoint: &str, encode_query: bool) -> Result<Self, SuggestError> {
        let page = Url::parse(page_url).map_err(|e| SuggestError::InvalidUrl {
            url: page_url.to_string(),
            reason: e.to_string(),
        })?;

        let endpoint = page.join(endpoint).map_err(|e| SuggestError::InvalidUrl {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("usersuggest/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SuggestError::HttpClient(e.to_string()))?;

        Ok(Self {
            http,
            endpoint,
            encode_query,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// URL for looking up `query`
    ///
    /// Without `encode_query` the text is pasted into the URL verbatim, so
    /// `&`, `#` and the like change the meaning of the request.
    pub fn lookup_url(&self, query: &str) -> Result<Url, LookupError> {
        if self.encode_query {
            let mut url = self.endpoint.clone();
            url.query_pairs_mut().append_pair(SEARCH_PARAM, query);
            Ok(url)
        } else {
            let raw = format!("{}?{}={}", self.endpoint, SEARCH_PARAM, query);
            Url::parse(&raw).map_err(|e| LookupError::InvalidUrl(e.to_string()))
        }
    }

    /// Fetch the usernames matching `query`, in response order
    pub async fn search(&self, query: &str) -> Result<Vec<String>, LookupError> {
        let url = self.lookup_url(query)?;

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| LookupError::Network(e.to_string()))?;

        parse_users(&body).map_err(|e| {
            if status.is_success() {
                e
            } else {
                LookupError::Status {
                    code: status.as_u16(),
                }
            }
        })
    }
}

/// Extract usernames from a search endpoint body
pub fn parse_users(body: &[u8]) -> Result<Vec<String>, LookupError> {
    let payload: SearchResponse =
        serde_json::from_slice(body).map_err(|e| LookupError::Parse(e.to_string()))?;

    Ok(payload.users.into_iter().map(|user| user.username).collect())
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
