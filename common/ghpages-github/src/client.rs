//! GitHub client implementation

use crate::error::ApiError;
use anyhow::{Context, Result, anyhow};
use reqwest::{Method, RequestBuilder, Response, StatusCode, Url};

/// Default GitHub REST API base URL
pub const API_BASE: &str = "https://api.github.com";

/// REST API version requested on every call
pub const API_VERSION: &str = "2022-11-28";

/// User-Agent header sent with every request
pub const USER_AGENT: &str = concat!("ghpages/", env!("CARGO_PKG_VERSION"));

/// GitHub API client for making authenticated requests
pub struct GitHubClient {
    pub(crate) client: reqwest::Client,
    pub(crate) token: String,
    pub(crate) base_url: String,
}

impl GitHubClient {
    /// Create a new GitHub client talking to api.github.com
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, API_BASE)
    }

    /// Create a client for a different API host, e.g. GitHub Enterprise
    /// (`https://github.example.com/api/v3`)
    pub fn with_base_url(token: impl Into<String>, base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            token: token.into(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the URL of a repository-scoped endpoint
    ///
    /// Every segment is percent-encoded on its own, so a `#` or `?` in a
    /// branch name stays part of the path.
    pub(crate) fn repo_url(&self, owner: &str, repo: &str, tail: &[&str]) -> Result<String> {
        let invalid = || anyhow!("Invalid GitHub API URL: {}", self.base_url);
        let mut url = Url::parse(&self.base_url).map_err(|_| invalid())?;
        url.path_segments_mut()
            .map_err(|_| invalid())?
            .pop_if_empty()
            .extend(["repos", owner, repo])
            .extend(tail);
        Ok(url.into())
    }

    pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/vnd.github+json")
            .header("X-GitHub-Api-Version", API_VERSION)
            .bearer_auth(&self.token)
    }

    /// Send a request without looking at the status code
    pub(crate) async fn send_raw(&self, request: RequestBuilder, url: &str) -> Result<Response> {
        request
            .send()
            .await
            .with_context(|| format!("Failed to send request to {}", url))
    }

    /// Send a request, turning any non-success status into an [`ApiError`]
    pub(crate) async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response> {
        let response = self.send_raw(request, url).await?;
        ensure_success(response).await
    }
}

pub(crate) async fn ensure_success(response: Response) -> Result<Response> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiError::from_response(response).await.into())
    }
}

pub(crate) fn is_not_found(response: &Response) -> bool {
    response.status() == StatusCode::NOT_FOUND
}
