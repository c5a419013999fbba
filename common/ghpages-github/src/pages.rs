//! GitHub Pages operations

use crate::client::GitHubClient;
use anyhow::{Context, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// Where Pages serves files from
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PagesSource {
    pub branch: String,
    pub path: String,
}

impl PagesSource {
    pub fn new(branch: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            branch: branch.into(),
            path: path.into(),
        }
    }
}

/// Pages site returned after enabling
#[derive(Deserialize, Debug, Clone)]
pub struct Pages {
    #[serde(default)]
    pub html_url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub source: Option<PagesSource>,
}

#[derive(Serialize)]
pub(crate) struct PagesPayload<'a> {
    source: &'a PagesSource,
}

impl GitHubClient {
    /// Enable Pages for a repository
    ///
    /// # Errors
    /// GitHub answers 409 Conflict when Pages is already enabled; the error
    /// carries that status as an [`crate::ApiError`]
    pub async fn enable_pages(
        &self,
        owner: &str,
        repo: &str,
        source: &PagesSource,
    ) -> Result<Pages> {
        let url = self.repo_url(owner, repo, &["pages"])?;
        let payload = PagesPayload { source };

        let pages: Pages = self
            .send(self.request(Method::POST, &url).json(&payload), &url)
            .await?
            .json()
            .await
            .context("Failed to parse Pages response")?;
        Ok(pages)
    }

    /// Change the source of an existing Pages site
    pub async fn update_pages(&self, owner: &str, repo: &str, source: &PagesSource) -> Result<()> {
        let url = self.repo_url(owner, repo, &["pages"])?;
        let payload = PagesPayload { source };

        self.send(self.request(Method::PUT, &url).json(&payload), &url)
            .await?;
        Ok(())
    }

    /// Unpublish the Pages site
    pub async fn disable_pages(&self, owner: &str, repo: &str) -> Result<()> {
        let url = self.repo_url(owner, repo, &["pages"])?;
        self.send(self.request(Method::DELETE, &url), &url).await?;
        Ok(())
    }
}
