//! Repository-related operations

use crate::client::GitHubClient;
use anyhow::{Context, Result};
use reqwest::Method;
use serde::Deserialize;

#[derive(Deserialize, Debug, Clone)]
pub struct Repository {
    pub name: String,
    pub full_name: String,
    pub default_branch: String,
}

impl GitHubClient {
    pub async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        let url = self.repo_url(owner, repo, &[])?;
        let repository: Repository = self
            .send(self.request(Method::GET, &url), &url)
            .await?
            .json()
            .await
            .context("Failed to parse GitHub API response")?;
        Ok(repository)
    }
}
