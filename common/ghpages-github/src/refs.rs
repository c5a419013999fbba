//! Git reference operations

use crate::client::{GitHubClient, ensure_success, is_not_found};
use anyhow::{Context, Result};
use reqwest::Method;
use serde::{Deserialize, Serialize};

/// A named pointer to a git object, as returned by the git database API
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Reference {
    /// Fully qualified name, e.g. `refs/heads/gh-pages`
    #[serde(rename = "ref")]
    pub name: String,
    pub object: GitObject,
}

#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GitObject {
    pub sha: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

#[derive(Serialize)]
pub(crate) struct CreateReferencePayload<'a> {
    #[serde(rename = "ref")]
    name: &'a str,
    sha: &'a str,
}

impl GitHubClient {
    /// Look up `refs/heads/<branch>`
    ///
    /// # Returns
    /// `None` when the branch does not exist (404)
    ///
    /// # Errors
    /// Returns an error for any other non-success response or transport failure
    pub async fn get_branch_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<Option<Reference>> {
        // Slashes in `feature/x` are path separators in the ref name
        let mut tail = vec!["git", "ref", "heads"];
        tail.extend(branch.split('/'));
        let url = self.repo_url(owner, repo, &tail)?;
        let response = self
            .send_raw(self.request(Method::GET, &url), &url)
            .await?;

        if is_not_found(&response) {
            return Ok(None);
        }

        let reference: Reference = ensure_success(response)
            .await?
            .json()
            .await
            .context("Failed to parse git reference response")?;
        Ok(Some(reference))
    }

    /// Create `refs/heads/<branch>` pointing at `sha`
    pub async fn create_branch_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<Reference> {
        let url = self.repo_url(owner, repo, &["git", "refs"])?;
        let name = format!("refs/heads/{}", branch);
        let payload = CreateReferencePayload { name: &name, sha };

        let reference: Reference = self
            .send(self.request(Method::POST, &url).json(&payload), &url)
            .await?
            .json()
            .await
            .context("Failed to parse reference creation response")?;
        Ok(reference)
    }
}
