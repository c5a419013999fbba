//! Backend abstraction over the GitHub REST calls used by the Pages workflow

use anyhow::Result;
use async_trait::async_trait;
use ghpages_github::{GitHubClient, PagesSource, Reference, Repository};

/// The GitHub operations the Pages workflow depends on
///
/// Errors for non-success responses carry an [`ghpages_github::ApiError`] so
/// callers can inspect the status code with `downcast_ref`.
#[async_trait]
pub trait PagesApi: Send + Sync {
    /// Look up `refs/heads/<branch>`, `None` if the branch does not exist
    async fn get_branch_ref(&self, owner: &str, repo: &str, branch: &str)
    -> Result<Option<Reference>>;

    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository>;

    async fn create_branch_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<Reference>;

    async fn enable_pages(&self, owner: &str, repo: &str, source: &PagesSource) -> Result<()>;

    async fn update_pages(&self, owner: &str, repo: &str, source: &PagesSource) -> Result<()>;

    async fn disable_pages(&self, owner: &str, repo: &str) -> Result<()>;
}

#[async_trait]
impl PagesApi for GitHubClient {
    async fn get_branch_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
    ) -> Result<Option<Reference>> {
        GitHubClient::get_branch_ref(self, owner, repo, branch).await
    }

    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        GitHubClient::get_repository(self, owner, repo).await
    }

    async fn create_branch_ref(
        &self,
        owner: &str,
        repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<Reference> {
        GitHubClient::create_branch_ref(self, owner, repo, branch, sha).await
    }

    async fn enable_pages(&self, owner: &str, repo: &str, source: &PagesSource) -> Result<()> {
        GitHubClient::enable_pages(self, owner, repo, source).await?;
        Ok(())
    }

    async fn update_pages(&self, owner: &str, repo: &str, source: &PagesSource) -> Result<()> {
        GitHubClient::update_pages(self, owner, repo, source).await
    }

    async fn disable_pages(&self, owner: &str, repo: &str) -> Result<()> {
        GitHubClient::disable_pages(self, owner, repo).await
    }
}
