//! GitHub Pages integration module
//!
//! This module sits between the command layer and the low-level REST client in
//! the `ghpages-github` crate.
//!
//! ## Architecture
//!
//! - [`backend`]: the [`PagesApi`] trait, the seam between the workflow code and
//!   the REST client
//! - [`types`]: workflow types such as [`PagesTarget`] and [`PagesOutcome`]
//! - [`api`]: the reconciliation workflow ([`ensure_pages`], [`disable_pages`])
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ghpages::github::{GitHubClient, PagesTarget, ensure_pages};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let client = GitHubClient::new("your_token");
//! let target = PagesTarget::new("acme", "docs").with_path("/docs");
//!
//! let outcome = ensure_pages(&client, &target).await?;
//! println!("branch created: {}", outcome.branch_created);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod backend;
pub mod types;

// Re-export commonly used items for convenience
pub use api::{disable_pages, ensure_pages};
pub use backend::PagesApi;
pub use ghpages_github::{
    ApiError, GitHubClient, GitObject, Pages, PagesSource, Reference, Repository,
};
pub use types::{PagesAction, PagesOutcome, PagesTarget};
