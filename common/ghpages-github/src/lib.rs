//! GitHub API client library
//!
//! This library wraps the handful of GitHub REST endpoints needed to manage
//! GitHub Pages for a repository.
//!
//! ## Modules
//!
//! - [`client`]: Core GitHub client implementation
//! - [`error`]: Error type for non-success API responses
//! - [`refs`]: Git reference lookup and creation
//! - [`repositories`]: Repository metadata retrieval
//! - [`pages`]: Pages enable, update and disable

mod client;
mod error;
mod pages;
mod refs;
mod repositories;

#[cfg(test)]
mod test_server;

// Re-export public API
pub use client::{API_BASE, API_VERSION, GitHubClient, USER_AGENT};
pub use error::ApiError;
pub use pages::{Pages, PagesSource};
pub use refs::{GitObject, Reference};
pub use repositories::Repository;
