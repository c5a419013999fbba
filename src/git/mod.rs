//! Git operations using system git commands for maximum compatibility
//!
//! ## Sub-modules
//!
//! - [`publish`]: staging, committing and force-pushing the built site
//!   - `add_all_changes()` - Stage everything under a directory
//!   - `commit_changes()` - Commit staged changes
//!   - `force_push_branch()` - Overwrite a remote branch
//!
//! - [`common`]: Shared utilities and helpers
//!   - `Logger` - Consistent output for every operation

pub mod common;
pub mod publish;

pub use common::Logger;
pub use publish::{add_all_changes, commit_changes, force_push_branch};
