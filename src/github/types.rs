//! GitHub Pages workflow types

use crate::constants::pages::{DEFAULT_BRANCH, DEFAULT_PATH};
use ghpages_github::PagesSource;

/// The repository and Pages source a command acts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagesTarget {
    pub owner: String,
    pub repo: String,
    /// Publishing branch
    pub branch: String,
    /// Directory within the branch that Pages serves
    pub path: String,
}

impl PagesTarget {
    pub fn new(owner: impl Into<String>, repo: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            repo: repo.into(),
            branch: DEFAULT_BRANCH.to_string(),
            path: DEFAULT_PATH.to_string(),
        }
    }

    pub fn with_branch(mut self, branch: impl Into<String>) -> Self {
        self.branch = branch.into();
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// `owner/repo`, used to prefix output lines
    pub fn label(&self) -> String {
        format!("{}/{}", self.owner, self.repo)
    }

    /// The Pages source this target asks for
    pub fn source(&self) -> PagesSource {
        PagesSource::new(&self.branch, &self.path)
    }
}

/// Which Pages call ended up configuring the site
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PagesAction {
    Enabled,
    /// Pages was already enabled and its source was updated
    Updated,
}

/// What [`crate::github::ensure_pages`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagesOutcome {
    pub branch_created: bool,
    pub action: PagesAction,
}
