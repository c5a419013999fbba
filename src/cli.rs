//! Command-line arguments shared by the `ghpages` and `mkdocs-ghpages` binaries
//!
//! Positional arguments are optional as far as clap is concerned: the
//! dispatcher in [`crate::commands::dispatch`] checks them so that a short or
//! unknown command line prints the usage line instead of a clap error.

use crate::constants::github::API_BASE;
use crate::constants::site::{DEFAULT_BUILD_COMMAND, DEFAULT_COMMIT_MSG, DEFAULT_SITE_DIR};
use crate::site::PublishSettings;
use clap::Args;
use std::path::PathBuf;

/// `<action> <owner> <repo> <token> [branch] [path]`
#[derive(Args, Debug, Clone)]
pub struct TargetArgs {
    /// Action to perform: enable, update or disable (mkdocs-ghpages also takes mkdocs-commit)
    pub action: Option<String>,

    /// Repository owner (user or organization)
    pub owner: Option<String>,

    /// Repository name
    pub repo: Option<String>,

    /// GitHub access token
    pub token: Option<String>,

    /// Publishing branch [default: gh-pages]
    pub branch: Option<String>,

    /// Directory within the branch that Pages serves [default: /]
    pub path: Option<String>,

    /// Surplus positional values, accepted and ignored
    #[arg(hide = true)]
    pub rest: Vec<String>,

    /// GitHub API base URL, for GitHub Enterprise
    #[arg(long, default_value = API_BASE)]
    pub api_url: String,
}

#[cfg(test)]
impl TargetArgs {
    /// Build arguments from positional values, as if typed on the command line
    pub(crate) fn from_values(values: &[&str]) -> Self {
        let value = |index: usize| values.get(index).map(|v| v.to_string());
        Self {
            action: value(0),
            owner: value(1),
            repo: value(2),
            token: value(3),
            branch: value(4),
            path: value(5),
            rest: values.iter().skip(6).map(|v| v.to_string()).collect(),
            api_url: API_BASE.to_string(),
        }
    }
}

/// Options of the `mkdocs-commit` action
#[derive(Args, Debug, Clone)]
pub struct PublishArgs {
    /// Command that builds the site
    #[arg(long, default_value = DEFAULT_BUILD_COMMAND)]
    pub build_command: String,

    /// Directory the build writes the site to
    #[arg(long, default_value = DEFAULT_SITE_DIR)]
    pub site_dir: PathBuf,

    /// Commit message for the published site
    #[arg(long, default_value = DEFAULT_COMMIT_MSG)]
    pub message: String,
}

impl From<&PublishArgs> for PublishSettings {
    fn from(args: &PublishArgs) -> Self {
        PublishSettings::new()
            .with_build_command(&args.build_command)
            .with_site_dir(&args.site_dir)
            .with_commit_message(&args.message)
    }
}
