//! Building the MkDocs site and publishing it to the Pages branch
//!
//! - [`build`]: runs the static-site generator
//! - [`publish`]: stages, commits and force-pushes the build output

pub mod build;
pub mod publish;

pub use build::{build_site, enter_site_dir};
pub use publish::publish_site;

use crate::constants::site::{DEFAULT_BUILD_COMMAND, DEFAULT_COMMIT_MSG, DEFAULT_SITE_DIR};
use std::path::PathBuf;

/// How the site is built and committed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublishSettings {
    /// Program and arguments of the build command
    pub build_command: Vec<String>,
    /// Directory the build writes to, relative to the working directory
    pub site_dir: PathBuf,
    pub commit_message: String,
}

impl Default for PublishSettings {
    fn default() -> Self {
        Self {
            build_command: split_command(DEFAULT_BUILD_COMMAND),
            site_dir: PathBuf::from(DEFAULT_SITE_DIR),
            commit_message: DEFAULT_COMMIT_MSG.to_string(),
        }
    }
}

impl PublishSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the build command, split on whitespace
    pub fn with_build_command(mut self, command: &str) -> Self {
        self.build_command = split_command(command);
        self
    }

    pub fn with_site_dir(mut self, site_dir: impl Into<PathBuf>) -> Self {
        self.site_dir = site_dir.into();
        self
    }

    pub fn with_commit_message(mut self, message: impl Into<String>) -> Self {
        self.commit_message = message.into();
        self
    }

    /// The build command as typed on a shell
    pub fn build_command_line(&self) -> String {
        self.build_command.join(" ")
    }
}

fn split_command(command: &str) -> Vec<String> {
    command.split_whitespace().map(str::to_string).collect()
}
