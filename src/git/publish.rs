//! Git operations for publishing the built site
//!
//! ## Publish Workflow
//!
//! 1. [`add_all_changes`] - Stage every file in the site directory
//! 2. [`commit_changes`] - Commit the staged files with a message
//! 3. [`force_push_branch`] - Overwrite the publishing branch on the remote

use super::common::failure_output;
use anyhow::{Context, Result};
use std::path::Path;
use std::process::Command;

/// Add all changes to the staging area
pub fn add_all_changes(repo_path: &Path) -> Result<()> {
    let output = Command::new("git")
        .arg("add")
        .arg(".")
        .current_dir(repo_path)
        .output()
        .context("git add failed: could not execute git")?;

    if !output.status.success() {
        anyhow::bail!("git add failed: {}", failure_output(&output));
    }

    Ok(())
}

/// Commit staged changes with a message
pub fn commit_changes(repo_path: &Path, message: &str) -> Result<()> {
    let output = Command::new("git")
        .arg("commit")
        .arg("-m")
        .arg(message)
        .current_dir(repo_path)
        .output()
        .context("git commit failed: could not execute git")?;

    if !output.status.success() {
        anyhow::bail!("git commit failed: {}", failure_output(&output));
    }

    Ok(())
}

/// Force-push `branch_name` to `remote`, replacing its history
pub fn force_push_branch(repo_path: &Path, remote: &str, branch_name: &str) -> Result<()> {
    let output = Command::new("git")
        .arg("push")
        .arg("-f")
        .arg(remote)
        .arg(branch_name)
        .current_dir(repo_path)
        .output()
        .context("git push failed: could not execute git")?;

    if !output.status.success() {
        anyhow::bail!("git push failed: {}", failure_output(&output));
    }

    Ok(())
}
