//! Publishing the built site to the Pages branch

use super::PublishSettings;
use super::build::{build_site, enter_site_dir};
use crate::constants::site::REMOTE;
use crate::git::{self, Logger};
use crate::github::{PagesApi, PagesTarget, ensure_pages};
use anyhow::{Context, Result};

/// Build the site and force-push it to the target's publishing branch
///
/// 1. Run the build command
/// 2. Check the build output directory exists
/// 3. Run [`ensure_pages`] if the publishing branch does not exist yet
/// 4. Stage, commit and force-push the build output
///
/// Each step stops the flow on failure. Nothing is rolled back: a failed push
/// leaves the local commit in place.
pub async fn publish_site(
    api: &dyn PagesApi,
    target: &PagesTarget,
    settings: &PublishSettings,
) -> Result<()> {
    let logger = Logger;

    logger.info(
        target,
        &format!("Building site with '{}'", settings.build_command_line()),
    );
    build_site(&settings.build_command)?;

    let site_dir = enter_site_dir(&settings.site_dir)?;

    let branch_exists = api
        .get_branch_ref(&target.owner, &target.repo, &target.branch)
        .await
        .with_context(|| format!("Unable to look up {} branch", target.branch))?
        .is_some();
    if !branch_exists {
        ensure_pages(api, target).await?;
    }

    logger.info(
        target,
        &format!("Pushing {} to {}", site_dir.display(), target.branch),
    );
    push_site(&site_dir, &target.branch, &settings.commit_message)
        .with_context(|| format!("failed to push to {}", target.branch))?;

    Ok(())
}

fn push_site(site_dir: &std::path::Path, branch: &str, message: &str) -> Result<()> {
    git::add_all_changes(site_dir)?;
    git::commit_changes(site_dir, message)?;
    git::force_push_branch(site_dir, REMOTE, branch)?;
    Ok(())
}
