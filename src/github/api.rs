//! GitHub Pages workflow operations

use super::backend::PagesApi;
use super::types::{PagesAction, PagesOutcome, PagesTarget};
use crate::git::Logger;
use anyhow::{Result, anyhow};
use ghpages_github::ApiError;

/// Make sure the publishing branch exists and Pages serves it
///
/// This function encapsulates the whole reconciliation flow:
/// 1. Create `refs/heads/<branch>` from the default branch's tip if missing
/// 2. Enable Pages with the target's source
/// 3. Fall back to updating the source when Pages is already enabled
pub async fn ensure_pages(api: &dyn PagesApi, target: &PagesTarget) -> Result<PagesOutcome> {
    let logger = Logger;
    let branch_created = ensure_branch(api, target, &logger).await?;

    let source = target.source();
    let action = match api
        .enable_pages(&target.owner, &target.repo, &source)
        .await
    {
        Ok(()) => PagesAction::Enabled,
        Err(err) if is_conflict(&err) => {
            logger.info(target, "Pages already enabled. Updating instead");
            api.update_pages(&target.owner, &target.repo, &source)
                .await
                .map_err(|err| describe_failure("failed to enable/update Pages", err))?;
            PagesAction::Updated
        }
        Err(err) => return Err(describe_failure("failed to enable/update Pages", err)),
    };

    logger.success(target, "GitHub Pages enabled or updated");
    Ok(PagesOutcome {
        branch_created,
        action,
    })
}

/// Turn Pages off for the target repository
pub async fn disable_pages(api: &dyn PagesApi, target: &PagesTarget) -> Result<()> {
    api.disable_pages(&target.owner, &target.repo)
        .await
        .map_err(|err| describe_failure("failed to disable Pages", err))?;

    Logger.success(target, "GitHub Pages disabled");
    Ok(())
}

/// Create the publishing branch from the default branch's tip when it is missing.
/// Returns whether the branch was created.
async fn ensure_branch(api: &dyn PagesApi, target: &PagesTarget, logger: &Logger) -> Result<bool> {
    let (owner, repo, branch) = (&target.owner, &target.repo, &target.branch);

    let existing = api
        .get_branch_ref(owner, repo, branch)
        .await
        .map_err(|err| describe_failure(&format!("Unable to look up {} branch", branch), err))?;
    if existing.is_some() {
        return Ok(false);
    }

    // Pages cannot be built from a branch that does not exist yet
    logger.warn(target, &format!("{} branch not found, creating it", branch));

    let repository = api
        .get_repository(owner, repo)
        .await
        .map_err(|err| describe_failure("Unable to get repo info", err))?;

    let base = api
        .get_branch_ref(owner, repo, &repository.default_branch)
        .await
        .map_err(|err| describe_failure("Unable to get default branch ref", err))?
        .ok_or_else(|| {
            anyhow!(
                "Unable to get default branch ref: {} has no commits",
                repository.default_branch
            )
        })?;

    api.create_branch_ref(owner, repo, branch, &base.object.sha)
        .await
        .map_err(|err| describe_failure(&format!("Unable to create {} branch", branch), err))?;

    logger.success(target, &format!("Created {} branch", branch));
    Ok(true)
}

fn is_conflict(err: &anyhow::Error) -> bool {
    err.downcast_ref::<ApiError>()
        .is_some_and(ApiError::is_conflict)
}

/// Prefix an error with what failed, appending the HTTP status for API errors
fn describe_failure(what: &str, err: anyhow::Error) -> anyhow::Error {
    match err.downcast_ref::<ApiError>() {
        Some(api_err) => anyhow!("{}: {} ({})", what, api_err, api_err.status_line()),
        None => err.context(what.to_string()),
    }
}
