//! Enable/update command implementation

use super::{Command, CommandContext};
use crate::github::ensure_pages;
use anyhow::Result;
use async_trait::async_trait;

/// Ensures the publishing branch exists and Pages serves it.
/// Used for both `enable` and `update`.
pub struct EnableCommand;

#[async_trait]
impl Command for EnableCommand {
    async fn execute(&self, context: &CommandContext<'_>) -> Result<()> {
        ensure_pages(context.api, context.target).await?;
        Ok(())
    }
}
