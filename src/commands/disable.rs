//! Disable command implementation

use super::{Command, CommandContext};
use crate::github::disable_pages;
use anyhow::Result;
use async_trait::async_trait;

pub struct DisableCommand;

#[async_trait]
impl Command for DisableCommand {
    async fn execute(&self, context: &CommandContext<'_>) -> Result<()> {
        disable_pages(context.api, context.target).await
    }
}
