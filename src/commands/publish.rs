//! MkDocs build-and-publish command implementation

use super::{Command, CommandContext};
use crate::site::{PublishSettings, publish_site};
use anyhow::Result;
use async_trait::async_trait;

/// Builds the site and force-pushes it to the publishing branch
pub struct PublishCommand {
    pub settings: PublishSettings,
}

#[async_trait]
impl Command for PublishCommand {
    async fn execute(&self, context: &CommandContext<'_>) -> Result<()> {
        publish_site(context.api, context.target, &self.settings).await
    }
}
