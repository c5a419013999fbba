//! Base types and traits for the command pattern

use crate::github::{PagesApi, PagesTarget};
use anyhow::Result;

/// Context passed to all commands
#[derive(Clone, Copy)]
pub struct CommandContext<'a> {
    /// Repository and Pages source to act on
    pub target: &'a PagesTarget,
    /// GitHub backend the command talks to
    pub api: &'a dyn PagesApi,
}

/// Trait that all commands must implement
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command with the given context
    async fn execute(&self, context: &CommandContext<'_>) -> Result<()>;
}
