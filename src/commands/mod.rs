//! Command implementations and the dispatcher shared by both binaries

pub mod base;
pub mod disable;
pub mod dispatch;
pub mod enable;
pub mod publish;

pub use base::{Command, CommandContext};
pub use disable::DisableCommand;
pub use dispatch::{Action, DispatchError, Invocation, Variant};
pub use enable::EnableCommand;
pub use publish::PublishCommand;

use crate::cli::TargetArgs;
use crate::github::GitHubClient;
use crate::site::PublishSettings;
use anyhow::Result;
use colored::*;

/// Run `action` against the context's target
///
/// `settings` is only consulted by [`Action::MkdocsCommit`]; the defaults are
/// used when it is `None`.
pub async fn execute(
    action: Action,
    context: &CommandContext<'_>,
    settings: Option<&PublishSettings>,
) -> Result<()> {
    match action {
        Action::Enable | Action::Update => EnableCommand.execute(context).await,
        Action::Disable => DisableCommand.execute(context).await,
        Action::MkdocsCommit => {
            PublishCommand {
                settings: settings.cloned().unwrap_or_default(),
            }
            .execute(context)
            .await
        }
    }
}

/// Dispatch a parsed command line and print the result
///
/// Every problem, from a short command line to a failed API call, is printed
/// to stdout; the caller always exits successfully.
pub async fn run(variant: Variant, args: &TargetArgs, settings: Option<&PublishSettings>) {
    let invocation = match Invocation::from_args(args, variant) {
        Ok(invocation) => invocation,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };

    let client = GitHubClient::with_base_url(invocation.token.as_str(), &args.api_url);
    let context = CommandContext {
        target: &invocation.target,
        api: &client,
    };

    if let Err(err) = execute(invocation.action, &context, settings).await {
        println!("{} {:#}", "Error:".red().bold(), err);
    }
}
