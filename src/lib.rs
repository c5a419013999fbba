//! ghpages - enable, update and disable GitHub Pages, and publish MkDocs sites

pub mod cli;
pub mod commands;
pub mod constants;
pub mod git;
pub mod github;
pub mod site;

pub type Result<T> = anyhow::Result<T>;

// Re-export commonly used types
pub use commands::{Action, Command, CommandContext, Invocation, Variant};
pub use github::{PagesApi, PagesOutcome, PagesTarget};
pub use site::PublishSettings;
