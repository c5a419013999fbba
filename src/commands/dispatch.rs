//! Turning command-line arguments into an action on a repository
//!
//! Argument problems are reported before any client is created, so a short
//! or mistyped command line never reaches the network.

use crate::cli::TargetArgs;
use crate::github::PagesTarget;

/// Which binary is dispatching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// `ghpages`: enable, update and disable
    Pages,
    /// `mkdocs-ghpages`: additionally builds and publishes the site
    Publisher,
}

impl Variant {
    pub fn program(&self) -> &'static str {
        match self {
            Variant::Pages => "ghpages",
            Variant::Publisher => "mkdocs-ghpages",
        }
    }

    fn actions(&self) -> &'static str {
        match self {
            Variant::Pages => "enable|update|disable",
            Variant::Publisher => "enable|update|disable|mkdocs-commit",
        }
    }

    /// One-line usage message
    pub fn usage(&self) -> String {
        format!(
            "Usage: {} <{}> <owner> <repo> <token> [branch] [path]",
            self.program(),
            self.actions()
        )
    }

    fn invalid_action_hint(&self) -> &'static str {
        match self {
            Variant::Pages => "Invalid action. Use enable, update, or disable.",
            Variant::Publisher => "Invalid action. Use enable, update, disable, or mkdocs-commit.",
        }
    }
}

/// What to do with the repository
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Enable,
    Update,
    Disable,
    /// Build the MkDocs site and push it to the publishing branch
    MkdocsCommit,
}

impl Action {
    /// Parse an action name, accepting only the actions `variant` offers
    pub fn parse(name: &str, variant: Variant) -> Option<Self> {
        match (name, variant) {
            ("enable", _) => Some(Action::Enable),
            ("update", _) => Some(Action::Update),
            ("disable", _) => Some(Action::Disable),
            ("mkdocs-commit", Variant::Publisher) => Some(Action::MkdocsCommit),
            _ => None,
        }
    }
}

/// Why the command line could not be dispatched
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// Fewer than the four required positional values
    Usage(Variant),
    /// Unknown action name
    InvalidAction { variant: Variant, action: String },
}

impl std::fmt::Display for DispatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DispatchError::Usage(variant) => write!(f, "{}", variant.usage()),
            DispatchError::InvalidAction { variant, .. } => {
                write!(f, "{}", variant.invalid_action_hint())
            }
        }
    }
}

impl std::error::Error for DispatchError {}

/// A fully resolved command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub action: Action,
    pub target: PagesTarget,
    pub token: String,
}

impl Invocation {
    /// Validate the positional arguments and apply the branch/path defaults
    pub fn from_args(args: &TargetArgs, variant: Variant) -> Result<Self, DispatchError> {
        let (Some(action), Some(owner), Some(repo), Some(token)) =
            (&args.action, &args.owner, &args.repo, &args.token)
        else {
            return Err(DispatchError::Usage(variant));
        };

        let action =
            Action::parse(action, variant).ok_or_else(|| DispatchError::InvalidAction {
                variant,
                action: action.clone(),
            })?;

        let mut target = PagesTarget::new(owner, repo);
        if let Some(branch) = &args.branch {
            target = target.with_branch(branch);
        }
        if let Some(path) = &args.path {
            target = target.with_path(path);
        }

        Ok(Self {
            action,
            target,
            token: token.clone(),
        })
    }
}
