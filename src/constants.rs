//! Central constants for the ghpages application

/// Default values for GitHub operations
pub mod github {
    /// GitHub API base URL
    pub use ghpages_github::API_BASE;
}

/// Default values for the Pages configuration
pub mod pages {
    /// Branch served by GitHub Pages when none is given
    pub const DEFAULT_BRANCH: &str = "gh-pages";

    /// Path within the branch served by GitHub Pages when none is given
    pub const DEFAULT_PATH: &str = "/";
}

/// Default values for building and publishing the site
pub mod site {
    /// Command that builds the MkDocs site
    pub const DEFAULT_BUILD_COMMAND: &str = "python -m mkdocs build";

    /// Directory MkDocs writes the built site to
    pub const DEFAULT_SITE_DIR: &str = "site";

    /// Commit message used for every publish
    pub const DEFAULT_COMMIT_MSG: &str = "Update mkdocs site";

    /// Remote the site is force-pushed to
    pub const REMOTE: &str = "origin";
}
