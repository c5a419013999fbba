//! Common test support utilities and fixtures
//!
//! This module provides an in-memory GitHub backend and git fixtures shared
//! across the integration tests.

#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use ghpages::github::{ApiError, GitObject, PagesApi, PagesSource, Reference, Repository};
use std::collections::HashMap;
use std::path::Path;
use std::process::Command;
use std::sync::Mutex;

/// A call made against [`FakePagesApi`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetRef(String),
    GetRepository,
    CreateRef { branch: String, sha: String },
    EnablePages(PagesSource),
    UpdatePages(PagesSource),
    DisablePages,
}

/// Operations a failure can be scripted for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    GetRef,
    GetRepository,
    CreateRef,
    EnablePages,
    UpdatePages,
    DisablePages,
}

#[derive(Default)]
struct State {
    default_branch: String,
    /// branch name -> commit sha
    branches: HashMap<String, String>,
    pages: Option<PagesSource>,
    failures: HashMap<Op, ApiError>,
    calls: Vec<Call>,
}

/// In-memory stand-in for a GitHub repository, behaving like the REST API:
/// 404 for missing refs, 409 when enabling Pages twice, 404 when disabling
/// Pages that is not enabled
pub struct FakePagesApi {
    state: Mutex<State>,
}

impl FakePagesApi {
    /// A repository whose default branch `default_branch` points at `sha`
    pub fn new(default_branch: &str, sha: &str) -> Self {
        let mut branches = HashMap::new();
        branches.insert(default_branch.to_string(), sha.to_string());
        Self {
            state: Mutex::new(State {
                default_branch: default_branch.to_string(),
                branches,
                ..State::default()
            }),
        }
    }

    pub fn with_branch(self, branch: &str, sha: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .branches
            .insert(branch.to_string(), sha.to_string());
        self
    }

    pub fn with_pages(self, branch: &str, path: &str) -> Self {
        self.state.lock().unwrap().pages = Some(PagesSource::new(branch, path));
        self
    }

    pub fn failing(self, op: Op, error: ApiError) -> Self {
        self.state.lock().unwrap().failures.insert(op, error);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn branch_sha(&self, branch: &str) -> Option<String> {
        self.state.lock().unwrap().branches.get(branch).cloned()
    }

    pub fn pages(&self) -> Option<PagesSource> {
        self.state.lock().unwrap().pages.clone()
    }

    fn record(&self, op: Op, call: Call) -> Result<std::sync::MutexGuard<'_, State>> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(call);
        if let Some(error) = state.failures.get(&op) {
            return Err(error.clone().into());
        }
        Ok(state)
    }
}

fn reference(branch: &str, sha: &str) -> Reference {
    Reference {
        name: format!("refs/heads/{}", branch),
        object: GitObject {
            sha: sha.to_string(),
            kind: "commit".to_string(),
        },
    }
}

#[async_trait]
impl PagesApi for FakePagesApi {
    async fn get_branch_ref(
        &self,
        _owner: &str,
        _repo: &str,
        branch: &str,
    ) -> Result<Option<Reference>> {
        let state = self.record(Op::GetRef, Call::GetRef(branch.to_string()))?;
        Ok(state.branches.get(branch).map(|sha| reference(branch, sha)))
    }

    async fn get_repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        let state = self.record(Op::GetRepository, Call::GetRepository)?;
        Ok(Repository {
            name: repo.to_string(),
            full_name: format!("{}/{}", owner, repo),
            default_branch: state.default_branch.clone(),
        })
    }

    async fn create_branch_ref(
        &self,
        _owner: &str,
        _repo: &str,
        branch: &str,
        sha: &str,
    ) -> Result<Reference> {
        let mut state = self.record(
            Op::CreateRef,
            Call::CreateRef {
                branch: branch.to_string(),
                sha: sha.to_string(),
            },
        )?;
        if state.branches.contains_key(branch) {
            return Err(ApiError::new(422, "Reference already exists").into());
        }
        state.branches.insert(branch.to_string(), sha.to_string());
        Ok(reference(branch, sha))
    }

    async fn enable_pages(&self, _owner: &str, _repo: &str, source: &PagesSource) -> Result<()> {
        let mut state = self.record(Op::EnablePages, Call::EnablePages(source.clone()))?;
        if state.pages.is_some() {
            return Err(ApiError::new(
                409,
                "GitHub Pages is already enabled.",
            )
            .into());
        }
        state.pages = Some(source.clone());
        Ok(())
    }

    async fn update_pages(&self, _owner: &str, _repo: &str, source: &PagesSource) -> Result<()> {
        let mut state = self.record(Op::UpdatePages, Call::UpdatePages(source.clone()))?;
        if state.pages.is_none() {
            return Err(ApiError::new(404, "Not Found").into());
        }
        state.pages = Some(source.clone());
        Ok(())
    }

    async fn disable_pages(&self, _owner: &str, _repo: &str) -> Result<()> {
        let mut state = self.record(Op::DisablePages, Call::DisablePages)?;
        if state.pages.take().is_none() {
            return Err(ApiError::new(404, "Not Found").into());
        }
        Ok(())
    }
}

/// Run git in `dir`, panicking on failure
pub fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to execute git");
    assert!(
        output.status.success(),
        "git {} failed: {}",
        args.join(" "),
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// Initialize a git repository on `branch` with an identity configured for
/// commits
pub fn init_git_repo(path: &Path, branch: &str) {
    std::fs::create_dir_all(path).expect("Failed to create repository directory");
    git(path, &["init", "--quiet"]);
    git(path, &["checkout", "--quiet", "-b", branch]);
    git(path, &["config", "user.name", "Test User"]);
    git(path, &["config", "user.email", "test@example.com"]);
    git(path, &["config", "commit.gpgsign", "false"]);
}

/// Create a bare repository at `remote` and register it as `origin` of `repo`
pub fn add_bare_origin(repo: &Path, remote: &Path) {
    std::fs::create_dir_all(remote).expect("Failed to create remote directory");
    git(remote, &["init", "--quiet", "--bare"]);
    git(
        repo,
        &["remote", "add", "origin", remote.to_str().expect("remote path not UTF-8")],
    );
}

/// Whether `rev` resolves in the repository at `dir`
pub fn rev_exists(dir: &Path, rev: &str) -> bool {
    Command::new("git")
        .args(["rev-parse", "--verify", "--quiet", rev])
        .current_dir(dir)
        .output()
        .map(|output| output.status.success())
        .unwrap_or(false)
}
