//! VCS command execution abstraction layer
//!
//! This module provides a trait-based abstraction over the `git` and `gh`
//! command line tools. The release planner and repository state never run
//! a process themselves; they talk to a [VcsRunner], so the core logic is
//! testable against [MockVcs] while [ShellRunner] does the real work.

pub mod mock;
pub mod shell;

pub use mock::MockVcs;
pub use shell::ShellRunner;

use crate::error::Result;

/// Capability interface over the VCS and publishing tooling.
///
/// One method per semantic operation. Query methods return trimmed text;
/// every method fails with `CommandFailed` when the underlying command
/// exits non-zero. There is no retry and no rollback at this layer.
pub trait VcsRunner {
    /// Name of the branch HEAD is on
    fn current_branch(&self) -> Result<String>;

    /// Full 40-character commit hash of HEAD
    fn head_sha(&self) -> Result<String>;

    /// Most recent tag reachable from HEAD
    fn nearest_tag(&self) -> Result<String>;

    /// Number of commits reachable from HEAD but not from `reference`
    fn commits_since(&self, reference: &str) -> Result<u32>;

    /// Fail unless the working tree matches HEAD
    fn ensure_clean(&self) -> Result<()>;

    /// Create and check out a branch, optionally from `start_point`
    fn create_branch(&self, name: &str, start_point: Option<&str>) -> Result<()>;

    /// Commit a single file with the given message
    fn commit_file(&self, path: &str, message: &str) -> Result<()>;

    /// Push a branch to a remote, setting its upstream
    fn push_branch(&self, remote: &str, branch: &str) -> Result<()>;

    /// Publish a draft release for a tag pointing at the given commit
    fn create_draft_release(&self, tag: &str, target: &str) -> Result<()>;

    /// Open a pull request for the current branch
    fn create_pull_request(&self, title: &str, body: &str, label: Option<&str>) -> Result<()>;
}
