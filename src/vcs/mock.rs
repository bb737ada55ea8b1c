use std::cell::RefCell;

use crate::error::{ReleaseError, Result};

use super::VcsRunner;

/// Scripted VCS runner for testing without running any commands.
///
/// Queries return preset values; mutating operations are recorded in
/// order instead of executed, so tests can assert the exact command
/// sequence a workflow produced.
pub struct MockVcs {
    branch: String,
    sha: String,
    tag: String,
    commits_since_tag: u32,
    clean: bool,
    recorded: RefCell<Vec<String>>,
}

impl MockVcs {
    /// Create a mock with a clean tree on `branch`, `tag` as the nearest
    /// tag and `commits_since_tag` commits on top of it
    pub fn new(branch: impl Into<String>, tag: impl Into<String>, commits_since_tag: u32) -> Self {
        MockVcs {
            branch: branch.into(),
            sha: "0123456789abcdef0123456789abcdef01234567".to_string(),
            tag: tag.into(),
            commits_since_tag,
            clean: true,
            recorded: RefCell::new(Vec::new()),
        }
    }

    /// Override the scripted HEAD commit hash
    pub fn set_sha(&mut self, sha: impl Into<String>) {
        self.sha = sha.into();
    }

    /// Script an uncommitted change into the working tree
    pub fn set_dirty(&mut self) {
        self.clean = false;
    }

    /// Mutating operations recorded so far, in call order
    pub fn recorded(&self) -> Vec<String> {
        self.recorded.borrow().clone()
    }

    fn record(&self, entry: String) {
        self.recorded.borrow_mut().push(entry);
    }
}

impl VcsRunner for MockVcs {
    fn current_branch(&self) -> Result<String> {
        Ok(self.branch.clone())
    }

    fn head_sha(&self) -> Result<String> {
        Ok(self.sha.clone())
    }

    fn nearest_tag(&self) -> Result<String> {
        Ok(self.tag.clone())
    }

    fn commits_since(&self, _reference: &str) -> Result<u32> {
        Ok(self.commits_since_tag)
    }

    fn ensure_clean(&self) -> Result<()> {
        if self.clean {
            Ok(())
        } else {
            Err(ReleaseError::command_failed("git diff HEAD --exit-code", 1))
        }
    }

    fn create_branch(&self, name: &str, start_point: Option<&str>) -> Result<()> {
        match start_point {
            Some(start) => self.record(format!("create-branch {} from {}", name, start)),
            None => self.record(format!("create-branch {}", name)),
        }
        Ok(())
    }

    fn commit_file(&self, path: &str, message: &str) -> Result<()> {
        self.record(format!("commit {} '{}'", path, message));
        Ok(())
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.record(format!("push {} {}", remote, branch));
        Ok(())
    }

    fn create_draft_release(&self, tag: &str, target: &str) -> Result<()> {
        self.record(format!("draft-release {} at {}", tag, target));
        Ok(())
    }

    fn create_pull_request(&self, title: &str, _body: &str, label: Option<&str>) -> Result<()> {
        match label {
            Some(label) => self.record(format!("pull-request '{}' label {}", title, label)),
            None => self.record(format!("pull-request '{}'", title)),
        }
        Ok(())
    }
}
