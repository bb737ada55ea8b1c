use log::info;

use crate::domain::{Stage, Tag};
use crate::error::{ReleaseError, Result};
use crate::vcs::VcsRunner;

/// Fixed length of the short commit hash prefix
const SHORT_SHA_LEN: usize = 10;

/// Snapshot of the repository facts release planning needs.
///
/// Constructed once per invocation with [RepositoryState::capture] and
/// re-derived wholesale with [RepositoryState::refresh] after mutating
/// operations. All fields are always replaced together; a partially
/// refreshed state cannot be observed.
#[derive(Debug, Clone)]
pub struct RepositoryState {
    pub branch: String,
    pub sha: String,
    pub sha_short: String,
    pub latest_tag: Tag,
    pub commits_since_tag: u32,
}

impl RepositoryState {
    /// Query the VCS for the current branch, HEAD commit, nearest
    /// reachable tag and commit distance since that tag.
    ///
    /// The nearest tag must satisfy the release tag grammar; a
    /// non-conforming tag fails with `TagMismatch` so it can never leak
    /// into a computed release tag.
    pub fn capture(runner: &dyn VcsRunner) -> Result<Self> {
        let branch = runner.current_branch()?;
        let sha = runner.head_sha()?;
        let raw_tag = runner.nearest_tag()?;
        let latest_tag =
            Tag::parse(&raw_tag).map_err(|_| ReleaseError::tag_mismatch(&raw_tag))?;
        let commits_since_tag = runner.commits_since(&raw_tag)?;
        let sha_short = sha.chars().take(SHORT_SHA_LEN).collect();

        info!(
            "current repo info: branch - {}, commit sha - {}, latest tag - {}, commits since tag - {}",
            branch, sha, latest_tag, commits_since_tag
        );

        Ok(RepositoryState {
            branch,
            sha,
            sha_short,
            latest_tag,
            commits_since_tag,
        })
    }

    /// Re-derive every field from the repository after a mutating
    /// operation such as a checkout or commit
    pub fn refresh(&mut self, runner: &dyn VcsRunner) -> Result<()> {
        *self = Self::capture(runner)?;
        Ok(())
    }

    /// Build number derived from tag lineage and commit distance.
    ///
    /// Testing tags are cut more often than the counter resets, so their
    /// embedded tweak component accumulates on top of the commit
    /// distance instead of starting over.
    pub fn tweak(&self) -> u32 {
        if self.latest_tag.stage == Stage::Testing {
            self.latest_tag.tweak + self.commits_since_tag
        } else {
            self.commits_since_tag
        }
    }
}
