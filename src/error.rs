use thiserror::Error;

/// Unified error type for git-release operations
#[derive(Error, Debug)]
pub enum ReleaseError {
    #[error("tag '{tag}' does not match the release tag format")]
    InvalidTagFormat { tag: String },

    #[error("latest repository tag '{tag}' does not match the release tag format")]
    TagMismatch { tag: String },

    #[error("branch must be '{expected}' for a {release_type} release, current branch is '{actual}'")]
    BranchPolicyViolation {
        release_type: String,
        expected: String,
        actual: String,
    },

    #[error("release type '{0}' is not known")]
    UnknownReleaseType(String),

    #[error("command `{command}` failed with exit code {code}")]
    CommandFailed { command: String, code: i32 },

    #[error("unexpected VCS output: {0}")]
    Vcs(String),

    #[error("version file error: {0}")]
    VersionFile(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for Results in git-release
pub type Result<T> = std::result::Result<T, ReleaseError>;

impl ReleaseError {
    /// Create an invalid-tag error for a rejected tag string
    pub fn invalid_tag(tag: impl Into<String>) -> Self {
        ReleaseError::InvalidTagFormat { tag: tag.into() }
    }

    /// Create a tag-mismatch error for a repository tag that fails the grammar
    pub fn tag_mismatch(tag: impl Into<String>) -> Self {
        ReleaseError::TagMismatch { tag: tag.into() }
    }

    /// Create a command-failed error with the rendered command line
    pub fn command_failed(command: impl Into<String>, code: i32) -> Self {
        ReleaseError::CommandFailed {
            command: command.into(),
            code,
        }
    }

    /// Create a VCS output error with context
    pub fn vcs(msg: impl Into<String>) -> Self {
        ReleaseError::Vcs(msg.into())
    }

    /// Create a version file error with context
    pub fn version_file(msg: impl Into<String>) -> Self {
        ReleaseError::VersionFile(msg.into())
    }
}
