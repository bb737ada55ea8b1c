use log::debug;

use crate::domain::{ReleaseType, Stage, Tag};
use crate::error::{ReleaseError, Result};
use crate::repo::RepositoryState;
use crate::version_file::VersionRecord;

/// Everything the orchestrator needs to execute one release.
///
/// `release_record` describes the artifact being published and goes to
/// the release branch; `next_record` carries the bumped development
/// version back to the trunk. The two are separate values from the
/// start, so stamping one can never bleed into the other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleasePlan {
    pub new_tag: Tag,
    pub new_branch: String,
    pub release_record: VersionRecord,
    pub next_record: VersionRecord,
    pub create_new_branch: bool,
}

/// Enforce the branch naming policy for the requested release type.
///
/// Major and minor releases are cut from the trunk branch; patch
/// releases are cut from the `{major}.{minor}` branch of the loaded
/// record. Callers may skip this check explicitly.
pub fn check_branch(
    release_type: ReleaseType,
    state: &RepositoryState,
    record: &VersionRecord,
    trunk: &str,
) -> Result<()> {
    let expected = match release_type {
        ReleaseType::Major | ReleaseType::Minor => trunk.to_string(),
        ReleaseType::Patch => format!("{}.{}", record.major, record.minor),
    };

    if state.branch != expected {
        return Err(ReleaseError::BranchPolicyViolation {
            release_type: release_type.to_string(),
            expected,
            actual: state.branch.clone(),
        });
    }
    Ok(())
}

/// Compute the next release from the repository state and version record.
pub fn plan(
    release_type: ReleaseType,
    state: &RepositoryState,
    record: &VersionRecord,
) -> Result<ReleasePlan> {
    // Stamp the record describing the state being released: the current
    // commit and the commit distance become its derived fields.
    let mut release_record = record.clone();
    release_record.githash = state.sha.clone();
    release_record.version_string = format!(
        "{}.{}.{}.{}",
        release_record.major, release_record.minor, release_record.patch, state.commits_since_tag
    );
    release_record.describe = format!("v{}-prestable", release_record.version_string);

    let mut next_record = release_record.clone();

    // The branch that will carry on this release line, named after the
    // pre-bump version.
    let new_branch = format!("{}.{}", release_record.major, release_record.minor);

    // A prestable or testing tag of the same major.minor continues the
    // current line, so its tweak component keeps counting; anything else
    // starts a fresh count from the raw commit distance.
    let latest = &state.latest_tag;
    let continuing = matches!(latest.stage, Stage::Prestable | Stage::Testing)
        && latest.major == release_record.major
        && latest.minor == release_record.minor;
    let changes = if continuing {
        latest.tweak + state.commits_since_tag
    } else {
        state.commits_since_tag
    };
    debug!(
        "changes = {} ({} lineage, latest tag {})",
        changes,
        if continuing { "continuing" } else { "new" },
        latest
    );

    // The draft tag to publish, using pre-bump version numbers. Built as
    // a string and validated at the assignment boundary like any other
    // incoming tag.
    let new_tag = Tag::parse(&format!(
        "v{}.{}.{}.{}-prestable",
        release_record.major, release_record.minor, release_record.patch, changes
    ))?;

    let create_new_branch = match release_type {
        ReleaseType::Patch => {
            next_record.patch += 1;
            false
        }
        ReleaseType::Minor => {
            next_record.minor += 1;
            next_record.patch = 1;
            true
        }
        ReleaseType::Major => {
            next_record.major += 1;
            next_record.minor = 1;
            next_record.patch = 1;
            true
        }
    };

    // The freshly bumped development line always starts at tweak 1.
    next_record.version_string = format!(
        "{}.{}.{}.1",
        next_record.major, next_record.minor, next_record.patch
    );
    next_record.revision += 1;
    next_record.githash = state.sha.clone();
    next_record.describe = format!("v{}-prestable", next_record.version_string);

    Ok(ReleasePlan {
        new_tag,
        new_branch,
        release_record,
        next_record,
        create_new_branch,
    })
}
