//! Release workflow orchestration
//!
//! Sequences a computed [ReleasePlan](crate::planner::ReleasePlan) into
//! concrete VCS operations. This layer contains no version logic of its
//! own; it wires state capture, the version file store and the planner
//! to a [VcsRunner].

use std::path::PathBuf;

use log::info;

use crate::config::Config;
use crate::domain::ReleaseType;
use crate::error::Result;
use crate::planner;
use crate::repo::RepositoryState;
use crate::ui;
use crate::vcs::VcsRunner;
use crate::version_file::VersionRecord;

/// Arguments for one release invocation.
///
/// Mirrors the CLI flags in a format suitable for orchestration logic,
/// so the workflow can be driven programmatically without clap.
#[derive(Debug, Clone, PartialEq)]
pub struct ReleaseOptions {
    /// Requested release type
    pub release_type: ReleaseType,

    /// Version file location
    pub versions_file: PathBuf,

    /// Fail when the working tree has uncommitted changes
    pub check_dirty: bool,

    /// Enforce the branch naming policy
    pub check_branch: bool,

    /// Publish a draft release for the new tag
    pub publish_release: bool,
}

/// Result of a completed release workflow
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseSummary {
    /// The draft tag that identifies this release
    pub new_tag: String,

    /// The branch carrying the release line
    pub new_branch: String,

    /// Whether the draft release was published
    pub published: bool,
}

/// Run one release end to end.
///
/// Every step is fatal on failure: side effects already made (a
/// published draft, a pushed branch) are left in place for manual
/// inspection rather than papered over.
pub fn run_release(
    opts: &ReleaseOptions,
    config: &Config,
    runner: &dyn VcsRunner,
) -> Result<ReleaseSummary> {
    let mut state = RepositoryState::capture(runner)?;

    if opts.check_dirty {
        ui::display_status("Checking if the working tree is clean");
        runner.ensure_clean()?;
    }

    let record = VersionRecord::load(&opts.versions_file)?;

    if opts.check_branch {
        planner::check_branch(opts.release_type, &state, &record, &config.trunk)?;
    }

    let plan = planner::plan(opts.release_type, &state, &record)?;
    ui::display_plan(&state.latest_tag.to_string(), &plan);

    if opts.publish_release {
        ui::display_status(&format!("Publishing draft release {}", plan.new_tag));
        runner.create_draft_release(&plan.new_tag.to_string(), &state.sha)?;
    }

    // TODO: keep a compensating-transaction log so a failure below can
    // withdraw the draft release and delete branches pushed so far.

    let versions_path = opts.versions_file.to_string_lossy().to_string();

    // Commit the bumped development version to a helper branch and open
    // a pull request back to the trunk.
    let helper_branch = format!("{}-helper", plan.new_branch);
    plan.next_record.save(&opts.versions_file)?;
    runner.create_branch(&helper_branch, None)?;
    runner.commit_file(
        &versions_path,
        &format!(
            "Auto version update to [{}] [{}]",
            plan.next_record.version_string, plan.next_record.revision
        ),
    )?;
    runner.push_branch(&config.remote, &helper_branch)?;
    runner.create_pull_request(
        &format!("Update version after release {}", plan.new_branch),
        &format!(
            "Automated version update to {} after cutting release {}.",
            plan.next_record.version_string, plan.new_tag
        ),
        None,
    )?;
    info!("pushed {} and opened its pull request", helper_branch);

    if plan.create_new_branch {
        // Cut the release branch from the commit before the version
        // bump and stamp it with the released record.
        runner.create_branch(&plan.new_branch, Some("HEAD~"))?;
        plan.release_record.save(&opts.versions_file)?;
        runner.commit_file(
            &versions_path,
            &format!(
                "Auto version update to [{}] [{}]",
                plan.release_record.version_string, plan.release_record.revision
            ),
        )?;
        state.refresh(runner)?;
        ui::display_status(&format!(
            "Release branch {} is at {}",
            plan.new_branch, state.sha_short
        ));
        runner.push_branch(&config.remote, &plan.new_branch)?;
        runner.create_pull_request(
            &format!("Release pull request for branch {}", plan.new_branch),
            "This pull request is part of the release cycle. It is used by the \
             CI system only, do not change it.",
            Some("release"),
        )?;
    }

    Ok(ReleaseSummary {
        new_tag: plan.new_tag.to_string(),
        new_branch: plan.new_branch,
        published: opts.publish_release,
    })
}
