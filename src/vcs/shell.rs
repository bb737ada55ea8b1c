use std::path::{Path, PathBuf};
use std::process::Command;

use log::debug;

use crate::error::{ReleaseError, Result};

use super::VcsRunner;

/// Runs `git` and `gh` as subprocesses in the repository root.
///
/// Each call is a full request/response: the command runs to completion,
/// stdout is returned trimmed, and a non-zero exit becomes
/// `CommandFailed` with the rendered command line and exit code.
pub struct ShellRunner {
    root: PathBuf,
}

impl ShellRunner {
    /// Discover the repository containing `path` and anchor all commands
    /// at its top-level directory.
    pub fn discover<P: AsRef<Path>>(path: P) -> Result<Self> {
        let root = run_in(path.as_ref(), "git", &["rev-parse", "--show-toplevel"])?;
        Ok(ShellRunner {
            root: PathBuf::from(root),
        })
    }

    /// Top-level directory of the repository
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn run(&self, program: &str, args: &[&str]) -> Result<String> {
        run_in(&self.root, program, args)
    }
}

fn run_in(cwd: &Path, program: &str, args: &[&str]) -> Result<String> {
    let rendered = format!("{} {}", program, args.join(" "));
    debug!("running `{}` in {}", rendered, cwd.display());

    let output = Command::new(program).args(args).current_dir(cwd).output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        debug!("`{}` stderr: {}", rendered, stderr.trim());
        // A signal-terminated child has no exit code; report it as -1.
        let code = output.status.code().unwrap_or(-1);
        return Err(ReleaseError::command_failed(rendered, code));
    }

    Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
}

impl VcsRunner for ShellRunner {
    fn current_branch(&self) -> Result<String> {
        self.run("git", &["branch", "--show-current"])
    }

    fn head_sha(&self) -> Result<String> {
        self.run("git", &["rev-parse", "HEAD"])
    }

    fn nearest_tag(&self) -> Result<String> {
        self.run("git", &["describe", "--tags", "--abbrev=0"])
    }

    fn commits_since(&self, reference: &str) -> Result<u32> {
        let range = format!("{}..HEAD", reference);
        let count = self.run("git", &["rev-list", &range, "--count"])?;
        count
            .parse()
            .map_err(|_| ReleaseError::vcs(format!("commit count '{}' is not a number", count)))
    }

    fn ensure_clean(&self) -> Result<()> {
        self.run("git", &["diff", "HEAD", "--exit-code"])?;
        Ok(())
    }

    fn create_branch(&self, name: &str, start_point: Option<&str>) -> Result<()> {
        match start_point {
            Some(start) => self.run("git", &["checkout", "-b", name, start])?,
            None => self.run("git", &["checkout", "-b", name])?,
        };
        Ok(())
    }

    fn commit_file(&self, path: &str, message: &str) -> Result<()> {
        self.run("git", &["commit", "-m", message, "--", path])?;
        Ok(())
    }

    fn push_branch(&self, remote: &str, branch: &str) -> Result<()> {
        self.run("git", &["push", "-u", remote, branch])?;
        Ok(())
    }

    fn create_draft_release(&self, tag: &str, target: &str) -> Result<()> {
        self.run("gh", &["release", "create", "--draft", tag, "--target", target])?;
        Ok(())
    }

    fn create_pull_request(&self, title: &str, body: &str, label: Option<&str>) -> Result<()> {
        let mut args = vec!["pr", "create", "--title", title, "--body", body];
        if let Some(label) = label {
            args.push("--label");
            args.push(label);
        }
        self.run("gh", &args)?;
        Ok(())
    }
}
