use anyhow::Result;
use clap::Parser;

use git_release::cli::orchestration::{run_release, ReleaseOptions};
use git_release::config;
use git_release::domain::ReleaseType;
use git_release::ui;
use git_release::vcs::ShellRunner;

#[derive(clap::Parser)]
#[command(
    name = "git-release",
    about = "Bump the project version and cut a release branch, requires `git` and `gh`"
)]
struct Args {
    #[arg(
        long = "type",
        value_parser = ["major", "minor"],
        default_value = "minor",
        help = "Release type, a new branch is created only for 'major' and 'minor'"
    )]
    release_type: String,

    #[arg(long, help = "Path to the versions file, relative to the repository root")]
    versions_file: Option<String>,

    #[arg(long, help = "Skip checking the repository for uncommitted changes")]
    no_check_dirty: bool,

    #[arg(
        long,
        help = "Skip the branch check; by default 'major' and 'minor' run only from the \
                trunk branch and 'patch' only from its '$MAJOR.$MINOR' release branch"
    )]
    no_check_branch: bool,

    #[arg(long, help = "Skip publishing a draft release for the new tag")]
    no_publish_release: bool,

    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = match config::load_config(args.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => {
            ui::display_error(&format!("Error loading config: {}", e));
            std::process::exit(1);
        }
    };

    let release_type: ReleaseType = args.release_type.parse()?;

    let runner = match ShellRunner::discover(".") {
        Ok(runner) => runner,
        Err(e) => {
            ui::display_error(&format!("Git repository error: {}", e));
            std::process::exit(1);
        }
    };

    let versions_file = runner
        .root()
        .join(args.versions_file.as_deref().unwrap_or(&config.versions_file));

    let opts = ReleaseOptions {
        release_type,
        versions_file,
        check_dirty: !args.no_check_dirty,
        check_branch: !args.no_check_branch,
        publish_release: !args.no_publish_release,
    };

    match run_release(&opts, &config, &runner) {
        Ok(summary) => {
            ui::display_success(&format!(
                "Release {} prepared on branch {}",
                summary.new_tag, summary.new_branch
            ));
            Ok(())
        }
        Err(e) => {
            ui::display_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
