//! Pure formatting functions for terminal output.
//!
//! Everything here prints and returns; user interaction and workflow
//! decisions live elsewhere.

use console::style;

use crate::planner::ReleasePlan;

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red().bold(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Display the computed release plan before any command runs.
///
/// Shows the tag the release starts from, the draft tag to publish and
/// the branch the release line will live on.
pub fn display_plan(latest_tag: &str, plan: &ReleasePlan) {
    println!("\n{}", style("Planned release:").bold());
    println!("  Latest tag:  {}", style(latest_tag).red());
    println!("  New tag:     {}", style(plan.new_tag.to_string()).green());
    if plan.create_new_branch {
        println!("  New branch:  {}", style(&plan.new_branch).green());
    } else {
        println!("  Branch:      {} (existing)", plan.new_branch);
    }
    println!(
        "  Next version: {} (revision {})\n",
        plan.next_record.version_string, plan.next_record.revision
    );
}
