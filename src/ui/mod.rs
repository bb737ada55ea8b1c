//! User-facing output formatting

pub mod formatter;

pub use formatter::{display_error, display_plan, display_status, display_success};
