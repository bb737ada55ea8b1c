//! Domain logic - pure release rules independent of VCS execution

pub mod release;
pub mod tag;

pub use release::ReleaseType;
pub use tag::{Stage, Tag};
