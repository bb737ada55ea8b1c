use std::fmt;
use std::str::FromStr;

use crate::error::{ReleaseError, Result};

/// Requested release type, which drives the version bump and branch policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseType {
    Major,
    Minor,
    Patch,
}

impl ReleaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReleaseType::Major => "major",
            ReleaseType::Minor => "minor",
            ReleaseType::Patch => "patch",
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReleaseType {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "major" => Ok(ReleaseType::Major),
            "minor" => Ok(ReleaseType::Minor),
            "patch" => Ok(ReleaseType::Patch),
            other => Err(ReleaseError::UnknownReleaseType(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_types() {
        assert_eq!("major".parse::<ReleaseType>().unwrap(), ReleaseType::Major);
        assert_eq!("minor".parse::<ReleaseType>().unwrap(), ReleaseType::Minor);
        assert_eq!("patch".parse::<ReleaseType>().unwrap(), ReleaseType::Patch);
    }

    #[test]
    fn test_parse_unknown_type() {
        let err = "hotfix".parse::<ReleaseType>().unwrap_err();
        assert!(matches!(err, ReleaseError::UnknownReleaseType(ref t) if t == "hotfix"));
    }

    #[test]
    fn test_display_round_trip() {
        for t in [ReleaseType::Major, ReleaseType::Minor, ReleaseType::Patch] {
            assert_eq!(t.to_string().parse::<ReleaseType>().unwrap(), t);
        }
    }
}
