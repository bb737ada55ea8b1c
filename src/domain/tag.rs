use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::{ReleaseError, Result};

/// Full release tag grammar: `v{major}.{minor}.{patch}.{tweak}-{stage}`.
const TAG_PATTERN: &str = r"^v(\d+)\.(\d+)\.(\d+)\.(\d+)-(testing|prestable|stable|lts)$";

fn tag_regex() -> &'static Regex {
    static TAG_RE: OnceLock<Regex> = OnceLock::new();
    TAG_RE.get_or_init(|| Regex::new(TAG_PATTERN).expect("tag pattern is a valid regex"))
}

/// Release stage carried by every tag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Testing,
    Prestable,
    Stable,
    Lts,
}

impl Stage {
    /// Wire form of the stage as it appears in tags
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Testing => "testing",
            Stage::Prestable => "prestable",
            Stage::Stable => "stable",
            Stage::Lts => "lts",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Stage {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "testing" => Ok(Stage::Testing),
            "prestable" => Ok(Stage::Prestable),
            "stable" => Ok(Stage::Stable),
            "lts" => Ok(Stage::Lts),
            other => Err(ReleaseError::invalid_tag(other)),
        }
    }
}

/// A release tag decomposed into its four numeric components and stage.
///
/// Values of this type only exist for strings that satisfied the tag
/// grammar; construction goes through [Tag::parse], which rejects
/// malformed input with `InvalidTagFormat` before any field is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub tweak: u32,
    pub stage: Stage,
}

impl Tag {
    /// Validate and decompose a tag string
    pub fn parse(tag: &str) -> Result<Self> {
        let caps = tag_regex()
            .captures(tag)
            .ok_or_else(|| ReleaseError::invalid_tag(tag))?;

        let number = |idx: usize| -> Result<u32> {
            caps[idx]
                .parse::<u32>()
                .map_err(|_| ReleaseError::invalid_tag(tag))
        };

        Ok(Tag {
            major: number(1)?,
            minor: number(2)?,
            patch: number(3)?,
            tweak: number(4)?,
            stage: caps[5].parse()?,
        })
    }

    /// The dotted numeric part of the tag, without the `v` prefix or stage
    pub fn version_part(&self) -> String {
        format!("{}.{}.{}.{}", self.major, self.minor, self.patch, self.tweak)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}-{}", self.version_part(), self.stage)
    }
}

impl FromStr for Tag {
    type Err = ReleaseError;

    fn from_str(s: &str) -> Result<Self> {
        Tag::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_tag() {
        let tag = Tag::parse("v22.3.5.7-prestable").unwrap();
        assert_eq!(tag.major, 22);
        assert_eq!(tag.minor, 3);
        assert_eq!(tag.patch, 5);
        assert_eq!(tag.tweak, 7);
        assert_eq!(tag.stage, Stage::Prestable);
    }

    #[test]
    fn test_parse_all_stages() {
        for (text, stage) in [
            ("testing", Stage::Testing),
            ("prestable", Stage::Prestable),
            ("stable", Stage::Stable),
            ("lts", Stage::Lts),
        ] {
            let tag = Tag::parse(&format!("v1.2.3.4-{}", text)).unwrap();
            assert_eq!(tag.stage, stage);
        }
    }

    #[test]
    fn test_display_round_trip() {
        for s in [
            "v22.3.5.7-prestable",
            "v1.1.1.1-testing",
            "v100.2.30.4000-lts",
        ] {
            let tag = Tag::parse(s).unwrap();
            assert_eq!(tag.to_string(), s);
            assert_eq!(Tag::parse(&tag.to_string()).unwrap(), tag);
        }
    }

    #[test]
    fn test_parse_rejects_malformed_tags() {
        for s in [
            "",
            "22.3.5.7-prestable",
            "v22.3.5-prestable",
            "v22.3.5.7.9-prestable",
            "v22.3.5.7",
            "v22.3.5.7-beta",
            "v22.3.5.7-PRESTABLE",
            "va.b.c.d-stable",
            "v22.3.5.7-stable ",
            "release-22.3.5.7",
        ] {
            let err = Tag::parse(s).unwrap_err();
            assert!(
                matches!(err, ReleaseError::InvalidTagFormat { .. }),
                "expected InvalidTagFormat for '{}', got {:?}",
                s,
                err
            );
        }
    }

    #[test]
    fn test_parse_rejects_component_overflow() {
        assert!(Tag::parse("v99999999999.1.1.1-stable").is_err());
    }

    #[test]
    fn test_version_part() {
        let tag = Tag::parse("v22.3.5.7-stable").unwrap();
        assert_eq!(tag.version_part(), "22.3.5.7");
    }

    #[test]
    fn test_stage_from_str_rejects_unknown() {
        assert!("nightly".parse::<Stage>().is_err());
    }
}
