use std::fs;
use std::path::Path;

use crate::error::{ReleaseError, Result};

/// Version fields persisted in the project version file.
///
/// `version_string` and `describe` are derived from the numeric fields
/// and the commit distance; the release planner is their only writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionRecord {
    pub revision: u32,
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
    pub githash: String,
    pub describe: String,
    pub version_string: String,
}

impl VersionRecord {
    /// Read a record from the version file.
    ///
    /// Only lines starting with `SET(` are parsed; the content up to the
    /// closing parenthesis splits at the first whitespace into a name and
    /// a value. Every field is required and integer fields must convert;
    /// a missing or unknown field is an error, never a default.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = fs::read_to_string(path.as_ref())?;

        let mut revision = None;
        let mut major = None;
        let mut minor = None;
        let mut patch = None;
        let mut githash = None;
        let mut describe = None;
        let mut version_string = None;

        for line in text.lines() {
            let line = line.trim();
            let Some(body) = line.strip_prefix("SET(") else {
                continue;
            };
            let Some(body) = body.strip_suffix(')') else {
                return Err(ReleaseError::version_file(format!(
                    "unterminated assignment '{}'",
                    line
                )));
            };
            let Some((name, value)) = body.split_once(char::is_whitespace) else {
                return Err(ReleaseError::version_file(format!(
                    "assignment '{}' has no value",
                    line
                )));
            };
            let value = value.trim();

            match name {
                "VERSION_REVISION" => revision = Some(parse_int(name, value)?),
                "VERSION_MAJOR" => major = Some(parse_int(name, value)?),
                "VERSION_MINOR" => minor = Some(parse_int(name, value)?),
                "VERSION_PATCH" => patch = Some(parse_int(name, value)?),
                "VERSION_GITHASH" => githash = Some(value.to_string()),
                "VERSION_DESCRIBE" => describe = Some(value.to_string()),
                "VERSION_STRING" => version_string = Some(value.to_string()),
                other => {
                    return Err(ReleaseError::version_file(format!(
                        "unknown field '{}'",
                        other
                    )))
                }
            }
        }

        Ok(VersionRecord {
            revision: required(revision, "VERSION_REVISION")?,
            major: required(major, "VERSION_MAJOR")?,
            minor: required(minor, "VERSION_MINOR")?,
            patch: required(patch, "VERSION_PATCH")?,
            githash: required(githash, "VERSION_GITHASH")?,
            describe: required(describe, "VERSION_DESCRIBE")?,
            version_string: required(version_string, "VERSION_STRING")?,
        })
    }

    /// Write the record using the fixed template.
    ///
    /// The file is written next to the target and renamed into place, so
    /// a crash mid-write never leaves a truncated version file behind.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, self.render())?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    fn render(&self) -> String {
        format!(
            "# This file is rewritten by git-release on every release,\n\
             # do not edit the values by hand.\n\
             SET(VERSION_REVISION {})\n\
             SET(VERSION_MAJOR {})\n\
             SET(VERSION_MINOR {})\n\
             SET(VERSION_PATCH {})\n\
             SET(VERSION_GITHASH {})\n\
             SET(VERSION_DESCRIBE {})\n\
             SET(VERSION_STRING {})\n\
             # end of autochange\n",
            self.revision,
            self.major,
            self.minor,
            self.patch,
            self.githash,
            self.describe,
            self.version_string
        )
    }
}

fn parse_int(name: &str, value: &str) -> Result<u32> {
    value.parse().map_err(|_| {
        ReleaseError::version_file(format!("field '{}' has non-integer value '{}'", name, value))
    })
}

fn required<T>(value: Option<T>, name: &str) -> Result<T> {
    value.ok_or_else(|| ReleaseError::version_file(format!("missing field '{}'", name)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VersionRecord {
        VersionRecord {
            revision: 100,
            major: 22,
            minor: 3,
            patch: 5,
            githash: "0123456789abcdef0123456789abcdef01234567".to_string(),
            describe: "v22.3.5.4-prestable".to_string(),
            version_string: "22.3.5.4".to_string(),
        }
    }

    #[test]
    fn test_render_lists_fields_in_template_order() {
        let text = sample().render();
        let names: Vec<&str> = text
            .lines()
            .filter_map(|l| l.strip_prefix("SET("))
            .filter_map(|l| l.split_whitespace().next())
            .collect();
        assert_eq!(
            names,
            vec![
                "VERSION_REVISION",
                "VERSION_MAJOR",
                "VERSION_MINOR",
                "VERSION_PATCH",
                "VERSION_GITHASH",
                "VERSION_DESCRIBE",
                "VERSION_STRING",
            ]
        );
    }

    #[test]
    fn test_parse_int_rejects_garbage() {
        assert!(parse_int("VERSION_MAJOR", "twenty-two").is_err());
        assert!(parse_int("VERSION_MAJOR", "-1").is_err());
        assert_eq!(parse_int("VERSION_MAJOR", "22").unwrap(), 22);
    }
}
