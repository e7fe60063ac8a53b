use crate::error::{DocverError, Result};
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static VERSION_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\d+(\.\d+)?$").expect("valid version regex"));

/// A docs version label such as `0.7` or `1.2.3`.
///
/// Only the shape is checked: two or three dot-separated runs of ASCII digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DocsVersion(String);

impl DocsVersion {
    pub fn parse(raw: &str) -> Result<Self> {
        if VERSION_PATTERN.is_match(raw) && raw.is_ascii() {
            Ok(Self(raw.to_string()))
        } else {
            Err(DocverError::InvalidVersion(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for DocsVersion {
    type Err = DocverError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for DocsVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
