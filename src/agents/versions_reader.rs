use crate::error::Result;
use colored::Colorize;
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Top level of `versions.json`. Only an array is a versions list.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VersionsFile {
    List(Vec<VersionEntry>),
    Other(Value),
}

/// One element of the list. Anything that is not a string is kept only so it
/// can be reported and skipped.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum VersionEntry {
    Label(String),
    Other(Value),
}

/// Labels that were loaded plus the entries that had to be dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArchivedVersions {
    pub labels: Vec<String>,
    pub skipped: Vec<String>,
}

/// VersionsReaderAgent loads the list of archived docs versions.
///
/// The list is optional: a missing file, invalid JSON or a top-level value that
/// is not an array all degrade to an empty list.
pub struct VersionsReaderAgent {
    versions_path: PathBuf,
}

impl VersionsReaderAgent {
    pub fn new<P: AsRef<Path>>(versions_path: P) -> Self {
        Self {
            versions_path: versions_path.as_ref().to_path_buf(),
        }
    }

    pub fn read(&self) -> ArchivedVersions {
        match self.try_read() {
            Ok(versions) => versions,
            Err(e) => {
                if std::env::var("DOCVER_VERBOSE").is_ok() {
                    eprintln!(
                        "{}",
                        format!(
                            "   [DEBUG] No usable versions list at {}: {}",
                            self.versions_path.display(),
                            e
                        )
                        .dimmed()
                    );
                }
                ArchivedVersions::default()
            }
        }
    }

    fn try_read(&self) -> Result<ArchivedVersions> {
        let content = fs::read_to_string(&self.versions_path)?;
        let file: VersionsFile = serde_json::from_str(&content)?;
        Ok(Self::collect(file))
    }

    fn collect(file: VersionsFile) -> ArchivedVersions {
        let entries = match file {
            VersionsFile::List(entries) => entries,
            VersionsFile::Other(other) => {
                return ArchivedVersions {
                    labels: Vec::new(),
                    skipped: vec![other.to_string()],
                };
            }
        };

        let mut versions = ArchivedVersions::default();
        for entry in entries {
            match entry {
                VersionEntry::Label(label) if is_embeddable(&label) => versions.labels.push(label),
                VersionEntry::Label(label) => versions.skipped.push(format!("{label:?}")),
                VersionEntry::Other(other) => versions.skipped.push(other.to_string()),
            }
        }
        versions
    }
}

/// A label ends up inside single-quoted literals in the config.
fn is_embeddable(label: &str) -> bool {
    !label.is_empty() && !label.contains(['\'', '\\', '\n', '\r'])
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn read_from(content: &str) -> ArchivedVersions {
        let dir = tempdir().unwrap();
        let path = dir.path().join("versions.json");
        fs::write(&path, content).unwrap();
        VersionsReaderAgent::new(&path).read()
    }

    #[test]
    fn reads_labels_in_file_order() {
        let versions = read_from(r#"["0.6", "0.5", "0.4.1"]"#);
        assert_eq!(versions.labels, vec!["0.6", "0.5", "0.4.1"]);
        assert!(versions.skipped.is_empty());
    }

    #[test]
    fn missing_file_is_empty() {
        let dir = tempdir().unwrap();
        let versions = VersionsReaderAgent::new(dir.path().join("versions.json")).read();
        assert_eq!(versions, ArchivedVersions::default());
    }

    #[test]
    fn invalid_json_is_empty() {
        let versions = read_from("[\"0.5\",");
        assert!(versions.labels.is_empty());
    }

    #[test]
    fn non_array_is_empty() {
        let versions = read_from(r#"{"0.5": "0.5"}"#);
        assert!(versions.labels.is_empty());
        assert_eq!(versions.skipped.len(), 1);
    }

    #[test]
    fn skips_non_string_and_unquotable_entries() {
        let versions = read_from(r#"["0.6", 0.5, null, {"v": "0.4"}, "it's", "", "0.3"]"#);
        assert_eq!(versions.labels, vec!["0.6", "0.3"]);
        assert_eq!(versions.skipped.len(), 5);
    }

    #[test]
    fn keeps_non_numeric_labels() {
        let versions = read_from(r#"["next-1", "2.0.0-beta"]"#);
        assert_eq!(versions.labels, vec!["next-1", "2.0.0-beta"]);
    }
}
