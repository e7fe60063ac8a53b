use crate::error::{DocverError, Result};
use std::path::{Path, PathBuf};

const FORBIDDEN: &[&str] = &["/etc", "/sys", "/proc", "/dev", "/boot"];

/// Path helpers used when resolving the website directory and its files.
pub struct PathValidator;

impl PathValidator {
    /// Canonicalises the website directory, refusing files and system directories.
    pub fn validate_website_dir(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        let canonical = path.canonicalize().map_err(|e| {
            DocverError::ProjectValidation(format!(
                "Invalid website directory '{}': {e}",
                path.display()
            ))
        })?;

        if !canonical.is_dir() {
            return Err(DocverError::ProjectValidation(format!(
                "Path '{}' is not a directory",
                canonical.display()
            )));
        }

        Self::ensure_not_system(path, &canonical)?;
        Ok(canonical)
    }

    /// Resolves where a file docver is about to overwrite really lives and
    /// refuses system directories, `..` and symlinks included.
    ///
    /// The file may be missing; its parent is resolved instead.
    pub fn validate_target_file(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        let canonical = match path.canonicalize() {
            Ok(canonical) => canonical,
            Err(_) => match (path.parent(), path.file_name()) {
                (Some(parent), Some(name)) => parent
                    .canonicalize()
                    .map(|dir| dir.join(name))
                    .unwrap_or_else(|_| path.to_path_buf()),
                _ => path.to_path_buf(),
            },
        };

        Self::ensure_not_system(path, &canonical)?;
        Ok(canonical)
    }

    /// Joins `file` onto `base` unless it is already absolute.
    ///
    /// The file does not have to exist yet; reading it is the caller's job.
    pub fn resolve_file(base: impl AsRef<Path>, file: impl AsRef<Path>) -> PathBuf {
        let file = file.as_ref();
        if file.is_absolute() {
            file.to_path_buf()
        } else {
            base.as_ref().join(file)
        }
    }

    fn ensure_not_system(path: &Path, canonical: &Path) -> Result<()> {
        for forbidden in FORBIDDEN {
            let forbidden_path = Path::new(forbidden);
            let hits = path.starts_with(forbidden_path)
                || canonical.starts_with(forbidden_path)
                || forbidden_path
                    .canonicalize()
                    .is_ok_and(|resolved| canonical.starts_with(resolved));

            if hits {
                return Err(DocverError::ProjectValidation(format!(
                    "Access to system directory '{}' is not allowed",
                    forbidden
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn validate_website_dir_accepts_directory() {
        let dir = tempdir().unwrap();
        let canonical = PathValidator::validate_website_dir(dir.path()).unwrap();
        assert_eq!(canonical, dir.path().canonicalize().unwrap());
    }

    #[test]
    fn validate_website_dir_rejects_file() {
        let dir = tempdir().unwrap();
        let file_path = dir.path().join("docusaurus.config.ts");
        fs::write(&file_path, "export default {};").unwrap();
        let err = PathValidator::validate_website_dir(&file_path).unwrap_err();
        assert!(matches!(err, DocverError::ProjectValidation(_)));
    }

    #[test]
    fn validate_website_dir_rejects_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("website");
        assert!(PathValidator::validate_website_dir(missing).is_err());
    }

    #[test]
    fn validate_website_dir_rejects_system_directory() {
        assert!(PathValidator::validate_website_dir("/etc").is_err());
    }

    #[test]
    fn validate_target_file_accepts_missing_file_in_website() {
        let dir = tempdir().unwrap();
        let target = dir.path().join("docusaurus.config.ts");
        let root = dir.path().canonicalize().unwrap();
        let canonical = PathValidator::validate_target_file(&target).unwrap();
        assert_eq!(canonical, root.join("docusaurus.config.ts"));
    }

    #[test]
    fn validate_target_file_rejects_system_directory() {
        let result = PathValidator::validate_target_file("/etc/docusaurus.config.ts");
        assert!(matches!(result, Err(DocverError::ProjectValidation(_))));
    }

    #[test]
    fn validate_target_file_rejects_traversal_into_system_directory() {
        let dir = tempdir().unwrap();
        let mut target = dir.path().to_path_buf();
        for _ in dir.path().components() {
            target.push("..");
        }
        target.push("etc/docusaurus.config.ts");

        assert!(PathValidator::validate_target_file(&target).is_err());
    }

    #[test]
    fn resolve_file_joins_relative_paths() {
        let resolved = PathValidator::resolve_file("/srv/website", "versions.json");
        assert_eq!(resolved, PathBuf::from("/srv/website/versions.json"));
    }

    #[test]
    fn resolve_file_keeps_absolute_paths() {
        let resolved = PathValidator::resolve_file("/srv/website", "/tmp/other.json");
        assert_eq!(resolved, PathBuf::from("/tmp/other.json"));
    }
}
