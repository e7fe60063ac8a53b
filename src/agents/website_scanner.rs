use crate::error::Result;
use crate::utils::PathValidator;
use std::path::{Path, PathBuf};

pub const DEFAULT_CONFIG_FILE: &str = "docusaurus.config.ts";
pub const DEFAULT_VERSIONS_FILE: &str = "versions.json";

/// WebsiteScannerAgent resolves the files docver works on, once, at the CLI boundary
pub struct WebsiteScannerAgent {
    website_dir: PathBuf,
    config_file: PathBuf,
    versions_file: PathBuf,
}

impl WebsiteScannerAgent {
    pub fn new<P: AsRef<Path>>(website_dir: P) -> Self {
        Self {
            website_dir: website_dir.as_ref().to_path_buf(),
            config_file: PathBuf::from(DEFAULT_CONFIG_FILE),
            versions_file: PathBuf::from(DEFAULT_VERSIONS_FILE),
        }
    }

    pub fn with_config_file<P: AsRef<Path>>(mut self, config_file: P) -> Self {
        self.config_file = config_file.as_ref().to_path_buf();
        self
    }

    pub fn with_versions_file<P: AsRef<Path>>(mut self, versions_file: P) -> Self {
        self.versions_file = versions_file.as_ref().to_path_buf();
        self
    }

    /// Validates the website directory and resolves both file paths against it.
    ///
    /// Neither file is required to exist here: a missing config fails when it is
    /// read, a missing versions list is tolerated. The config is overwritten, so
    /// it must not resolve into a system directory.
    pub fn resolve(&self) -> Result<WebsiteInfo> {
        let website_dir = PathValidator::validate_website_dir(&self.website_dir)?;
        let config_path = PathValidator::resolve_file(&website_dir, &self.config_file);
        PathValidator::validate_target_file(&config_path)?;
        let versions_path = PathValidator::resolve_file(&website_dir, &self.versions_file);

        Ok(WebsiteInfo {
            website_dir,
            config_path,
            versions_path,
        })
    }
}

#[derive(Debug, Clone)]
pub struct WebsiteInfo {
    pub website_dir: PathBuf,
    pub config_path: PathBuf,
    pub versions_path: PathBuf,
}

impl WebsiteInfo {
    pub fn config_name(&self) -> String {
        file_name(&self.config_path)
    }

    pub fn versions_name(&self) -> String {
        file_name(&self.versions_path)
    }
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
