use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Region of the docs config that docver rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigRegion {
    CurrentLabel,
    VersionsBlock,
}

impl fmt::Display for ConfigRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigRegion::CurrentLabel => write!(f, "current: {{ label: '...' }}"),
            ConfigRegion::VersionsBlock => write!(f, "versions: {{ ... }}"),
        }
    }
}

#[derive(Error, Debug)]
pub enum DocverError {
    #[error("Invalid version '{0}'")]
    InvalidVersion(String),

    #[error("Project validation failed: {0}")]
    ProjectValidation(String),

    #[error("Failed to read config '{}': {source}", .path.display())]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write config '{}': {source}", .path.display())]
    ConfigWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Pattern {0} not found in config (use --lenient to skip)")]
    PatternNotFound(ConfigRegion),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, DocverError>;
