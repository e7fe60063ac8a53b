use crate::docs::{DocsVersion, VersionsBlock};
use crate::error::{ConfigRegion, DocverError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// `current: { label: '<label>'`, capturing everything before the quoted label.
static CURRENT_LABEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(current:\s*\{\s*label:\s*)'[^']+'").expect("valid current label regex")
});

/// From `versions:` up to the `},` closing it at ten spaces, plus the `},` of the
/// enclosing docs options.
static VERSIONS_BLOCK_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?m)versions:\s*\{[\s\S]*?^ {10}\},\s*\n\s*\},")
        .expect("valid versions block regex")
});

/// Restores the docs options closing brace consumed by the block pattern.
const BLOCK_SUFFIX: &str = ",\n        },";

/// In-memory copy of the docs config being edited.
#[derive(Debug, Clone)]
pub struct ConfigEdit {
    original: String,
    content: String,
    unmatched: Vec<ConfigRegion>,
}

impl ConfigEdit {
    pub fn new(content: String) -> Self {
        Self {
            original: content.clone(),
            content,
            unmatched: Vec::new(),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn is_changed(&self) -> bool {
        self.content != self.original
    }

    /// Regions left untouched because their pattern was not found (lenient mode only).
    pub fn unmatched(&self) -> &[ConfigRegion] {
        &self.unmatched
    }
}

/// DocsConfigEditor rewrites the version metadata of a Docusaurus config in place.
///
/// Editing is textual so that everything outside the two rewritten regions
/// keeps its exact bytes.
pub struct DocsConfigEditor {
    config_path: PathBuf,
    lenient: bool,
}

impl DocsConfigEditor {
    pub fn new<P: AsRef<Path>>(config_path: P) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            lenient: false,
        }
    }

    /// With `lenient` set a missing region is recorded instead of failing the edit.
    pub fn lenient(mut self, lenient: bool) -> Self {
        self.lenient = lenient;
        self
    }

    pub fn load(&self) -> Result<ConfigEdit> {
        fs::read_to_string(&self.config_path)
            .map(ConfigEdit::new)
            .map_err(|source| DocverError::ConfigRead {
                path: self.config_path.clone(),
                source,
            })
    }

    pub fn write(&self, edit: &ConfigEdit) -> Result<()> {
        fs::write(&self.config_path, edit.content()).map_err(|source| DocverError::ConfigWrite {
            path: self.config_path.clone(),
            source,
        })
    }

    /// Points `current.label` at `version`. Returns false if skipped in lenient mode.
    pub fn set_current_label(&self, edit: &mut ConfigEdit, version: &DocsVersion) -> Result<bool> {
        let updated = replace_current_label(&edit.content, version);
        self.apply(edit, updated, ConfigRegion::CurrentLabel)
    }

    /// Swaps the whole `versions` object for `block`. Returns false if skipped in lenient mode.
    pub fn replace_versions_block(
        &self,
        edit: &mut ConfigEdit,
        block: &VersionsBlock,
    ) -> Result<bool> {
        let updated = replace_versions_block(&edit.content, block);
        self.apply(edit, updated, ConfigRegion::VersionsBlock)
    }

    fn apply(
        &self,
        edit: &mut ConfigEdit,
        updated: Option<String>,
        region: ConfigRegion,
    ) -> Result<bool> {
        match updated {
            Some(content) => {
                edit.content = content;
                Ok(true)
            }
            None if self.lenient => {
                edit.unmatched.push(region);
                Ok(false)
            }
            None => Err(DocverError::PatternNotFound(region)),
        }
    }
}

/// Replaces the first `current: { label: '...'` label, or returns `None` if there is none.
pub fn replace_current_label(content: &str, version: &DocsVersion) -> Option<String> {
    let caps = CURRENT_LABEL_PATTERN.captures(content)?;
    let whole = caps.get(0)?;
    let prefix = caps.get(1)?;

    let mut updated = String::with_capacity(content.len() + version.as_str().len());
    updated.push_str(&content[..whole.start()]);
    updated.push_str(prefix.as_str());
    updated.push('\'');
    updated.push_str(version.as_str());
    updated.push('\'');
    updated.push_str(&content[whole.end()..]);
    Some(updated)
}

/// Replaces the first versions block, or returns `None` if there is none.
///
/// The rendered block is spliced in verbatim; labels containing `$` are not
/// treated as capture references.
pub fn replace_versions_block(content: &str, block: &VersionsBlock) -> Option<String> {
    let found = VERSIONS_BLOCK_PATTERN.find(content)?;
    let rendered = block.render();

    let mut updated = String::with_capacity(content.len() + rendered.len());
    updated.push_str(&content[..found.start()]);
    updated.push_str(&rendered);
    updated.push_str(BLOCK_SUFFIX);
    updated.push_str(&content[found.end()..]);
    Some(updated)
}
