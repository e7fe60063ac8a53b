use crate::docs::DocsVersion;

const ENTRY_INDENT: &str = "            ";
const FIELD_INDENT: &str = "              ";
const CLOSE_INDENT: &str = "          ";

/// The `versions: { ... }` object of a Docusaurus docs preset.
///
/// `current` always comes first with an empty path, followed by one entry per
/// archived version whose label and path are both the version itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionsBlock {
    current: DocsVersion,
    archived: Vec<String>,
}

impl VersionsBlock {
    pub fn new(current: DocsVersion, archived: Vec<String>) -> Self {
        Self { current, archived }
    }

    pub fn current(&self) -> &DocsVersion {
        &self.current
    }

    pub fn archived(&self) -> &[String] {
        &self.archived
    }

    /// Number of entries, `current` included.
    pub fn entry_count(&self) -> usize {
        self.archived.len() + 1
    }

    /// Renders the block without the trailing comma that follows it in the config.
    pub fn render(&self) -> String {
        let mut entries = Vec::with_capacity(self.entry_count());
        entries.push(render_entry("current", self.current.as_str(), ""));
        for label in &self.archived {
            entries.push(render_entry(&format!("'{label}'"), label, label));
        }

        format!("versions: {{\n{}\n{CLOSE_INDENT}}}", entries.join(",\n"))
    }
}

fn render_entry(key: &str, label: &str, path: &str) -> String {
    format!(
        "{ENTRY_INDENT}{key}: {{\n\
         {FIELD_INDENT}label: '{label}',\n\
         {FIELD_INDENT}path: '{path}',\n\
         {ENTRY_INDENT}}}"
    )
}
