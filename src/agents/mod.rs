pub mod config_editor;
pub mod versions_reader;
pub mod website_scanner;

pub use config_editor::DocsConfigEditor;
pub use versions_reader::VersionsReaderAgent;
pub use website_scanner::{WebsiteInfo, WebsiteScannerAgent};
