pub mod block;
pub mod version;

pub use block::VersionsBlock;
pub use version::DocsVersion;
