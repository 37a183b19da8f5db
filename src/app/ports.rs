use crate::error::Result;
use crate::types::Catalog;
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Fetches a remote page and returns its body as text.
///
/// Implementations must turn non-success responses and timeouts into errors;
/// the resolvers never see a failed response body.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// One immediate child of a listed directory. The name doubles as a remote ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FolderEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Lists the immediate subdirectories of a folder, sorted by name.
///
/// Plain files are left out: only folders stand for games or mods.
pub trait DirectoryLister: Send + Sync {
    fn list(&self, path: &Path) -> Result<Vec<FolderEntry>>;
}

/// Receives the catalog while it is being built and once it is complete.
pub trait CatalogSink: Send + Sync {
    /// Called after each game is appended. Default is a no-op.
    fn checkpoint(&self, _partial: &Catalog) -> Result<()> {
        Ok(())
    }

    fn finish(&self, catalog: &Catalog) -> Result<()>;
}
