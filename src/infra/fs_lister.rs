use crate::app::ports::{DirectoryLister, FolderEntry};
use crate::error::{CatalogError, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

/// Lists the immediate subdirectories of a folder, sorted by name.
///
/// Plain files are ignored, so stray files next to the ID folders are never fetched.
pub struct FsDirectoryLister;

impl DirectoryLister for FsDirectoryLister {
    fn list(&self, path: &Path) -> Result<Vec<FolderEntry>> {
        let listing = |source: std::io::Error| CatalogError::Listing {
            path: path.to_path_buf(),
            source,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(listing)? {
            let entry = entry.map_err(listing)?;
            if !entry.path().is_dir() {
                debug!(path = %entry.path().display(), "skipping non-directory entry");
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => entries.push(FolderEntry {
                    name,
                    path: entry.path(),
                }),
                Err(raw) => warn!(name = ?raw, "skipping folder with non UTF-8 name"),
            }
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }
}
