use crate::app::ports::CatalogSink;
use crate::error::Result;
use crate::types::Catalog;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Writes the catalog as a UTF-8 JSON file.
///
/// Each write goes to `<path>.tmp` first and is renamed over the target,
/// so a reader never sees a half-written document.
pub struct JsonFileSink {
    path: PathBuf,
    pretty: bool,
    incremental: bool,
}

impl JsonFileSink {
    pub fn new(path: impl Into<PathBuf>, pretty: bool, incremental: bool) -> Self {
        Self {
            path: path.into(),
            pretty,
            incremental,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, catalog: &Catalog) -> Result<()> {
        let text = if self.pretty {
            serde_json::to_string_pretty(catalog)?
        } else {
            serde_json::to_string(catalog)?
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, text)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl CatalogSink for JsonFileSink {
    fn checkpoint(&self, partial: &Catalog) -> Result<()> {
        if !self.incremental {
            return Ok(());
        }
        debug!(games = partial.games.len(), path = %self.path.display(), "checkpointing catalog");
        self.write(partial)
    }

    fn finish(&self, catalog: &Catalog) -> Result<()> {
        self.write(catalog)?;
        info!(
            games = catalog.games.len(),
            mods = catalog.mod_count(),
            path = %self.path.display(),
            "catalog written"
        );
        Ok(())
    }
}
