// Folder traversal: content root -> game folders -> mod folders

pub mod catalog;
pub mod mod_folder;

pub use catalog::CatalogBuilder;
pub use mod_folder::ModFolderAggregator;

use crate::config::FailurePolicy;
use crate::error::{CatalogError, Result};
use crate::metrics::{self, Entity};
use crate::types::Lookup;
use std::path::Path;
use tracing::warn;

/// The ID a folder stands for: its final path component.
pub fn folder_id(folder: &Path) -> Result<&str> {
    folder
        .file_name()
        .and_then(|name| name.to_str())
        .ok_or_else(|| {
            CatalogError::Config(format!(
                "cannot derive an ID from folder '{}'",
                folder.display()
            ))
        })
}

/// Apply the failure policy to one resolution outcome.
///
/// `Ok(None)` means "leave this entity out and carry on"; an `Err` stops the run.
pub(crate) fn settle<T>(
    policy: FailurePolicy,
    entity: Entity,
    id: &str,
    outcome: Result<Lookup<T>>,
) -> Result<Option<T>> {
    match outcome {
        Ok(lookup) => Ok(lookup.found()),
        Err(e) if policy == FailurePolicy::Skip && e.is_per_id() => {
            warn!(id, kind = ?e.kind(), error = %e, "skipping {:?} after failure", entity);
            metrics::record_skipped_failure(entity);
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
