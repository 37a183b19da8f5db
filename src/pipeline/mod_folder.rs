use super::{folder_id, settle};
use crate::apis::WorkshopClient;
use crate::app::ports::DirectoryLister;
use crate::config::FailurePolicy;
use crate::error::Result;
use crate::metrics::Entity;
use crate::types::ModRecord;
use futures::stream::{self, StreamExt};
use std::path::Path;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Resolves every mod folder inside a game folder.
#[derive(Clone)]
pub struct ModFolderAggregator {
    workshop: WorkshopClient,
    lister: Arc<dyn DirectoryLister>,
    policy: FailurePolicy,
    concurrency: usize,
}

impl ModFolderAggregator {
    pub fn new(
        workshop: WorkshopClient,
        lister: Arc<dyn DirectoryLister>,
        policy: FailurePolicy,
        concurrency: usize,
    ) -> Self {
        Self {
            workshop,
            lister,
            policy,
            concurrency: concurrency.max(1),
        }
    }

    /// Mods come back in listing order; not-found (and, under `Skip`, failed) mods are left out.
    #[instrument(skip(self))]
    pub async fn aggregate_mods(&self, folder: &Path) -> Result<Vec<ModRecord>> {
        let entries = self.lister.list(folder)?;
        debug!("found {} mod folders", entries.len());

        // `buffered` yields in input order, so results line up with the listing
        let outcomes = stream::iter(entries)
            .map(|entry| async move {
                let outcome = self.workshop.resolve_mod(&entry.name).await;
                (entry.name, outcome)
            })
            .buffered(self.concurrency);
        futures::pin_mut!(outcomes);

        let mut mods = Vec::new();
        while let Some((mod_id, outcome)) = outcomes.next().await {
            if let Some(record) = settle(self.policy, Entity::Mod, &mod_id, outcome)? {
                mods.push(record);
            }
        }
        Ok(mods)
    }

    /// Resolve a single mod folder; its name is the mod ID.
    pub async fn resolve_mod_folder(&self, folder: &Path) -> Result<Option<ModRecord>> {
        let mod_id = folder_id(folder)?;
        let outcome = self.workshop.resolve_mod(mod_id).await;
        settle(self.policy, Entity::Mod, mod_id, outcome)
    }
}
