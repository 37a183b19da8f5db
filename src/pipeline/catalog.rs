use super::{folder_id, settle, ModFolderAggregator};
use crate::apis::{StoreClient, WorkshopClient};
use crate::app::ports::{CatalogSink, DirectoryLister, PageFetcher};
use crate::config::{FailurePolicy, SteamConfig};
use crate::error::Result;
use crate::metrics::Entity;
use crate::types::{Catalog, GameRecord};
use futures::stream::{self, StreamExt};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

/// Walks a content root and composes the full catalog.
pub struct CatalogBuilder {
    store: StoreClient,
    mods: ModFolderAggregator,
    lister: Arc<dyn DirectoryLister>,
    policy: FailurePolicy,
    concurrency: usize,
}

impl CatalogBuilder {
    pub fn new(
        store: StoreClient,
        mods: ModFolderAggregator,
        lister: Arc<dyn DirectoryLister>,
        policy: FailurePolicy,
        concurrency: usize,
    ) -> Self {
        Self {
            store,
            mods,
            lister,
            policy,
            concurrency: concurrency.max(1),
        }
    }

    /// Wire up both resolvers against one fetcher and one lister.
    pub fn from_config(
        steam: &SteamConfig,
        fetcher: Arc<dyn PageFetcher>,
        lister: Arc<dyn DirectoryLister>,
    ) -> Self {
        let store = StoreClient::new(fetcher.clone(), steam.store_url.clone());
        let workshop = WorkshopClient::new(fetcher, steam.workshop_url.clone());
        let mods = ModFolderAggregator::new(
            workshop,
            lister.clone(),
            steam.on_error,
            steam.concurrency,
        );
        Self::new(store, mods, lister, steam.on_error, steam.concurrency)
    }

    pub fn mod_aggregator(&self) -> &ModFolderAggregator {
        &self.mods
    }

    pub async fn build_catalog(&self, root: &Path) -> Result<Catalog> {
        self.build_catalog_with(root, None).await
    }

    /// Build the catalog, handing the sink a checkpoint after every appended game.
    ///
    /// Games whose store page is the landing page are omitted along with their mods,
    /// which are never fetched.
    #[instrument(skip(self, sink))]
    pub async fn build_catalog_with(
        &self,
        root: &Path,
        sink: Option<&dyn CatalogSink>,
    ) -> Result<Catalog> {
        let entries = self.lister.list(root)?;
        info!("cataloging {} game folders", entries.len());

        let outcomes = stream::iter(entries)
            .map(|entry| async move { self.resolve_game_at(&entry.name, &entry.path).await })
            .buffered(self.concurrency);
        futures::pin_mut!(outcomes);

        let mut catalog = Catalog::default();
        while let Some(outcome) = outcomes.next().await {
            if let Some(game) = outcome? {
                catalog.games.push(game);
                if let Some(sink) = sink {
                    sink.checkpoint(&catalog)?;
                }
            }
        }

        info!(
            games = catalog.games.len(),
            mods = catalog.mod_count(),
            "catalog complete"
        );
        Ok(catalog)
    }

    /// Resolve a single game folder; its name is the game ID.
    pub async fn resolve_game_folder(&self, folder: &Path) -> Result<Option<GameRecord>> {
        let game_id = folder_id(folder)?;
        self.resolve_game_at(game_id, folder).await
    }

    async fn resolve_game_at(&self, game_id: &str, folder: &Path) -> Result<Option<GameRecord>> {
        let outcome = self.store.resolve_game(game_id).await;
        let game_name = match settle(self.policy, Entity::Game, game_id, outcome)? {
            Some(name) => name,
            None => return Ok(None),
        };

        let mods = self.mods.aggregate_mods(folder).await?;
        Ok(Some(GameRecord {
            id: game_id.to_string(),
            game_name,
            mods,
        }))
    }
}
