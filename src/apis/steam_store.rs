use crate::app::ports::PageFetcher;
use crate::constants::{store_url, STORE_LANDING_SENTINEL};
use crate::error::{CatalogError, Result};
use crate::metrics::{self, Entity};
use crate::parser;
use crate::types::Lookup;
use scraper::Html;
use std::sync::Arc;
use tracing::{info, instrument};

/// Resolves game IDs to display names via their store pages.
#[derive(Clone)]
pub struct StoreClient {
    fetcher: Arc<dyn PageFetcher>,
    base_url: String,
}

impl StoreClient {
    pub fn new(fetcher: Arc<dyn PageFetcher>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    /// Unknown apps redirect to the storefront landing page, which is reported as `NotFound`.
    /// Fetch failures and title-less pages are errors.
    #[instrument(skip(self))]
    pub async fn resolve_game(&self, game_id: &str) -> Result<Lookup<String>> {
        let url = store_url(&self.base_url, game_id);
        let body = self.fetcher.fetch(&url).await?;
        let title = read_title(&body).ok_or(CatalogError::MissingTitle { url })?;

        if title.contains(STORE_LANDING_SENTINEL) {
            info!("Invalid game {}", game_id);
            metrics::record_not_found(Entity::Game);
            return Ok(Lookup::NotFound);
        }

        let name = parser::clean_game_title(&title);
        info!("{} - {}", game_id, name);
        metrics::record_resolved(Entity::Game);
        Ok(Lookup::Found(name))
    }
}

fn read_title(body: &str) -> Option<String> {
    parser::page_title(&Html::parse_document(body))
}
