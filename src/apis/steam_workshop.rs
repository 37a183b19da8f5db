use crate::app::ports::PageFetcher;
use crate::constants::{workshop_url, MOD_ID_KEY, MOD_NAME_KEY, WORKSHOP_ERROR_SENTINEL};
use crate::error::{CatalogError, Result};
use crate::metrics::{self, Entity};
use crate::parser::{self, DetailPanel};
use crate::types::{Lookup, ModRecord};
use scraper::Html;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Title and right-panel details pulled from a workshop item page.
struct WorkshopPage {
    title: Option<String>,
    details: DetailPanel,
}

impl WorkshopPage {
    fn parse(body: &str) -> Self {
        let document = Html::parse_document(body);
        Self {
            title: parser::page_title(&document),
            details: parser::detail_panel(&document),
        }
    }
}

/// Resolves workshop item IDs to mod records via their community pages.
#[derive(Clone)]
pub struct WorkshopClient {
    fetcher: Arc<dyn PageFetcher>,
    base_url: String,
}

impl WorkshopClient {
    pub fn new(fetcher: Arc<dyn PageFetcher>, base_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            base_url: base_url.into(),
        }
    }

    #[instrument(skip(self))]
    pub async fn resolve_mod(&self, mod_id: &str) -> Result<Lookup<ModRecord>> {
        let url = workshop_url(&self.base_url, mod_id);
        let body = self.fetcher.fetch(&url).await?;
        let page = WorkshopPage::parse(&body);
        let title = page.title.ok_or(CatalogError::MissingTitle { url })?;

        if title.contains(WORKSHOP_ERROR_SENTINEL) {
            info!("Invalid mod {}", mod_id);
            metrics::record_not_found(Entity::Mod);
            return Ok(Lookup::NotFound);
        }

        let mut record = ModRecord::new(mod_id, parser::clean_mod_title(&title));
        info!("{} - {}", mod_id, record.mod_name);

        if let Some(mismatch) = page.details.mismatch {
            warn!(
                mod_id,
                labels = mismatch.labels,
                values = mismatch.values,
                "detail labels and values differ in length, keeping the first {}",
                mismatch.labels.min(mismatch.values)
            );
            metrics::record_shape_mismatch();
        }

        for (label, value) in page.details.pairs {
            if label.is_empty() {
                debug!(mod_id, value = %value, "dropping detail with empty label");
                continue;
            }
            if label == MOD_ID_KEY || label == MOD_NAME_KEY {
                warn!(mod_id, label = %label, "detail label collides with a record key, dropping");
                continue;
            }
            info!(mod_id, "{}: {}", label, value);
            record.attributes.insert(label, value);
        }

        metrics::record_resolved(Entity::Mod);
        Ok(Lookup::Found(record))
    }
}
