#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Mutex;
use std::time::Duration;
use workshop_catalog::app::ports::PageFetcher;
use workshop_catalog::constants::{STORE_APP_URL, WORKSHOP_ITEM_URL};
use workshop_catalog::error::{CatalogError, Result};

/// Serves canned pages by URL and remembers every URL it was asked for.
#[derive(Default)]
pub struct FakeFetcher {
    pages: HashMap<String, String>,
    delays: HashMap<String, Duration>,
    calls: Mutex<Vec<String>>,
}

impl FakeFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_game(mut self, game_id: &str, title: &str) -> Self {
        self.pages
            .insert(format!("{}{}", STORE_APP_URL, game_id), page_with_title(title));
        self
    }

    pub fn with_mod(mut self, mod_id: &str, title: &str, details: &[(&str, &str)]) -> Self {
        self.pages.insert(
            format!("{}{}", WORKSHOP_ITEM_URL, mod_id),
            workshop_page(title, details),
        );
        self
    }

    pub fn with_raw_mod_page(mut self, mod_id: &str, body: &str) -> Self {
        self.pages
            .insert(format!("{}{}", WORKSHOP_ITEM_URL, mod_id), body.to_string());
        self
    }

    pub fn with_delay(mut self, url: String, delay: Duration) -> Self {
        self.delays.insert(url, delay);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn workshop_calls(&self) -> usize {
        self.calls()
            .iter()
            .filter(|url| url.starts_with(WORKSHOP_ITEM_URL))
            .count()
    }
}

#[async_trait]
impl PageFetcher for FakeFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        self.calls.lock().unwrap().push(url.to_string());
        if let Some(delay) = self.delays.get(url) {
            tokio::time::sleep(*delay).await;
        }
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| CatalogError::Status {
                url: url.to_string(),
                status: 404,
            })
    }
}

pub fn page_with_title(title: &str) -> String {
    format!(
        "<html><head><title>{}</title></head><body><p>page</p></body></html>",
        title
    )
}

pub fn workshop_page(title: &str, details: &[(&str, &str)]) -> String {
    let labels: String = details
        .iter()
        .map(|(label, _)| format!(r#"<div class="detailsStatLeft">{} </div>"#, label))
        .collect();
    let values: String = details
        .iter()
        .map(|(_, value)| format!(r#"<div class="detailsStatRight">{}</div>"#, value))
        .collect();
    format!(
        r#"<html><head><title>{}</title></head><body>
        <div class="detailsStatsContainerLeft">{}</div>
        <div class="detailsStatsContainerRight">{}</div>
        </body></html>"#,
        title, labels, values
    )
}

/// Create `root/<game>/<mod>` folders.
pub fn make_content_root(root: &Path, layout: &[(&str, Vec<&str>)]) {
    for (game, mods) in layout {
        fs::create_dir_all(root.join(game)).unwrap();
        for m in mods {
            fs::create_dir_all(root.join(game).join(m)).unwrap();
        }
    }
}
