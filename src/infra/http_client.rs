use crate::app::ports::PageFetcher;
use crate::error::{CatalogError, Result};
use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

pub struct ReqwestFetcher {
    client: reqwest::Client,
}

impl ReqwestFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        crate::metrics::record_fetch();
        let resp = self.client.get(url).send().await.map_err(|e| classify(url, e))?;
        let status = resp.status();
        debug!(url, status = status.as_u16(), final_url = %resp.url(), "fetched page");

        if !status.is_success() {
            return Err(CatalogError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        resp.text().await.map_err(|e| classify(url, e))
    }
}

fn classify(url: &str, err: reqwest::Error) -> CatalogError {
    if err.is_timeout() {
        CatalogError::Timeout {
            url: url.to_string(),
        }
    } else {
        CatalogError::Http(err)
    }
}
