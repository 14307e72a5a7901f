// src/utils/http.rs

//! HTTP client utilities.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::CrawlerConfig;

/// Source of raw page content.
///
/// Every call is a fresh round trip; implementations must not cache.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the body of `url`, failing on transport errors and non-success statuses.
    async fn fetch(&self, url: &str) -> Result<String>;
}

/// Create a configured asynchronous HTTP client.
pub fn create_client(config: &CrawlerConfig) -> Result<Client> {
    let client = Client::builder()
        .user_agent(&config.user_agent)
        .timeout(Duration::from_secs(config.timeout_secs))
        .build()?;
    Ok(client)
}

/// `PageFetcher` backed by a shared reqwest client.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Build a fetcher with its own client from crawler settings.
    pub fn from_config(config: &CrawlerConfig) -> Result<Self> {
        Ok(Self::new(create_client(config)?))
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(AppError::status(url, status.as_u16()));
        }
        Ok(response.text().await?)
    }
}
