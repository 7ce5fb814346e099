//! HTTP Catalog Source
//!
//! One GET against a fixed URL returning a JSON array of categories.

use async_trait::async_trait;
use std::time::Duration;

use crate::domain::{Category, DomainError, DomainResult};
use super::source::CatalogSource;

/// Default catalog endpoint
pub const DEFAULT_CATALOG_URL: &str = "https://667a188118a459f639525072.mockapi.io/categories";

pub struct HttpCatalogSource {
    client: reqwest::Client,
    url: String,
}

impl HttpCatalogSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> DomainResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, url))
    }

    /// Use a preconfigured client
    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalogSource {
    async fn fetch_categories(&self) -> DomainResult<Vec<Category>> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::Network(format!(
                "GET {} returned HTTP {}",
                self.url, status
            )));
        }

        let body = response.text().await?;
        let categories: Vec<Category> = serde_json::from_str(&body)?;
        log::debug!("Fetched {} categories from {}", categories.len(), self.url);
        Ok(categories)
    }
}
