//! Catalog Source Trait
//!
//! Where the catalog comes from. The app reads it over HTTP; tests
//! substitute scripted sources.

use async_trait::async_trait;
use crate::domain::{Category, DomainResult};

#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch the full catalog, every category with its items
    async fn fetch_categories(&self) -> DomainResult<Vec<Category>>;
}
