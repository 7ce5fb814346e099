//! Application Context
//!
//! The one place that owns the favorites store. Consumers get it, and the
//! view models built on it, from here rather than from global state.

use std::sync::Arc;

use crate::catalog::{CatalogSource, HttpCatalogSource};
use crate::config::AppConfig;
use crate::domain::{DomainResult, Orchid};
use crate::repository::{KeyValueStore, SqliteStore};
use crate::store::FavoritesStore;
use crate::view_model::{CatalogViewModel, DetailViewModel, FavoritesViewModel};

pub struct AppContext {
    config: AppConfig,
    favorites: Arc<FavoritesStore>,
    catalog: Arc<dyn CatalogSource>,
}

impl AppContext {
    /// Open the SQLite store, build the HTTP source and load favorites
    pub async fn init(config: AppConfig) -> DomainResult<Self> {
        let storage = SqliteStore::open(&config.db_path())?;
        let catalog = HttpCatalogSource::new(config.api_url.clone(), config.request_timeout())?;
        Ok(Self::from_parts(config, Arc::new(storage), Arc::new(catalog)).await)
    }

    /// Assemble from explicit collaborators
    pub async fn from_parts(
        config: AppConfig,
        storage: Arc<dyn KeyValueStore>,
        catalog: Arc<dyn CatalogSource>,
    ) -> Self {
        let favorites = Arc::new(FavoritesStore::open(storage).await);
        Self {
            config,
            favorites,
            catalog,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn favorites(&self) -> &Arc<FavoritesStore> {
        &self.favorites
    }

    pub fn catalog_view_model(&self) -> Arc<CatalogViewModel> {
        Arc::new(CatalogViewModel::new(
            Arc::clone(&self.catalog),
            Arc::clone(&self.favorites),
        ))
    }

    pub fn favorites_view_model(&self) -> FavoritesViewModel {
        FavoritesViewModel::new(Arc::clone(&self.favorites))
    }

    pub fn detail_view_model(&self, orchid: Orchid) -> DetailViewModel {
        DetailViewModel::new(orchid, Arc::clone(&self.favorites))
    }

    /// Wait for pending favorite writes
    pub async fn shutdown(&self) -> DomainResult<()> {
        self.favorites.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::domain::Category;

    struct OneCategory;

    #[async_trait]
    impl CatalogSource for OneCategory {
        async fn fetch_categories(&self) -> DomainResult<Vec<Category>> {
            Ok(vec![Category::new("Natural", vec![Orchid::named("Vanda")])])
        }
    }

    #[tokio::test]
    async fn test_view_models_share_one_store() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        };
        let storage = Arc::new(SqliteStore::open(&config.db_path()).unwrap());
        let ctx = AppContext::from_parts(config, storage, Arc::new(OneCategory)).await;

        let catalog = ctx.catalog_view_model();
        catalog.refresh().await;
        let vanda = catalog.find("Vanda").unwrap();

        ctx.detail_view_model(vanda.clone()).toggle();

        assert!(ctx.favorites_view_model().items().iter().any(|o| o.name == "Vanda"));
        catalog.refresh().await;
        assert!(catalog.find("Vanda").unwrap().favorite);
        ctx.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_favorites_survive_restart() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig {
            data_dir: dir.path().to_path_buf(),
            ..Default::default()
        };

        {
            let storage = Arc::new(SqliteStore::open(&config.db_path()).unwrap());
            let ctx = AppContext::from_parts(config.clone(), storage, Arc::new(OneCategory)).await;
            ctx.favorites().toggle(&Orchid::named("Vanda"));
            ctx.shutdown().await.unwrap();
        }

        let storage = Arc::new(SqliteStore::open(&config.db_path()).unwrap());
        let ctx = AppContext::from_parts(config, storage, Arc::new(OneCategory)).await;
        assert!(ctx.favorites().contains("Vanda"));
    }
}
