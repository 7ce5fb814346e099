//! Catalog View Model
//!
//! Combines the fetched catalog with favorites membership into a
//! display-ready list of categories.

use std::sync::Arc;

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::catalog::{merge_favorites, CatalogSource};
use crate::domain::{Category, Orchid};
use crate::store::FavoritesStore;

/// What the catalog screen shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogStatus {
    /// Nothing to show yet, a fetch is running or has not started
    Loading,
    /// Loaded, but there are no categories
    Empty,
    Ready,
}

/// Snapshot of the catalog screen state
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    /// Categories with derived favorite flags
    pub categories: Arc<Vec<Category>>,
    pub loading: bool,
    /// Message of the most recent failed refresh, cleared on success
    pub last_error: Option<String>,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self {
            categories: Arc::new(Vec::new()),
            loading: true,
            last_error: None,
        }
    }
}

impl CatalogState {
    pub fn status(&self) -> CatalogStatus {
        if !self.categories.is_empty() {
            CatalogStatus::Ready
        } else if self.loading {
            CatalogStatus::Loading
        } else {
            CatalogStatus::Empty
        }
    }
}

pub struct CatalogViewModel {
    source: Arc<dyn CatalogSource>,
    favorites: Arc<FavoritesStore>,
    state: watch::Sender<CatalogState>,
}

impl CatalogViewModel {
    pub fn new(source: Arc<dyn CatalogSource>, favorites: Arc<FavoritesStore>) -> Self {
        let (state, _) = watch::channel(CatalogState::default());
        Self {
            source,
            favorites,
            state,
        }
    }

    pub fn state(&self) -> CatalogState {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<CatalogState> {
        self.state.subscribe()
    }

    /// Fetch the catalog and re-derive every favorite flag.
    ///
    /// On failure the previous categories stay in place, loading is
    /// cleared and the error is logged. No retry.
    pub async fn refresh(&self) {
        self.state.send_modify(|state| state.loading = true);

        match self.source.fetch_categories().await {
            Ok(categories) => {
                // Read membership after the fetch so the latest toggle wins
                let favorites = self.favorites.snapshot();
                let merged = merge_favorites(categories, &favorites);
                log::info!("Catalog refreshed: {} categories", merged.len());

                self.state.send_replace(CatalogState {
                    categories: Arc::new(merged),
                    loading: false,
                    last_error: None,
                });
            }
            Err(e) => {
                log::error!("Failed to load orchids from API: {}", e);
                self.state.send_modify(|state| {
                    state.loading = false;
                    state.last_error = Some(e.to_string());
                });
            }
        }
    }

    /// Refresh now, then again after every change to the favorite set.
    ///
    /// Changes arriving during a refresh are folded into the next one.
    /// The task holds the view model weakly: it ends at the first change
    /// after the last `Arc` is dropped, or when the store goes away.
    pub fn spawn_auto_refresh(self: &Arc<Self>) -> JoinHandle<()> {
        let view_model = Arc::downgrade(self);
        let mut changes = self.favorites.subscribe();

        tokio::spawn(async move {
            loop {
                match view_model.upgrade() {
                    Some(vm) => vm.refresh().await,
                    None => break,
                }
                if changes.changed().await.is_err() {
                    break;
                }
            }
            log::debug!("Catalog auto-refresh stopped");
        })
    }

    /// Toggle through the store; the auto-refresh picks up the change
    pub fn toggle_favorite(&self, orchid: &Orchid) -> bool {
        self.favorites.toggle(orchid)
    }

    /// Look an orchid up by name across all categories
    pub fn find(&self, name: &str) -> Option<Orchid> {
        self.state
            .borrow()
            .categories
            .iter()
            .flat_map(|category| category.items.iter())
            .find(|orchid| orchid.name == name)
            .cloned()
    }
}
