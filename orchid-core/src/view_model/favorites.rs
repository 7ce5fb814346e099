//! Favorites View Model
//!
//! The favorite list screen: the set in insertion order and a remove action.

use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::Orchid;
use crate::store::{FavoriteSet, FavoritesStore};

/// Shown when the set is empty
pub const NO_FAVORITES_MESSAGE: &str = "No favorites added";

pub struct FavoritesViewModel {
    favorites: Arc<FavoritesStore>,
}

impl FavoritesViewModel {
    pub fn new(favorites: Arc<FavoritesStore>) -> Self {
        Self { favorites }
    }

    pub fn items(&self) -> FavoriteSet {
        self.favorites.snapshot()
    }

    pub fn is_empty(&self) -> bool {
        self.favorites.is_empty()
    }

    pub fn subscribe(&self) -> watch::Receiver<FavoriteSet> {
        self.favorites.subscribe()
    }

    /// Drop an orchid from the list. Returns false if it was not there.
    pub fn remove(&self, orchid: &Orchid) -> bool {
        self.favorites.remove(orchid)
    }
}
