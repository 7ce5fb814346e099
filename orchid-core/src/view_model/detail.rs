//! Detail View Model
//!
//! One orchid handed over from a list, with its favorite toggle.

use std::sync::Arc;

use crate::domain::Orchid;
use crate::store::FavoritesStore;

pub struct DetailViewModel {
    orchid: Orchid,
    favorites: Arc<FavoritesStore>,
}

impl DetailViewModel {
    pub fn new(orchid: Orchid, favorites: Arc<FavoritesStore>) -> Self {
        Self { orchid, favorites }
    }

    pub fn orchid(&self) -> &Orchid {
        &self.orchid
    }

    /// Live membership, independent of the orchid's own `favorite` field
    pub fn is_favorite(&self) -> bool {
        self.favorites.is_favorite(&self.orchid)
    }

    pub fn toggle(&self) -> bool {
        self.favorites.toggle(&self.orchid)
    }

    pub fn favorite_label(&self) -> &'static str {
        if self.is_favorite() {
            "Remove from Favorites"
        } else {
            "Add to Favorites"
        }
    }

    pub fn detail_lines(&self) -> Vec<String> {
        let o = &self.orchid;
        vec![
            format!("Weight: {}g", o.weight),
            format!("Rating: {}", o.rating),
            format!("Price: ${}", o.price),
            format!("Color: {}", o.color),
            format!("Bonus: {}", o.bonus),
            format!("Origin: {}", o.origin),
        ]
    }
}
