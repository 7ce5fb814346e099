//! Favorites store and its background writer.

mod favorites;
mod writer;


pub use favorites::{toggled, FavoriteSet, FavoritesStore, FAVORITES_KEY};
