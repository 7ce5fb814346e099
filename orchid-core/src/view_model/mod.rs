//! View Models
//!
//! Screen-level state derived from the favorites store and the catalog.
//! Rendering is left to the shell that owns them.

mod catalog;
mod favorites;
mod detail;


pub use catalog::{CatalogState, CatalogStatus, CatalogViewModel};
pub use favorites::{FavoritesViewModel, NO_FAVORITES_MESSAGE};
pub use detail::DetailViewModel;
